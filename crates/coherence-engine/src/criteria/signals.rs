//! Whole-text signals counted by the scoring criteria

use lazy_static::lazy_static;
use regex::Regex;

/// Evidentiary type groups for plurality of indicia (C1)
pub const EVIDENCE_TYPE_GROUPS: &[(&str, &[&str])] = &[
    ("witnesses", &["testigo", "declaraci[oó]n testimonial"]),
    ("expert reports", &["pericia", "peritaje"]),
    ("documents", &["documento", "oficio", "contrato"]),
    ("official records", &["acta", "intervenci[oó]n"]),
    ("audio-video", &["video", "grabaci[oó]n"]),
    ("logs", &["registro", "bit[aá]cora"]),
];

/// Reliability keywords for source reliability (C2), matched as stems
pub const RELIABILITY_KEYWORDS: &[&str] = &["persist", "coheren", "veros", "corroborad"];

pub const CONTRADICTION_KEYWORD: &str = "contradicci";

/// Logical connectors for the indicium-fact link (C3)
pub const LOGICAL_CONNECTORS: &[&str] = &[
    "por tanto",
    "por consiguiente",
    "en consecuencia",
    "se colige",
    "se desprende",
    "de ello se concluye",
];

/// Structural motivation markers (C7)
pub const MOTIVATION_SECTIONS: &[&str] = &[
    "considerando",
    "fundamento",
    "motivaci",
    "an[aá]lisis de la prueba",
];

/// Evidence independent of the main testimony (C13)
pub const INDEPENDENT_EVIDENCE: &[&str] = &[
    "certificado médico",
    "certificado médico legal",
    "examen médico",
    "pericia de adn",
    "huella dactilar",
    "huellas dactilares",
    "cámara de seguridad",
    "video",
    "grabación de audio",
    "registro telefónico",
    "whatsapp",
    "mensaje de texto",
    "acta de intervención",
    "acta de registro",
    "acta de incautación",
    "documento bancario",
    "estado de cuenta",
    "movimiento bancario",
    "pericia balística",
    "reconocimiento fotográfico",
    "reconocimiento en rueda",
];

/// Direct eyewitness phrases (C13)
pub const EYEWITNESS_PHRASES: &[&str] = &[
    "testigo presencial",
    "presenció directamente",
    "vio cuando",
    "observó cuando",
];

lazy_static! {
    static ref EVIDENCE_TYPE_MATCHERS: Vec<Regex> = EVIDENCE_TYPE_GROUPS
        .iter()
        .map(|(_, alternatives)| Regex::new(&format!("(?i){}", alternatives.join("|"))).unwrap())
        .collect();

    static ref MOTIVATION_MATCHERS: Vec<Regex> = MOTIVATION_SECTIONS
        .iter()
        .map(|pattern| Regex::new(&format!("(?i){}", pattern)).unwrap())
        .collect();

    static ref ALTERNATIVE_MENTION: Regex = Regex::new(
        r"(?i)hip[oó]tesis alternativa|versi[oó]n exculpatoria|otra explicaci[oó]n|error de identificaci[oó]n|defensa del imputado"
    ).unwrap();

    static ref ALTERNATIVE_ANALYSIS: Regex = Regex::new(
        r"(?i)se analiza la versi[oó]n del imputado|se contrasta con la versi[oó]n de la defensa|se descarta la hip[oó]tesis"
    ).unwrap();

    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();

    static ref SEQUENCE_MARKER: Regex = Regex::new(
        r"(?i)primera ocasi[oó]n|segunda|tercera|posteriormente|con anterioridad|despu[eé]s"
    ).unwrap();

    /// Psychological impact offered as proof of the fact it should corroborate;
    /// `.` stays within a line
    static ref CIRCULAR_REASONING: Regex = Regex::new(
        r"(?i)pericia psicol[oó]gica.*agresi[oó]n sexual vivida|impacto emocional.*demuestra la agresi[oó]n"
    ).unwrap();
}

/// Signal counts extracted from the whole decision text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub evidence_types: usize,
    pub reliability: usize,
    pub contradiction: bool,
    pub connectors: usize,
    pub alternative_mentioned: bool,
    pub alternative_analysed: bool,
    pub years: usize,
    pub sequence_markers: usize,
    pub circular: bool,
    pub motivation_sections: usize,
    pub corroborations: usize,
}

impl Signals {
    pub fn collect(text: &str) -> Self {
        let text_lower = text.to_lowercase();

        Self {
            evidence_types: EVIDENCE_TYPE_MATCHERS
                .iter()
                .filter(|re| re.is_match(&text_lower))
                .count(),
            reliability: count_present(&text_lower, RELIABILITY_KEYWORDS),
            contradiction: text_lower.contains(CONTRADICTION_KEYWORD),
            connectors: count_present(&text_lower, LOGICAL_CONNECTORS),
            alternative_mentioned: ALTERNATIVE_MENTION.is_match(&text_lower),
            alternative_analysed: ALTERNATIVE_ANALYSIS.is_match(&text_lower),
            years: YEAR.find_iter(&text_lower).count(),
            sequence_markers: SEQUENCE_MARKER.find_iter(&text_lower).count(),
            circular: CIRCULAR_REASONING.is_match(&text_lower),
            motivation_sections: MOTIVATION_MATCHERS
                .iter()
                .filter(|re| re.is_match(&text_lower))
                .count(),
            corroborations: count_present(&text_lower, INDEPENDENT_EVIDENCE)
                + count_present(&text_lower, EYEWITNESS_PHRASES),
        }
    }
}

/// Number of distinct keywords occurring in already lowercased text
fn count_present(text_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text_lower.contains(*kw)).count()
}

//! Declarative catalog of legal-reasoning patterns
//!
//! Every concept the rule engine reasons about is a [`Tag`] backed by a list
//! of case-insensitive alternatives. The tagger evaluates the catalog once per
//! paragraph and the rules only combine tags, so no rule performs its own text
//! search. Alternatives are regular-expression fragments; most are plain
//! phrases.

use lazy_static::lazy_static;
use regex::{Regex, RegexSet};

/// Evidentiary insufficiency
pub const DOUBT: &[&str] = &[
    "no existe prueba suficiente",
    "no se ha acreditado",
    "no se ha demostrado",
    "no se ha probado",
    "no se cuenta con prueba suficiente",
    "no hay elementos suficientes",
];

/// Full certainty / accreditation
pub const CERTAINTY: &[&str] = &[
    "ha quedado acreditado",
    "se encuentra plenamente probado",
    "plena certeza",
    "se ha demostrado de manera fehaciente",
    "plenamente demostrado",
];

/// Alternative hypotheses admittedly not excluded
pub const ALTERNATIVES_NOT_EXCLUDED: &[&str] = &[
    "no se descartan otras versiones",
    "no se descartan otras hipótesis",
    "no puede descartarse",
    "no puede excluirse",
    "no se ha descartado la versión del imputado",
];

/// Sole possible explanation
pub const SOLE_EXPLANATION: &[&str] = &[
    "única explicación posible",
    "única explicación razonable",
    "única conclusión posible",
    "la única hipótesis plausible",
    "la única explicación atendible",
];

pub const SIMPLE_SUSPICION: &[&str] = &["sospecha simple", "mera sospecha", "sospecha inicial"];

pub const GRAVE_SUSPICION: &[&str] = &["sospecha grave", "sospecha reveladora"];

pub const INDICIUM: &[&str] = &[
    r"\bindicio\b",
    r"\bindicios\b",
    r"\bhecho indiciario\b",
    r"\bhechos indiciarios\b",
    r"\bhecho base\b",
];

/// Expert and forensic sources
pub const STRONG_SOURCE: &[&str] = &[
    r"\bpericia\b",
    r"\binforme pericial\b",
    r"\bperito\b",
    r"\binforme t[eé]cnico\b",
    r"\bdictamen\b",
    r"\bpericia oficial\b",
];

/// Witness and declarative sources
pub const WEAK_SOURCE: &[&str] = &[
    r"\btestigo\b",
    r"\bdeclaraci[oó]n\b",
    r"\bmanifestaci[oó]n\b",
    r"\bversi[oó]n del imputado\b",
];

/// Joint or convergent assessment of indicia
pub const CONVERGENCE: &[&str] = &[
    "en su conjunto",
    "considerados en su conjunto",
    "valorados en conjunto",
    "en forma conjunta",
    "en conjunto permiten concluir",
    "indicios convergentes",
    "coherentes entre s[ií]",
];

pub const WEAK_EVALUATION: &[&str] = &[
    r"(?:indicio|prueba|elemento|medio de prueba).{0,80}(?:no es concluyente|no resulta concluyente|no es determinante|no es suficiente|es d[eé]bil|tiene escaso valor|poca fuerza acreditativa|no permite afirmar|solo sugiere|aporta poco|limitado alcance probatorio)",
];

pub const STRONG_EVALUATION: &[&str] = &[
    r"(?:indicio|prueba|elemento|medio de prueba).{0,80}(?:es contundente|resulta contundente|es concluyente|resulta concluyente|es determinante|resulta determinante|es rotundo|inequ[ií]voco|de singular fuerza acreditativa|permite afirmar sin duda|permite tener por cierto|permite tener por plenamente acreditado)",
];

/// Explicit incompatibility between indicia
pub const INDICIA_CONFLICT: &[&str] = &[
    "no coincide con",
    "contradice",
    "incompatible con",
    "no guarda relaci[oó]n",
    "no se relaciona",
    "resulta incompatible",
    "es inconsistente con",
    "se opone a",
    "discrepa",
];

/// Language articulating indicia with one another
pub const CONNECTION: &[&str] = &[
    "relaci[oó]n l[oó]gica",
    "conexi[oó]n",
    "v[ií]nculo",
    "enlace",
    "coherencia externa",
    "armoniza",
];

pub const MERE_PRESENCE: &[&str] = &[
    "por el solo hecho de encontrarse",
    "por el solo hecho de estar",
    "basta la presencia",
    "por estar en el lugar",
];

/// Broad attribution of knowledge, used with mere presence
pub const ASSUMED_KNOWLEDGE: &[&str] = &[
    "deb[ií]a conocer",
    "sab[ií]a",
    "no pod[ií]a ignorar",
    "ten[ií]a conocimiento",
];

pub const POSITION: &[&str] = &[
    "por su calidad de",
    "en su condici[oó]n de",
    "en su calidad de",
    "por su cargo de",
];

pub const RESPONSIBILITY: &[&str] = &[
    "es responsable",
    "dirig[ií]a",
    "orden[oó]",
    "autoriz[oó]",
    "dispuso",
    "ten[ií]a dominio del hecho",
];

pub const CATEGORICAL_CONCLUSION: &[&str] = &[
    "es evidente que",
    "resulta evidente que",
    "no cabe duda de que",
    "resulta incuestionable que",
    "es indudable que",
];

/// Any mention of evidence backing a categorical conclusion
pub const EVIDENCE_REFERENCE: &[&str] = &[
    "prueba",
    "pruebas",
    "indicio",
    "indicios",
    "hecho indiciario",
    "hechos indiciarios",
    "pericia",
    "perito",
    "informe pericial",
    "informe t[eé]cnico",
    "testigo",
    "testigos",
    "declaraci[oó]n",
    "declaraciones",
    "acta",
    "actas",
    "informe",
];

pub const TESTIMONY: &[&str] = &[
    "testigo",
    "declaraci[oó]n",
    "manifestaci[oó]n",
    "versi[oó]n del imputado",
];

/// Probative force attributed beyond what the source can carry
pub const UNDUE_STRENGTH: &[&str] = &[
    "indicio contundente",
    "prueba concluyente",
    "prueba determinante",
    "prueba inequ[ií]voca",
    "permite tener por acreditado",
    "demuestra claramente",
    "acredita fehacientemente",
];

pub const AUTHORSHIP: &[&str] = &[
    "particip[oó]",
    "coordin[oó]",
    "dirigi[oó]",
    "orden[oó]",
    "autoriz[oó]",
    "ten[ií]a dominio del hecho",
    "responsable del hecho",
];

pub const CONCLUDING_CONNECTOR: &[&str] = &[
    "por tanto",
    "por ende",
    "en consecuencia",
    "por consiguiente",
    "se concluye que",
    "queda acreditado que",
    "resulta acreditado que",
    "resulta probado que",
    "se tiene por probado que",
];

/// Evidence integrated in an inferential step
pub const INDICIARY_SUPPORT: &[&str] = &[
    "prueba",
    "pruebas",
    "indicio",
    "indicios",
    "hecho indiciario",
    "hechos indiciarios",
    "pericia",
    "perito",
    "acta",
    "informe",
    "testigo",
    "declaraci[oó]n",
    "documento",
];

pub const CAUSAL_CLAIM: &[&str] = &[
    "lo cual demuestra que",
    "esto demuestra que",
    "ello demuestra que",
    "lo que prueba que",
    "esto evidencia que",
    "ello evidencia que",
    "lo que acredita que",
];

pub const COORDINATION: &[&str] = &[
    "coordin[oó]",
    "dirigi[oó]",
    "organiz[oó]",
    "autoriz[oó]",
    "dispuso",
    "control[oó]",
    "ten[ií]a dominio del hecho",
];

/// Explicit knowledge claims about the accused
pub const KNOWLEDGE_CLAIM: &[&str] = &[
    "sab[ií]a que",
    "ten[ií]a conocimiento de",
    "no pod[ií]a ignorar",
    "deb[ií]a conocer",
    "pleno conocimiento de",
];

/// A concrete evidentiary medium being cited
pub const EVIDENCE_MEDIUM: &[&str] = &[
    "declaraci[oó]n de",
    "declar[oó] que",
    "manifiest[oó] que",
    "seg[uú]n el acta",
    "seg[uú]n consta en el acta",
    "acta policial",
    "acta fiscal",
    "informe pericial",
    "informe t[eé]cnico",
    "pericia oficial",
    "pericia practicada",
    "seg[uú]n el informe",
];

/// Negative or hesitant content of the evidence itself
pub const NEGATIVE_CONTENT: &[&str] = &[
    "no recuerda",
    "no reconoci[oó]",
    "no vio",
    "no observ[oó]",
    "no estuvo presente",
    "no le consta",
    "no puede precisar",
    "no puede afirmar",
    "no se aprecia",
    "no se advierte",
    "no se demuestra",
    "no se acredita",
];

pub const STRONG_INFERENCE: &[&str] = &[
    "de lo que se desprende que",
    "de ello se desprende que",
    "lo que demuestra que",
    "lo que acredita que",
    "ello demuestra que",
    "ello acredita que",
    "permite tener por acreditado que",
    "confirma que",
    "demuestra claramente que",
    "acredita de manera concluyente que",
];

pub const ALTERNATIVE_MENTION: &[&str] = &[
    "otras versiones",
    "otras explicaciones",
    "otras hipótesis",
    "hip[oó]tesis alternativa",
    "versi[oó]n alternativa",
    "coartada",
    "explicaci[oó]n del imputado",
    "otra posible explicaci[oó]n",
];

pub const ALTERNATIVES_NOT_DISCARDED: &[&str] = &[
    "no se descartan",
    "no puede descartarse",
    "no puede excluirse",
    "no se ha descartado",
    "no excluye la versi[oó]n del imputado",
];

pub const SINGLE_CONCLUSION: &[&str] = &[
    "única explicaci[oó]n posible",
    "única explicaci[oó]n razonable",
    "única conclusi[oó]n posible",
    "única hip[oó]tesis plausible",
    "único camino l[oó]gico",
    "conclusi[oó]n inevitable",
];

/// Dismissal formulas that carry no reasoning
pub const EMPTY_DISMISSAL: &[&str] = &[
    "no es cre[ií]ble",
    "no resulta razonable",
    "no convence al juzgador",
    "no es atendible",
    "resulta inveros[ií]mil",
    "no tiene asidero",
];

pub const ALTERNATIVE_ANALYSIS: &[&str] = &[
    "analiza la versi[oó]n alternativa",
    "contrasta la hip[oó]tesis",
    "examina la explicaci[oó]n del imputado",
    "eval[uú]a la versi[oó]n alternativa",
];

pub const EXPERIENCE_MAXIM: &[&str] = &[
    "m[aá]ximas de la experiencia",
    "reglas de experiencia",
    "reglas de la experiencia com[uú]n",
    "m[aá]ximas de experiencia com[uú]n",
];

pub const SOUND_JUDGMENT: &[&str] = &[
    "sana cr[ií]tica",
    "reglas de la sana cr[ií]tica",
    "principios de la sana cr[ií]tica",
];

pub const GENERALIZATION: &[&str] = &[
    "lo normal es que",
    "lo habitual es que",
    "es de experiencia com[uú]n que",
    "es de conocimiento general que",
    "suele ocurrir que",
    "es l[oó]gico pensar que",
    "es natural que",
];

pub const STEREOTYPE: &[&str] = &[
    "quien nada debe nada teme",
    "nadie inocente huye",
    "quien huye es porque algo teme",
    "todo narcotraficante",
    "todo delincuente",
    "ninguna persona honesta",
    "ning[uú]n inocente",
];

/// Empirical or evidentiary backing for an experience maxim
pub const EMPIRICAL_SUPPORT: &[&str] = &[
    "prueba",
    "pruebas",
    "indicio",
    "indicios",
    "hecho indiciario",
    "hechos indiciarios",
    "pericia",
    "perito",
    "informe pericial",
    "informe t[eé]cnico",
    "estudio estad[ií]stico",
    "estad[ií]sticas",
    "datos emp[ií]ricos",
    "acta",
    "actas",
    "documento",
    "documentaci[oó]n",
];

/// Named concept recognised in decision text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Doubt,
    Certainty,
    AlternativesNotExcluded,
    SoleExplanation,
    SimpleSuspicion,
    GraveSuspicion,
    Indicium,
    StrongSource,
    WeakSource,
    Convergence,
    WeakEvaluation,
    StrongEvaluation,
    IndiciaConflict,
    Connection,
    MerePresence,
    AssumedKnowledge,
    Position,
    Responsibility,
    CategoricalConclusion,
    EvidenceReference,
    Testimony,
    UndueStrength,
    Authorship,
    ConcludingConnector,
    IndiciarySupport,
    CausalClaim,
    Coordination,
    KnowledgeClaim,
    EvidenceMedium,
    NegativeContent,
    StrongInference,
    AlternativeMention,
    AlternativesNotDiscarded,
    SingleConclusion,
    EmptyDismissal,
    AlternativeAnalysis,
    ExperienceMaxim,
    SoundJudgment,
    Generalization,
    Stereotype,
    EmpiricalSupport,
}

impl Tag {
    pub const ALL: [Tag; 41] = [
        Tag::Doubt,
        Tag::Certainty,
        Tag::AlternativesNotExcluded,
        Tag::SoleExplanation,
        Tag::SimpleSuspicion,
        Tag::GraveSuspicion,
        Tag::Indicium,
        Tag::StrongSource,
        Tag::WeakSource,
        Tag::Convergence,
        Tag::WeakEvaluation,
        Tag::StrongEvaluation,
        Tag::IndiciaConflict,
        Tag::Connection,
        Tag::MerePresence,
        Tag::AssumedKnowledge,
        Tag::Position,
        Tag::Responsibility,
        Tag::CategoricalConclusion,
        Tag::EvidenceReference,
        Tag::Testimony,
        Tag::UndueStrength,
        Tag::Authorship,
        Tag::ConcludingConnector,
        Tag::IndiciarySupport,
        Tag::CausalClaim,
        Tag::Coordination,
        Tag::KnowledgeClaim,
        Tag::EvidenceMedium,
        Tag::NegativeContent,
        Tag::StrongInference,
        Tag::AlternativeMention,
        Tag::AlternativesNotDiscarded,
        Tag::SingleConclusion,
        Tag::EmptyDismissal,
        Tag::AlternativeAnalysis,
        Tag::ExperienceMaxim,
        Tag::SoundJudgment,
        Tag::Generalization,
        Tag::Stereotype,
        Tag::EmpiricalSupport,
    ];

    /// The alternatives whose disjunction defines this tag
    pub fn alternatives(self) -> &'static [&'static str] {
        match self {
            Tag::Doubt => DOUBT,
            Tag::Certainty => CERTAINTY,
            Tag::AlternativesNotExcluded => ALTERNATIVES_NOT_EXCLUDED,
            Tag::SoleExplanation => SOLE_EXPLANATION,
            Tag::SimpleSuspicion => SIMPLE_SUSPICION,
            Tag::GraveSuspicion => GRAVE_SUSPICION,
            Tag::Indicium => INDICIUM,
            Tag::StrongSource => STRONG_SOURCE,
            Tag::WeakSource => WEAK_SOURCE,
            Tag::Convergence => CONVERGENCE,
            Tag::WeakEvaluation => WEAK_EVALUATION,
            Tag::StrongEvaluation => STRONG_EVALUATION,
            Tag::IndiciaConflict => INDICIA_CONFLICT,
            Tag::Connection => CONNECTION,
            Tag::MerePresence => MERE_PRESENCE,
            Tag::AssumedKnowledge => ASSUMED_KNOWLEDGE,
            Tag::Position => POSITION,
            Tag::Responsibility => RESPONSIBILITY,
            Tag::CategoricalConclusion => CATEGORICAL_CONCLUSION,
            Tag::EvidenceReference => EVIDENCE_REFERENCE,
            Tag::Testimony => TESTIMONY,
            Tag::UndueStrength => UNDUE_STRENGTH,
            Tag::Authorship => AUTHORSHIP,
            Tag::ConcludingConnector => CONCLUDING_CONNECTOR,
            Tag::IndiciarySupport => INDICIARY_SUPPORT,
            Tag::CausalClaim => CAUSAL_CLAIM,
            Tag::Coordination => COORDINATION,
            Tag::KnowledgeClaim => KNOWLEDGE_CLAIM,
            Tag::EvidenceMedium => EVIDENCE_MEDIUM,
            Tag::NegativeContent => NEGATIVE_CONTENT,
            Tag::StrongInference => STRONG_INFERENCE,
            Tag::AlternativeMention => ALTERNATIVE_MENTION,
            Tag::AlternativesNotDiscarded => ALTERNATIVES_NOT_DISCARDED,
            Tag::SingleConclusion => SINGLE_CONCLUSION,
            Tag::EmptyDismissal => EMPTY_DISMISSAL,
            Tag::AlternativeAnalysis => ALTERNATIVE_ANALYSIS,
            Tag::ExperienceMaxim => EXPERIENCE_MAXIM,
            Tag::SoundJudgment => SOUND_JUDGMENT,
            Tag::Generalization => GENERALIZATION,
            Tag::Stereotype => STEREOTYPE,
            Tag::EmpiricalSupport => EMPIRICAL_SUPPORT,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Compiled matcher for this tag
    pub fn matcher(self) -> &'static Regex {
        &MATCHERS[self.index()]
    }

    pub fn is_match(self, text: &str) -> bool {
        self.matcher().is_match(text)
    }

    /// First span of `text` matching this tag
    pub fn find(self, text: &str) -> Option<&str> {
        self.matcher().find(text).map(|m| m.as_str())
    }
}

fn disjunction(alternatives: &[&str]) -> String {
    format!("(?is)(?:{})", alternatives.join("|"))
}

/// Compile the disjunction of `alternatives`, case-insensitive, `.` spanning lines
pub fn compile_alternatives(alternatives: &[&str]) -> Result<Regex, regex::Error> {
    Regex::new(&disjunction(alternatives))
}

lazy_static! {
    static ref MATCHERS: Vec<Regex> = Tag::ALL
        .iter()
        .map(|tag| compile_alternatives(tag.alternatives()).unwrap())
        .collect();

    /// Whole catalog in one automaton; set indices follow `Tag::ALL`
    static ref CATALOG: RegexSet =
        RegexSet::new(Tag::ALL.iter().map(|tag| disjunction(tag.alternatives()))).unwrap();
}

/// Set of tags present in a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u64);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the whole catalog against `text`
    pub fn of(text: &str) -> Self {
        CATALOG
            .matches(text)
            .into_iter()
            .fold(Self::new(), |set, i| set.with(Tag::ALL[i]))
    }

    pub fn with(self, tag: Tag) -> Self {
        Self(self.0 | 1 << tag.index())
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.0 & (1 << tag.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.iter().copied().filter(move |tag| self.has(*tag))
    }
}

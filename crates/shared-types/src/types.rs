use std::collections::BTreeMap;

use crate::finding::{Finding, Severity};

/// Normalized decision text handed over by the ingestion collaborator
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DecisionDocument {
    pub id: String,
    pub source: String, // Original filename, or "pasted" for raw text
    pub text: String,
}

impl DecisionDocument {
    pub fn new(id: impl Into<String>, source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Paragraph {
    pub ordinal: usize, // 1-based, dense over kept paragraphs
    pub text: String,   // Trimmed, never empty
}

/// Scoring criteria of the circumstantial coherence index
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum CriterionId {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C13,
}

impl CriterionId {
    pub const ALL: [CriterionId; 8] = [
        CriterionId::C1,
        CriterionId::C2,
        CriterionId::C3,
        CriterionId::C4,
        CriterionId::C5,
        CriterionId::C6,
        CriterionId::C7,
        CriterionId::C13,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CriterionId::C1 => "C1",
            CriterionId::C2 => "C2",
            CriterionId::C3 => "C3",
            CriterionId::C4 => "C4",
            CriterionId::C5 => "C5",
            CriterionId::C6 => "C6",
            CriterionId::C7 => "C7",
            CriterionId::C13 => "C13",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CriterionId::C1 => "Pluralidad de indicios",
            CriterionId::C2 => "Fiabilidad de las fuentes",
            CriterionId::C3 => "Nexo lógico indicio–hecho",
            CriterionId::C4 => "Tratamiento de hipótesis alternativas",
            CriterionId::C5 => "Coherencia temporal / espacial",
            CriterionId::C6 => "Ausencia de circularidad",
            CriterionId::C7 => "Motivación global",
            CriterionId::C13 => "Corroboración independiente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CriterionScore {
    pub id: CriterionId,
    pub value: f64, // Always within [0, 100]
}

/// Structured alerts raised independently of the prose interpretation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Brake {
    #[serde(rename = "Hipótesis alternativas débiles")]
    WeakAlternativeHypotheses,
    #[serde(rename = "Sin corroboración independiente")]
    NoIndependentCorroboration,
    #[serde(rename = "ICI muy bajo")]
    IndexTooLow,
}

impl Brake {
    pub fn name(&self) -> &'static str {
        match self {
            Brake::WeakAlternativeHypotheses => "Hipótesis alternativas débiles",
            Brake::NoIndependentCorroboration => "Sin corroboración independiente",
            Brake::IndexTooLow => "ICI muy bajo",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            Brake::WeakAlternativeHypotheses => {
                "C4 muy bajo: no se analizan ni descartan adecuadamente \
                 hipótesis alternativas exculpatorias."
            }
            Brake::NoIndependentCorroboration => {
                "C13 muy bajo: casi no hay evidencia independiente que respalde la tesis condenatoria."
            }
            Brake::IndexTooLow => "La coherencia indiciaria es deficiente o casi inexistente.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompositeResult {
    pub criteria: BTreeMap<CriterionId, f64>,
    pub raw_index: f64,
    pub adjusted_index: f64, // Mirrors raw_index until a penalty model exists
    pub interpretation: String,
    pub brakes: BTreeMap<Brake, String>,
}

impl CompositeResult {
    pub fn score(&self, id: CriterionId) -> Option<f64> {
        self.criteria.get(&id).copied()
    }

    pub fn has_brake(&self, brake: Brake) -> bool {
        self.brakes.contains_key(&brake)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EvaluationReport {
    pub document_id: String,
    pub profile: String,
    pub paragraph_count: usize,
    pub result: CompositeResult,
    pub findings: Vec<Finding>,
    pub evaluated_at: u64,
}

impl EvaluationReport {
    pub fn findings_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Render the report for the display and report-rendering collaborators
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

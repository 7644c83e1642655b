//! Composite index, qualitative interpretation and emergency brakes

use std::collections::BTreeMap;

use shared_types::{Brake, CompositeResult, CriterionId, CriterionScore};

use crate::criteria::composite_index;
use crate::profile::{ScoringProfile, WarningThresholds};

/// Risk band of the adjusted index; bands are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn classify(index: f64, profile: &ScoringProfile) -> Self {
        let bands = &profile.bands;
        if index < bands.very_high_below {
            RiskLevel::VeryHigh
        } else if index < bands.high_below {
            RiskLevel::High
        } else if index < bands.medium_below {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => {
                "RIESGO MUY ALTO: la coherencia indiciaria es deficiente o casi inexistente. \
                 La sentencia presenta graves problemas metodológicos en la aplicación del método indiciario."
            }
            RiskLevel::High => {
                "RIESGO ALTO: la motivación indiciaria presenta fallas relevantes. \
                 El razonamiento probatorio es vulnerable en sede de apelación o casación."
            }
            RiskLevel::Medium => {
                "RIESGO MEDIO: la sentencia tiene una estructura razonable, \
                 pero mantiene debilidades importantes que justifican una revisión crítica."
            }
            RiskLevel::Low => {
                "RIESGO BAJO: la motivación indiciaria es, en general, sólida y cumple \
                 con estándares razonables de coherencia y justificación."
            }
        }
    }
}

/// Criteria that carry a warning sentence, in the order warnings are appended
const WARNINGS: [(CriterionId, &str); 6] = [
    (
        CriterionId::C1,
        "C1 muy bajo: la estructura probatoria es monocéntrica o descansa \
         en muy pocos indicios relevantes.",
    ),
    (
        CriterionId::C4,
        "C4 bajo: no se desarrollan ni se descartan adecuadamente hipótesis alternativas \
         exculpatorias, lo que afecta la presunción de inocencia en su dimensión metodológica.",
    ),
    (
        CriterionId::C5,
        "C5 muy bajo: existen imprecisiones o incoherencias temporales/espaciales que \
         dificultan reconstruir con claridad la secuencia de hechos imputados.",
    ),
    (
        CriterionId::C6,
        "C6 bajo: se detectan posibles círculos viciosos en el uso de la prueba \
         (especialmente en pericias psicológicas o valoraciones que asumen como probado \
         lo que deberían demostrar).",
    ),
    (
        CriterionId::C7,
        "C7 bajo: la motivación global presenta saltos lógicos, omisiones o contradicciones \
         que afectan la coherencia del razonamiento.",
    ),
    (
        CriterionId::C13,
        "C13 muy bajo: no se aprecia corroboración independiente relevante; la estructura \
         probatoria depende casi exclusivamente de una única fuente (por ejemplo, la declaración \
         de la víctima), lo que incrementa considerablemente el riesgo de error judicial.",
    ),
];

fn warning_threshold(thresholds: &WarningThresholds, id: CriterionId) -> Option<f64> {
    match id {
        CriterionId::C1 => Some(thresholds.c1),
        CriterionId::C4 => Some(thresholds.c4),
        CriterionId::C5 => Some(thresholds.c5),
        CriterionId::C6 => Some(thresholds.c6),
        CriterionId::C7 => Some(thresholds.c7),
        CriterionId::C13 => Some(thresholds.c13),
        CriterionId::C2 | CriterionId::C3 => None,
    }
}

/// A criterion absent from `criteria` never triggers anything
fn below(criteria: &BTreeMap<CriterionId, f64>, id: CriterionId, threshold: f64) -> bool {
    criteria.get(&id).map_or(false, |value| *value < threshold)
}

/// Band sentence followed by every applicable warning, space separated
pub fn interpret(
    adjusted_index: f64,
    criteria: &BTreeMap<CriterionId, f64>,
    profile: &ScoringProfile,
) -> String {
    let mut sentences = vec![RiskLevel::classify(adjusted_index, profile).sentence()];

    sentences.extend(WARNINGS.iter().filter_map(|(id, text)| {
        let threshold = warning_threshold(&profile.warnings, *id)?;
        below(criteria, *id, threshold).then_some(*text)
    }));

    sentences.join(" ")
}

pub fn brakes(
    adjusted_index: f64,
    criteria: &BTreeMap<CriterionId, f64>,
    profile: &ScoringProfile,
) -> BTreeMap<Brake, String> {
    let thresholds = &profile.brakes;
    let raised = [
        (
            Brake::WeakAlternativeHypotheses,
            below(criteria, CriterionId::C4, thresholds.c4),
        ),
        (
            Brake::NoIndependentCorroboration,
            below(criteria, CriterionId::C13, thresholds.c13),
        ),
        (Brake::IndexTooLow, adjusted_index < thresholds.index),
    ];

    raised
        .into_iter()
        .filter(|(_, raised)| *raised)
        .map(|(brake, _)| (brake, brake.detail().to_string()))
        .collect()
}

/// Combine criterion scores into the composite result
pub fn composite_result(scores: &[CriterionScore], profile: &ScoringProfile) -> CompositeResult {
    let criteria: BTreeMap<CriterionId, f64> =
        scores.iter().map(|score| (score.id, score.value)).collect();
    let raw_index = composite_index(scores, profile);
    // No penalty model yet
    let adjusted_index = raw_index;

    CompositeResult {
        interpretation: interpret(adjusted_index, &criteria, profile),
        brakes: brakes(adjusted_index, &criteria, profile),
        criteria,
        raw_index,
        adjusted_index,
    }
}

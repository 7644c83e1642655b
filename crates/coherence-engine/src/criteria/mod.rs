//! Criteria scoring engine
//!
//! Each criterion maps whole-text signal counts to a score in [0, 100]
//! through the step tables of the active [`ScoringProfile`]. Scores do not
//! depend on paragraph boundaries.

pub mod signals;

use shared_types::{CriterionId, CriterionScore};
use tracing::debug;

use crate::profile::{ScoringProfile, StepTables};
pub use signals::Signals;

/// Chronology tiers for temporal/spatial coherence (C5)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chronology {
    /// Neither years nor sequence markers
    NoSignals,
    /// At most two of each, with at least one signal
    Sparse,
    /// Three or more years and two or more sequence markers
    Dense,
    /// Many years with almost no sequencing, or many markers with few years
    Unbalanced,
}

impl Chronology {
    pub fn classify(years: usize, sequence_markers: usize) -> Self {
        // Arms are tried in order; (0, 0) takes precedence over Sparse
        match (years, sequence_markers) {
            (0, 0) => Chronology::NoSignals,
            (0..=2, 0..=2) => Chronology::Sparse,
            (3.., 2..) => Chronology::Dense,
            (3.., 0..=1) | (0..=2, 3..) => Chronology::Unbalanced,
        }
    }

    fn tier(self) -> usize {
        match self {
            Chronology::NoSignals => 0,
            Chronology::Sparse => 1,
            Chronology::Dense => 2,
            Chronology::Unbalanced => 3,
        }
    }
}

/// Score every criterion for `text`, in `CriterionId::ALL` order
pub fn score_criteria(text: &str, profile: &ScoringProfile) -> Vec<CriterionScore> {
    let signals = Signals::collect(text);
    debug!(?signals, "collected scoring signals");
    score_signals(&signals, &profile.steps)
}

pub fn score_signals(signals: &Signals, steps: &StepTables) -> Vec<CriterionScore> {
    CriterionId::ALL
        .iter()
        .map(|&id| CriterionScore {
            id,
            value: score_criterion(id, signals, steps),
        })
        .collect()
}

pub fn score_criterion(id: CriterionId, signals: &Signals, steps: &StepTables) -> f64 {
    match id {
        CriterionId::C1 => step(&steps.c1, signals.evidence_types),
        CriterionId::C2 => source_reliability(signals, steps),
        CriterionId::C3 => step(&steps.c3, signals.connectors),
        CriterionId::C4 => alternative_hypotheses(signals, steps),
        CriterionId::C5 => {
            let chronology = Chronology::classify(signals.years, signals.sequence_markers);
            steps.c5[chronology.tier()]
        }
        CriterionId::C6 => {
            if signals.circular {
                steps.c6[0]
            } else {
                steps.c6[1]
            }
        }
        CriterionId::C7 => step(&steps.c7, signals.motivation_sections),
        CriterionId::C13 => {
            let tier = match signals.corroborations {
                0 => 0,
                1 => 1,
                2..=3 => 2,
                _ => 3,
            };
            steps.c13[tier]
        }
    }
}

/// Weighted sum of criterion scores
pub fn composite_index(scores: &[CriterionScore], profile: &ScoringProfile) -> f64 {
    scores
        .iter()
        .map(|score| profile.weight(score.id) * score.value)
        .sum()
}

/// Score for `count`, the last entry covering every larger count
fn step(table: &[f64], count: usize) -> f64 {
    table[count.min(table.len() - 1)]
}

fn source_reliability(signals: &Signals, steps: &StepTables) -> f64 {
    let reliability = (steps.c2_base + steps.c2_signal * signals.reliability as f64).min(100.0);
    if signals.contradiction {
        (reliability + steps.c2_contradiction).min(100.0)
    } else {
        reliability
    }
}

fn alternative_hypotheses(signals: &Signals, steps: &StepTables) -> f64 {
    match (signals.alternative_mentioned, signals.alternative_analysed) {
        (false, _) => steps.c4[0],
        (true, false) => steps.c4[1],
        (true, true) => steps.c4[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn score(text: &str, id: CriterionId) -> f64 {
        score_criteria(text, &ScoringProfile::ici_v7())
            .into_iter()
            .find(|s| s.id == id)
            .map(|s| s.value)
            .unwrap()
    }

    #[test]
    fn test_empty_text_takes_zero_signal_branches() {
        let scores: Vec<f64> = score_criteria("", &ScoringProfile::ici_v7())
            .into_iter()
            .map(|s| s.value)
            .collect();

        // C1, C2, C3, C4, C5, C6, C7, C13
        assert_eq!(scores, vec![10.0, 20.0, 30.0, 20.0, 30.0, 80.0, 30.0, 10.0]);
    }

    #[test]
    fn test_c1_plurality_steps() {
        assert_eq!(score("El testigo declaró.", CriterionId::C1), 40.0);
        assert_eq!(score("El testigo y la pericia.", CriterionId::C1), 60.0);
        assert_eq!(score("Testigo, pericia y contrato.", CriterionId::C1), 75.0);
        assert_eq!(
            score("Testigo, pericia, contrato, video y bitácora.", CriterionId::C1),
            90.0
        );
    }

    #[test]
    fn test_c2_reliability_is_capped() {
        assert_eq!(score("Relato persistente.", CriterionId::C2), 40.0);
        assert_eq!(
            score("Persistencia, coherencia, verosimilitud.", CriterionId::C2),
            80.0
        );
        assert_eq!(
            score(
                "Persistente, coherente, verosímil y corroborado, pese a una contradicción.",
                CriterionId::C2
            ),
            100.0
        );
        assert_eq!(score("Una contradicción menor.", CriterionId::C2), 30.0);
    }

    #[test]
    fn test_c3_counts_distinct_connectors() {
        assert_eq!(score("Por tanto, y por tanto.", CriterionId::C3), 55.0);
        assert_eq!(
            score(
                "Por tanto; por consiguiente; en consecuencia; se colige; se desprende.",
                CriterionId::C3
            ),
            90.0
        );
    }

    #[test]
    fn test_c4_three_tiers() {
        assert_eq!(score("Sin más.", CriterionId::C4), 20.0);
        assert_eq!(score("Existe una hipótesis alternativa.", CriterionId::C4), 40.0);
        assert_eq!(
            score(
                "Existe una hipótesis alternativa, pero se descarta la hipótesis por la prueba.",
                CriterionId::C4
            ),
            75.0
        );
    }

    #[test]
    fn test_chronology_partition_is_total_and_disjoint() {
        for years in 0..8 {
            for markers in 0..8 {
                let expected = if years == 0 && markers == 0 {
                    Chronology::NoSignals
                } else if years <= 2 && markers <= 2 {
                    Chronology::Sparse
                } else if years >= 3 && markers >= 2 {
                    Chronology::Dense
                } else {
                    Chronology::Unbalanced
                };
                assert_eq!(Chronology::classify(years, markers), expected);
            }
        }

        assert_eq!(Chronology::classify(usize::MAX, usize::MAX), Chronology::Dense);
        assert_eq!(Chronology::classify(usize::MAX, 1), Chronology::Unbalanced);
    }

    #[test]
    fn test_c5_tiers() {
        assert_eq!(score("Sin fechas.", CriterionId::C5), 30.0);
        assert_eq!(score("En 2020, después.", CriterionId::C5), 55.0);
        assert_eq!(
            score("En 2018, 2019 y 2020; después y posteriormente.", CriterionId::C5),
            70.0
        );
        assert_eq!(score("En 2018, 2019 y 2020.", CriterionId::C5), 80.0);
    }

    #[test]
    fn test_c6_circularity() {
        assert_eq!(
            score(
                "El impacto emocional observado demuestra la agresión.",
                CriterionId::C6
            ),
            60.0
        );
        assert_eq!(score("Sin pericias.", CriterionId::C6), 80.0);
    }

    #[test]
    fn test_c7_motivation_sections() {
        assert_eq!(
            score(
                "CONSIDERANDO. Fundamentos. Motivación. Análisis de la prueba.",
                CriterionId::C7
            ),
            85.0
        );
        assert_eq!(score("Considerando primero.", CriterionId::C7), 50.0);
    }

    #[test]
    fn test_c13_corroboration_tiers() {
        assert_eq!(score("La víctima declaró.", CriterionId::C13), 10.0);
        assert_eq!(score("Consta un video.", CriterionId::C13), 40.0);
        assert_eq!(score("Consta un video y whatsapp.", CriterionId::C13), 70.0);
        assert_eq!(
            score(
                "Video, whatsapp, pericia balística y un testigo presencial.",
                CriterionId::C13
            ),
            90.0
        );
    }

    #[test]
    fn test_composite_index_of_empty_text() {
        let profile = ScoringProfile::ici_v7();
        let scores = score_criteria("", &profile);
        let index = composite_index(&scores, &profile);

        // 0.15*10 + 0.15*20 + 0.15*30 + 0.2*20 + 0.1*30 + 0.1*80 + 0.05*30 + 0.1*10
        assert!((index - 26.5).abs() < 1e-9);
    }

    #[test]
    fn test_custom_steps_change_scores() {
        let mut steps = StepTables::default();
        steps.c6 = [0.0, 100.0];
        let signals = Signals::default();
        assert_eq!(score_criterion(CriterionId::C6, &signals, &steps), 100.0);
    }
}

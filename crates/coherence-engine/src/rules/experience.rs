//! Experience maxims and sound judgment

use shared_types::{Finding, FindingKind};

use super::collect::{paragraph_pass, ParagraphCheck};
use super::RuleContext;
use crate::patterns::Tag;

/// Experience maxims and generalizations, paragraph by paragraph
///
/// A generic appeal to experience or sound judgment, or an empirical
/// generalization, is flagged when nothing empirical backs it in the same
/// paragraph. Stereotypes are flagged whatever surrounds them.
pub fn check_experience_maxims(ctx: &RuleContext) -> Vec<Finding> {
    paragraph_pass(
        ctx,
        &[
            ParagraphCheck {
                applies: |p| {
                    p.has_any(&[Tag::ExperienceMaxim, Tag::SoundJudgment])
                        && !p.has(Tag::EmpiricalSupport)
                },
                kind: |_| FindingKind::AbstractExperienceMaxim,
            },
            ParagraphCheck {
                applies: |p| p.has(Tag::Generalization) && !p.has(Tag::EmpiricalSupport),
                kind: |_| FindingKind::UnsupportedEmpiricalGeneralization,
            },
            ParagraphCheck {
                applies: |p| p.has(Tag::Stereotype),
                kind: |p| FindingKind::StereotypedMaxim {
                    phrase: Tag::Stereotype.find(p.text()).unwrap_or_default().to_string(),
                },
            },
        ],
    )
}

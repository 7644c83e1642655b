//! Treatment of alternative hypotheses within a paragraph
//!
//! The cross-paragraph variant (alternatives not excluded in one paragraph,
//! sole explanation in another) lives with the general rules.

use shared_types::{Finding, FindingKind};

use super::collect::{paragraph_pass, ParagraphCheck};
use super::RuleContext;
use crate::patterns::Tag;

/// Every alternative-hypothesis defect of a paragraph, paragraph by paragraph
pub fn check_alternative_hypotheses(ctx: &RuleContext) -> Vec<Finding> {
    paragraph_pass(
        ctx,
        &[
            ParagraphCheck {
                applies: |p| p.has_all(&[Tag::AlternativeMention, Tag::SingleConclusion]),
                kind: |_| FindingKind::AlternativesAcknowledgedButSoleExplanation,
            },
            ParagraphCheck {
                applies: |p| p.has_all(&[Tag::AlternativesNotDiscarded, Tag::SingleConclusion]),
                kind: |_| FindingKind::AlternativesNotDiscardedButSoleConclusion,
            },
            ParagraphCheck {
                applies: |p| p.has(Tag::AlternativeMention) && !p.has(Tag::AlternativeAnalysis),
                kind: |_| FindingKind::AlternativesMentionedWithoutAnalysis,
            },
            ParagraphCheck {
                applies: |p| p.has_all(&[Tag::AlternativeMention, Tag::EmptyDismissal]),
                kind: |_| FindingKind::UnjustifiedDismissalOfAlternative,
            },
            ParagraphCheck {
                applies: |p| p.has(Tag::SingleConclusion) && !p.has(Tag::AlternativeMention),
                kind: |_| FindingKind::SoleConclusionWithoutAlternatives,
            },
        ],
    )
}

//! Inconsistency rule engine
//!
//! Rules are stateless predicates over the tagged paragraphs of one decision.
//! None of them reads another rule's output, so they may run in parallel; the
//! findings are always merged in [`RULES`] order, and within a rule in
//! paragraph order, whatever the scheduling.
//!
//! Rule groups, in evaluation order:
//! - General: doubt vs certainty, alternatives vs sole explanation, suspicion standards
//! - Plurality and convergence of indicia
//! - Internal consistency of an indicium
//! - External consistency between indicia
//! - Typical logical leaps
//! - Misuse of testimony
//! - Incomplete inferential chain
//! - Assessment contrary to the evidence
//! - Alternative hypotheses
//! - Experience maxims and sound judgment

pub mod alternatives;
pub mod collect;
pub mod evidence;
pub mod experience;
pub mod general;
pub mod indicia;
pub mod leaps;
pub mod testimony;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use shared_types::Finding;
use tracing::trace;

use crate::patterns::Tag;
use crate::tagger::TaggedParagraph;

/// Everything a rule may inspect
pub struct RuleContext<'a> {
    pub paragraphs: &'a [TaggedParagraph],
    /// Paragraph texts joined by a single space
    pub document: String,
}

impl<'a> RuleContext<'a> {
    pub fn new(paragraphs: &'a [TaggedParagraph]) -> Self {
        let document = paragraphs
            .iter()
            .map(TaggedParagraph::text)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            paragraphs,
            document,
        }
    }

    /// Paragraphs carrying `tag`, in document order
    pub fn tagged(&self, tag: Tag) -> impl Iterator<Item = &'a TaggedParagraph> + Clone {
        self.paragraphs.iter().filter(move |p| p.has(tag))
    }

    /// Paragraphs that refer to indicia or indiciary facts
    pub fn indicia(&self) -> Vec<&'a TaggedParagraph> {
        self.tagged(Tag::Indicium).collect()
    }

    /// Whether `tag` matches anywhere in the whole-document text
    pub fn document_mentions(&self, tag: Tag) -> bool {
        tag.is_match(&self.document)
    }
}

/// A named inconsistency check
///
/// Grouped rules run several checks in a single pass over the paragraphs, so
/// their findings stay in paragraph order across checks.
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&RuleContext) -> Vec<Finding>,
}

/// Every rule, in the order findings are reported
pub const RULES: &[Rule] = &[
    Rule {
        name: "doubt_vs_certainty",
        check: general::check_doubt_vs_certainty,
    },
    Rule {
        name: "alternatives_vs_sole_explanation",
        check: general::check_alternatives_vs_sole_explanation,
    },
    Rule {
        name: "simple_suspicion",
        check: general::check_simple_suspicion,
    },
    Rule {
        name: "suspicion_tension",
        check: general::check_suspicion_tension,
    },
    Rule {
        name: "no_indicium_reference",
        check: indicia::check_no_indicium_reference,
    },
    Rule {
        name: "single_weak_indicium",
        check: indicia::check_single_weak_indicium,
    },
    Rule {
        name: "plurality_without_convergence",
        check: indicia::check_plurality_without_convergence,
    },
    Rule {
        name: "contradictory_evaluation_same_paragraph",
        check: indicia::check_contradictory_evaluation_same_paragraph,
    },
    Rule {
        name: "contradictory_evaluation_across_paragraphs",
        check: indicia::check_contradictory_evaluation_across_paragraphs,
    },
    Rule {
        name: "explicit_contradiction_between_indicia",
        check: indicia::check_explicit_contradiction,
    },
    Rule {
        name: "unconnected_indicia",
        check: indicia::check_unconnected_indicia,
    },
    Rule {
        name: "presence_to_knowledge",
        check: leaps::check_presence_to_knowledge,
    },
    Rule {
        name: "rank_to_authorship",
        check: leaps::check_rank_to_authorship,
    },
    Rule {
        name: "categorical_conclusion",
        check: leaps::check_categorical_conclusion,
    },
    Rule {
        name: "testimony_as_strong_indicium",
        check: testimony::check_testimony_as_strong_indicium,
    },
    Rule {
        name: "testimony_to_authorship",
        check: testimony::check_testimony_to_authorship,
    },
    Rule {
        name: "single_testimonial_indicium",
        check: testimony::check_single_testimonial_indicium,
    },
    Rule {
        name: "unsupported_conclusions",
        check: leaps::check_unsupported_conclusions,
    },
    Rule {
        name: "unsupported_attributions",
        check: leaps::check_unsupported_attributions,
    },
    Rule {
        name: "assessment_contrary_to_evidence",
        check: evidence::check_assessment_contrary_to_evidence,
    },
    Rule {
        name: "alternative_hypotheses",
        check: alternatives::check_alternative_hypotheses,
    },
    Rule {
        name: "experience_maxims",
        check: experience::check_experience_maxims,
    },
];

/// Run every rule over the tagged paragraphs
///
/// An empty paragraph sequence yields no findings without invoking any rule.
pub fn detect_inconsistencies(paragraphs: &[TaggedParagraph], parallel: bool) -> Vec<Finding> {
    if paragraphs.is_empty() {
        return Vec::new();
    }

    let ctx = RuleContext::new(paragraphs);
    let per_rule = if parallel {
        run_parallel(&ctx)
    } else {
        RULES.iter().map(|rule| run_rule(rule, &ctx)).collect()
    };

    per_rule.into_iter().flatten().collect()
}

#[cfg(feature = "parallel")]
fn run_parallel(ctx: &RuleContext) -> Vec<Vec<Finding>> {
    // Indexed collect keeps RULES order
    RULES.par_iter().map(|rule| run_rule(rule, ctx)).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(ctx: &RuleContext) -> Vec<Vec<Finding>> {
    RULES.iter().map(|rule| run_rule(rule, ctx)).collect()
}

fn run_rule(rule: &Rule, ctx: &RuleContext) -> Vec<Finding> {
    let findings = (rule.check)(ctx);
    trace!(rule = rule.name, findings = findings.len(), "rule evaluated");
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag_paragraphs;
    use crate::text::segment_paragraphs;
    use pretty_assertions::assert_eq;
    use shared_types::FindingKind;

    fn tagged(text: &str) -> Vec<TaggedParagraph> {
        tag_paragraphs(segment_paragraphs(text))
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn test_no_paragraphs_no_findings() {
        assert!(detect_inconsistencies(&[], true).is_empty());
        assert!(detect_inconsistencies(&[], false).is_empty());
    }

    #[test]
    fn test_document_joins_paragraphs_with_space() {
        let paragraphs = tagged("Valorados\n\nen conjunto");
        let ctx = RuleContext::new(&paragraphs);
        assert_eq!(ctx.document, "Valorados en conjunto");
        assert!(ctx.document_mentions(Tag::Convergence));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let paragraphs = tagged(
            "No se ha acreditado la presencia del imputado.\n\n\
             Ha quedado acreditado que estuvo allí, es evidente que mintió.\n\n\
             El indicio es débil. Quien nada debe nada teme.\n\n\
             El indicio es concluyente según la pericia.",
        );
        assert_eq!(
            detect_inconsistencies(&paragraphs, true),
            detect_inconsistencies(&paragraphs, false)
        );
    }

    #[test]
    fn test_findings_follow_rule_order() {
        let paragraphs = tagged(
            "Quien nada debe nada teme.\n\n\
             No se ha acreditado el hecho.\n\n\
             Ha quedado acreditado el hecho.",
        );
        let findings = detect_inconsistencies(&paragraphs, false);
        let position = |label: &str| findings.iter().position(|f| f.label() == label);

        let contradiction = position("Contradicción duda vs certeza").unwrap();
        let stereotype =
            position("Uso de máximas de experiencia estereotipadas/prejuiciosas").unwrap();
        assert!(contradiction < stereotype);
    }

    #[test]
    fn test_grouped_rules_interleave_by_paragraph() {
        let paragraphs = tagged(
            "Huyó del lugar, lo cual demuestra que era culpable.\n\n\
             Por tanto, es culpable.",
        );
        let found: Vec<_> = detect_inconsistencies(&paragraphs, true)
            .into_iter()
            .filter(|f| {
                matches!(
                    f.kind,
                    FindingKind::ConclusionWithoutIndiciarySupport
                        | FindingKind::CausalClaimWithoutLink
                )
            })
            .map(|f| (f.paragraphs, f.kind))
            .collect();

        assert_eq!(
            found,
            vec![
                (vec![1], FindingKind::CausalClaimWithoutLink),
                (vec![2], FindingKind::ConclusionWithoutIndiciarySupport),
            ]
        );
    }
}

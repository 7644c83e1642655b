//! Shared building blocks for rules: bounded pairing and finding construction

use shared_types::{Finding, FindingKind};

use super::RuleContext;
use crate::patterns::Tag;
use crate::tagger::TaggedParagraph;
use crate::text::excerpt;

/// Upper bound on findings emitted by one pairing rule
pub const MAX_PAIRS_PER_RULE: usize = 3;

/// Cross product of the paragraphs tagged `left` and `right`, in document
/// order, skipping pairs that point at the same paragraph
pub fn candidate_pairs<'a>(
    ctx: &RuleContext<'a>,
    left: Tag,
    right: Tag,
) -> impl Iterator<Item = (&'a TaggedParagraph, &'a TaggedParagraph)> {
    let rights = ctx.tagged(right);
    ctx.tagged(left)
        .flat_map(move |l| rights.clone().map(move |r| (l, r)))
        .filter(|(l, r)| l.ordinal() != r.ordinal())
}

/// First `limit` items of a lazily produced sequence
pub fn take_bounded<I: Iterator>(candidates: I, limit: usize) -> Vec<I::Item> {
    candidates.take(limit).collect()
}

/// One finding per (left, right) pair, capped at [`MAX_PAIRS_PER_RULE`]
pub fn pairing_rule(
    ctx: &RuleContext,
    left: Tag,
    right: Tag,
    kind: impl Fn(usize, usize) -> FindingKind,
) -> Vec<Finding> {
    take_bounded(candidate_pairs(ctx, left, right), MAX_PAIRS_PER_RULE)
        .into_iter()
        .map(|(l, r)| paragraphs_finding(kind(l.ordinal(), r.ordinal()), &[l, r]))
        .collect()
}

/// One finding for every paragraph satisfying `applies`
pub fn signature_rule(
    ctx: &RuleContext,
    applies: impl Fn(&TaggedParagraph) -> bool,
    kind: impl Fn(&TaggedParagraph) -> FindingKind,
) -> Vec<Finding> {
    ctx.paragraphs
        .iter()
        .filter(|p| applies(p))
        .map(|p| paragraphs_finding(kind(p), &[p]))
        .collect()
}

/// A per-paragraph check inside a grouped rule
pub struct ParagraphCheck {
    pub applies: fn(&TaggedParagraph) -> bool,
    pub kind: fn(&TaggedParagraph) -> FindingKind,
}

/// Single pass over the paragraphs running `checks` in order on each one
///
/// Every finding for paragraph N precedes those for paragraph N + 1.
pub fn paragraph_pass(ctx: &RuleContext, checks: &[ParagraphCheck]) -> Vec<Finding> {
    ctx.paragraphs
        .iter()
        .flat_map(|p| {
            checks
                .iter()
                .filter(move |check| (check.applies)(p))
                .map(move |check| paragraphs_finding((check.kind)(p), &[p]))
        })
        .collect()
}

/// Finding referencing `paragraphs`, with one excerpt per paragraph
pub fn paragraphs_finding(kind: FindingKind, paragraphs: &[&TaggedParagraph]) -> Finding {
    Finding::new(
        kind,
        paragraphs.iter().map(|p| p.ordinal()).collect(),
        paragraphs.iter().map(|p| excerpt(p.text())).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag_paragraphs;
    use crate::text::segment_paragraphs;

    fn tagged(text: &str) -> Vec<TaggedParagraph> {
        tag_paragraphs(segment_paragraphs(text))
    }

    #[test]
    fn test_candidate_pairs_skip_same_paragraph() {
        let paragraphs =
            tagged("No se ha probado, aunque hay plena certeza.\n\nHa quedado acreditado.");
        let ctx = RuleContext::new(&paragraphs);

        let pairs: Vec<_> = candidate_pairs(&ctx, Tag::Doubt, Tag::Certainty)
            .map(|(l, r)| (l.ordinal(), r.ordinal()))
            .collect();
        assert_eq!(pairs, vec![(1, 2)]);
    }

    #[test]
    fn test_pairs_are_in_document_order() {
        let paragraphs = tagged(
            "No se ha probado.\n\nNo se ha demostrado.\n\nPlena certeza.\n\nPlenamente demostrado.",
        );
        let ctx = RuleContext::new(&paragraphs);

        let pairs: Vec<_> = candidate_pairs(&ctx, Tag::Doubt, Tag::Certainty)
            .map(|(l, r)| (l.ordinal(), r.ordinal()))
            .collect();
        assert_eq!(pairs, vec![(1, 3), (1, 4), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_take_bounded_is_lazy() {
        let mut produced = 0;
        let taken = take_bounded(
            (0..).inspect(|_| produced += 1),
            MAX_PAIRS_PER_RULE,
        );
        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(produced, MAX_PAIRS_PER_RULE);
    }

    #[test]
    fn test_pairing_rule_caps_output() {
        let paragraphs = tagged(
            "No se ha probado.\n\nNo se ha demostrado.\n\nPlena certeza.\n\nPlenamente demostrado.",
        );
        let ctx = RuleContext::new(&paragraphs);

        let findings = pairing_rule(&ctx, Tag::Doubt, Tag::Certainty, |doubt, certainty| {
            FindingKind::DoubtVersusCertainty { doubt, certainty }
        });
        assert_eq!(findings.len(), MAX_PAIRS_PER_RULE);
        assert_eq!(findings[2].paragraphs, vec![2, 3]);
        assert_eq!(findings[2].excerpts, vec!["No se ha demostrado.", "Plena certeza."]);
    }

    #[test]
    fn test_paragraph_pass_interleaves_checks_by_paragraph() {
        let paragraphs = tagged("Plena certeza.\n\nNo se ha probado.\n\nNo se ha probado, con plena certeza.");
        let ctx = RuleContext::new(&paragraphs);

        let findings = paragraph_pass(
            &ctx,
            &[
                ParagraphCheck {
                    applies: |p| p.has(Tag::Doubt),
                    kind: |p| FindingKind::DoubtVersusCertainty {
                        doubt: p.ordinal(),
                        certainty: 0,
                    },
                },
                ParagraphCheck {
                    applies: |p| p.has(Tag::Certainty),
                    kind: |p| FindingKind::DoubtVersusCertainty {
                        doubt: 0,
                        certainty: p.ordinal(),
                    },
                },
            ],
        );

        let order: Vec<_> = findings.iter().map(|f| (f.paragraphs[0], f.kind.clone())).collect();
        assert_eq!(
            order,
            vec![
                (1, FindingKind::DoubtVersusCertainty { doubt: 0, certainty: 1 }),
                (2, FindingKind::DoubtVersusCertainty { doubt: 2, certainty: 0 }),
                (3, FindingKind::DoubtVersusCertainty { doubt: 3, certainty: 0 }),
                (3, FindingKind::DoubtVersusCertainty { doubt: 0, certainty: 3 }),
            ]
        );
    }
}

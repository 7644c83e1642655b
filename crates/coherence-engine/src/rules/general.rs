//! General rules: evidentiary standard and sole-explanation contradictions

use shared_types::{Finding, FindingKind};

use super::collect::{pairing_rule, paragraphs_finding, signature_rule};
use super::RuleContext;
use crate::patterns::Tag;

/// Insufficiency asserted in one paragraph, full certainty in another
pub fn check_doubt_vs_certainty(ctx: &RuleContext) -> Vec<Finding> {
    pairing_rule(ctx, Tag::Doubt, Tag::Certainty, |doubt, certainty| {
        FindingKind::DoubtVersusCertainty { doubt, certainty }
    })
}

pub fn check_alternatives_vs_sole_explanation(ctx: &RuleContext) -> Vec<Finding> {
    pairing_rule(
        ctx,
        Tag::AlternativesNotExcluded,
        Tag::SoleExplanation,
        |not_excluded, sole_explanation| FindingKind::AlternativesNotExcludedVersusSoleExplanation {
            not_excluded,
            sole_explanation,
        },
    )
}

pub fn check_simple_suspicion(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has(Tag::SimpleSuspicion),
        |_| FindingKind::SimpleSuspicionReference,
    )
}

/// Both suspicion standards invoked: one finding over every involved paragraph
///
/// `paragraphs` lists each involved paragraph once, in document order, even
/// when it invokes both standards. Consumers that need the simple-then-grave
/// grouping read it from the `simple` and `grave` lists of the kind.
pub fn check_suspicion_tension(ctx: &RuleContext) -> Vec<Finding> {
    let simple: Vec<usize> = ctx.tagged(Tag::SimpleSuspicion).map(|p| p.ordinal()).collect();
    let grave: Vec<usize> = ctx.tagged(Tag::GraveSuspicion).map(|p| p.ordinal()).collect();
    if simple.is_empty() || grave.is_empty() {
        return Vec::new();
    }

    let involved: Vec<_> = ctx
        .paragraphs
        .iter()
        .filter(|p| p.has_any(&[Tag::SimpleSuspicion, Tag::GraveSuspicion]))
        .collect();

    vec![paragraphs_finding(
        FindingKind::SuspicionStandardTension { simple, grave },
        &involved,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{tag_paragraphs, TaggedParagraph};
    use crate::text::segment_paragraphs;
    use pretty_assertions::assert_eq;

    fn tagged(text: &str) -> Vec<TaggedParagraph> {
        tag_paragraphs(segment_paragraphs(text))
    }

    #[test]
    fn test_doubt_vs_certainty_pair() {
        let paragraphs = tagged(
            "No se ha acreditado la autoría del imputado.\n\n\
             Sin embargo, ha quedado acreditado que el imputado es autor.",
        );
        let findings = check_doubt_vs_certainty(&RuleContext::new(&paragraphs));

        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].kind,
            FindingKind::DoubtVersusCertainty {
                doubt: 1,
                certainty: 2
            }
        );
        assert_eq!(findings[0].paragraphs, vec![1, 2]);
        assert_eq!(findings[0].excerpts.len(), 2);
    }

    #[test]
    fn test_doubt_and_certainty_in_one_paragraph_is_not_a_pair() {
        let paragraphs =
            tagged("No se ha probado la coartada, pero ha quedado acreditado el hecho.");
        assert!(check_doubt_vs_certainty(&RuleContext::new(&paragraphs)).is_empty());
    }

    #[test]
    fn test_alternatives_vs_sole_explanation() {
        let paragraphs = tagged(
            "No puede descartarse la intervención de un tercero.\n\n\
             La única explicación posible es la autoría del acusado.",
        );
        let findings = check_alternatives_vs_sole_explanation(&RuleContext::new(&paragraphs));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].paragraphs, vec![1, 2]);
        assert_eq!(findings[0].label(), "Incongruencia en hipótesis alternativas");
    }

    #[test]
    fn test_simple_suspicion_per_paragraph() {
        let paragraphs = tagged(
            "Existe mera sospecha.\n\nNada más.\n\nSe trata de una sospecha inicial.",
        );
        let findings = check_simple_suspicion(&RuleContext::new(&paragraphs));

        let ordinals: Vec<_> = findings.iter().map(|f| f.paragraphs.clone()).collect();
        assert_eq!(ordinals, vec![vec![1], vec![3]]);
    }

    #[test]
    fn test_suspicion_tension_lists_every_involved_paragraph() {
        let paragraphs = tagged(
            "Hay sospecha grave de participación.\n\n\
             Existe una sospecha simple.\n\n\
             Otro párrafo.\n\n\
             Se mantiene la sospecha grave y la mera sospecha.",
        );
        let findings = check_suspicion_tension(&RuleContext::new(&paragraphs));

        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].kind,
            FindingKind::SuspicionStandardTension {
                simple: vec![2, 4],
                grave: vec![1, 4],
            }
        );
        assert_eq!(findings[0].paragraphs, vec![1, 2, 4]);
        assert_eq!(findings[0].excerpts.len(), 3);
    }

    #[test]
    fn test_no_tension_with_a_single_standard() {
        let paragraphs = tagged("Existe mera sospecha.\n\nY otra sospecha inicial.");
        assert!(check_suspicion_tension(&RuleContext::new(&paragraphs)).is_empty());
    }
}

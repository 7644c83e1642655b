//! Plurality, convergence and consistency of indicia

use shared_types::{Finding, FindingKind};

use super::collect::{pairing_rule, paragraphs_finding, signature_rule};
use super::RuleContext;
use crate::patterns::Tag;

/// Paragraphs cited when the decision never mentions an indicium
const NO_INDICIUM_CONTEXT: usize = 3;

pub fn check_no_indicium_reference(ctx: &RuleContext) -> Vec<Finding> {
    if ctx.tagged(Tag::Indicium).next().is_some() {
        return Vec::new();
    }

    let leading: Vec<_> = ctx.paragraphs.iter().take(NO_INDICIUM_CONTEXT).collect();
    vec![paragraphs_finding(FindingKind::NoIndiciumReference, &leading)]
}

/// A lone indicium resting only on testimonial sources
pub fn check_single_weak_indicium(ctx: &RuleContext) -> Vec<Finding> {
    match ctx.indicia().as_slice() {
        [only] if only.has(Tag::WeakSource) && !only.has(Tag::StrongSource) => {
            vec![paragraphs_finding(FindingKind::SingleWeakIndicium, &[*only])]
        }
        _ => Vec::new(),
    }
}

pub fn check_plurality_without_convergence(ctx: &RuleContext) -> Vec<Finding> {
    let indicia = ctx.indicia();
    if indicia.len() < 2 || ctx.document_mentions(Tag::Convergence) {
        return Vec::new();
    }

    vec![paragraphs_finding(
        FindingKind::PluralityWithoutConvergence {
            indicia: indicia.len(),
        },
        &indicia,
    )]
}

pub fn check_contradictory_evaluation_same_paragraph(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has_all(&[Tag::WeakEvaluation, Tag::StrongEvaluation]),
        |_| FindingKind::ContradictoryEvaluationSameParagraph,
    )
}

pub fn check_contradictory_evaluation_across_paragraphs(ctx: &RuleContext) -> Vec<Finding> {
    pairing_rule(
        ctx,
        Tag::WeakEvaluation,
        Tag::StrongEvaluation,
        |weak, strong| FindingKind::ContradictoryEvaluationAcrossParagraphs { weak, strong },
    )
}

/// Incompatibility stated inside a paragraph that discusses indicia
pub fn check_explicit_contradiction(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has_all(&[Tag::Indicium, Tag::IndiciaConflict]),
        |_| FindingKind::ExplicitContradictionBetweenIndicia,
    )
}

pub fn check_unconnected_indicia(ctx: &RuleContext) -> Vec<Finding> {
    let indicia = ctx.indicia();
    if indicia.len() < 2 || ctx.document_mentions(Tag::Connection) {
        return Vec::new();
    }

    vec![paragraphs_finding(
        FindingKind::UnconnectedIndicia {
            indicia: indicia.len(),
        },
        &indicia,
    )]
}

//! Misuse of testimonial evidence

use shared_types::{Finding, FindingKind};

use super::collect::{paragraphs_finding, signature_rule};
use super::RuleContext;
use crate::patterns::Tag;

pub fn check_testimony_as_strong_indicium(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has_all(&[Tag::Testimony, Tag::UndueStrength]),
        |_| FindingKind::TestimonyAsStrongIndicium,
    )
}

pub fn check_testimony_to_authorship(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has_all(&[Tag::Testimony, Tag::Authorship]),
        |_| FindingKind::TestimonyToAuthorshipLeap,
    )
}

/// The only indicium is testimonial and is credited with conclusive force
pub fn check_single_testimonial_indicium(ctx: &RuleContext) -> Vec<Finding> {
    match ctx.indicia().as_slice() {
        [only] if only.has_all(&[Tag::WeakSource, Tag::UndueStrength]) => vec![paragraphs_finding(
            FindingKind::SingleTestimonialIndiciumAsStrongProof,
            &[*only],
        )],
        _ => Vec::new(),
    }
}

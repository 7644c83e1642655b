//! Assessment contrary to the express content of the evidence

use shared_types::{Finding, FindingKind};

use super::collect::signature_rule;
use super::RuleContext;
use crate::patterns::Tag;

/// A cited medium whose content is negative, yet read as proving the fact
pub fn check_assessment_contrary_to_evidence(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has_all(&[Tag::EvidenceMedium, Tag::NegativeContent, Tag::StrongInference]),
        |_| FindingKind::AssessmentContraryToEvidence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag_paragraphs;
    use crate::text::segment_paragraphs;

    #[test]
    fn test_negative_content_read_as_proof() {
        let paragraphs = tag_paragraphs(segment_paragraphs(
            "El agente declaró que no vio el arma, lo que demuestra que la ocultó.\n\n\
             El agente declaró que no vio el arma.\n\n\
             Según el informe, no se aprecia lesión alguna.",
        ));
        let findings = check_assessment_contrary_to_evidence(&RuleContext::new(&paragraphs));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].paragraphs, vec![1]);
        assert_eq!(findings[0].severity, shared_types::Severity::Critical);
    }
}

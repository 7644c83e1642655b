//! Logical leaps and incomplete inferential chains

use shared_types::{Finding, FindingKind};

use super::collect::{paragraph_pass, signature_rule, ParagraphCheck};
use super::RuleContext;
use crate::patterns::Tag;
use crate::tagger::TaggedParagraph;

pub fn check_presence_to_knowledge(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has_all(&[Tag::MerePresence, Tag::AssumedKnowledge]),
        |_| FindingKind::PresenceToKnowledgeLeap,
    )
}

pub fn check_rank_to_authorship(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has_all(&[Tag::Position, Tag::Responsibility]),
        |_| FindingKind::RankToAuthorshipLeap,
    )
}

pub fn check_categorical_conclusion(ctx: &RuleContext) -> Vec<Finding> {
    signature_rule(
        ctx,
        |p| p.has(Tag::CategoricalConclusion) && !p.has(Tag::EvidenceReference),
        |_| FindingKind::CategoricalConclusionWithoutEvidence,
    )
}

/// `claim` with no evidence woven into the same paragraph
fn unsupported(p: &TaggedParagraph, claim: Tag) -> bool {
    p.has(claim) && !p.has(Tag::IndiciarySupport)
}

/// Conclusions and causal claims standing on nothing in their own paragraph
pub fn check_unsupported_conclusions(ctx: &RuleContext) -> Vec<Finding> {
    paragraph_pass(
        ctx,
        &[
            ParagraphCheck {
                applies: |p| unsupported(p, Tag::ConcludingConnector),
                kind: |_| FindingKind::ConclusionWithoutIndiciarySupport,
            },
            ParagraphCheck {
                applies: |p| unsupported(p, Tag::CausalClaim),
                kind: |_| FindingKind::CausalClaimWithoutLink,
            },
        ],
    )
}

/// Coordination and knowledge attributed to the accused without an indicium
pub fn check_unsupported_attributions(ctx: &RuleContext) -> Vec<Finding> {
    paragraph_pass(
        ctx,
        &[
            ParagraphCheck {
                applies: |p| unsupported(p, Tag::Coordination),
                kind: |_| FindingKind::CoordinationWithoutSupport,
            },
            ParagraphCheck {
                applies: |p| unsupported(p, Tag::KnowledgeClaim),
                kind: |_| FindingKind::KnowledgeWithoutSupport,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag_paragraphs;
    use crate::text::segment_paragraphs;
    use pretty_assertions::assert_eq;

    fn ordinals(check: fn(&RuleContext) -> Vec<Finding>, text: &str) -> Vec<usize> {
        let paragraphs = tag_paragraphs(segment_paragraphs(text));
        check(&RuleContext::new(&paragraphs))
            .into_iter()
            .flat_map(|f| f.paragraphs)
            .collect()
    }

    #[test]
    fn test_presence_to_knowledge() {
        let text = "Por el solo hecho de encontrarse en el domicilio, sabía de la droga.\n\n\
                    Por estar en el lugar fue detenido.";
        assert_eq!(ordinals(check_presence_to_knowledge, text), vec![1]);
    }

    #[test]
    fn test_rank_to_authorship() {
        let text = "En su condición de alcalde, autorizó los pagos.\n\n\
                    Autorizó la compra el tesorero.";
        assert_eq!(ordinals(check_rank_to_authorship, text), vec![1]);
    }

    #[test]
    fn test_categorical_conclusion_without_evidence() {
        let text = "Es evidente que el acusado mintió.\n\n\
                    Es evidente que, según la pericia, el arma fue disparada.";
        assert_eq!(ordinals(check_categorical_conclusion, text), vec![1]);
    }

    fn labelled(check: fn(&RuleContext) -> Vec<Finding>, text: &str) -> Vec<(usize, &'static str)> {
        let paragraphs = tag_paragraphs(segment_paragraphs(text));
        check(&RuleContext::new(&paragraphs))
            .into_iter()
            .map(|f| (f.paragraphs[0], f.label()))
            .collect()
    }

    #[test]
    fn test_concluding_connector_without_support() {
        let text = "Por tanto, el acusado es culpable.\n\n\
                    Por tanto, conforme al acta, el acusado estaba allí.";
        assert_eq!(ordinals(check_unsupported_conclusions, text), vec![1]);
    }

    #[test]
    fn test_causal_claim_without_link() {
        let text = "Huyó del lugar, lo cual demuestra que era culpable.";
        assert_eq!(
            labelled(check_unsupported_conclusions, text),
            vec![(1, "Afirmación causal sin explicación del vínculo (salto lógico)")]
        );
    }

    #[test]
    fn test_unsupported_conclusions_follow_paragraph_order() {
        let text = "Huyó del lugar, lo cual demuestra que era culpable.\n\n\
                    Por tanto, es culpable.";
        assert_eq!(
            labelled(check_unsupported_conclusions, text),
            vec![
                (1, "Afirmación causal sin explicación del vínculo (salto lógico)"),
                (2, "Conclusión sin sustento indiciario previo"),
            ]
        );
    }

    #[test]
    fn test_coordination_and_knowledge_in_one_paragraph() {
        let text = "Coordinó la operación y sabía que la carga era ilícita.";
        assert_eq!(
            labelled(check_unsupported_attributions, text),
            vec![
                (1, "Afirmación de coordinación/autoría sin sustento indiciario"),
                (1, "Afirmación de conocimiento sin sustento probatorio"),
            ]
        );

        let supported = "Según el documento incautado, coordinó la operación.";
        assert!(ordinals(check_unsupported_attributions, supported).is_empty());
    }

    #[test]
    fn test_unsupported_attributions_follow_paragraph_order() {
        let text = "Sabía que la carga era ilícita.\n\nCoordinó la operación.";
        assert_eq!(
            labelled(check_unsupported_attributions, text),
            vec![
                (1, "Afirmación de conocimiento sin sustento probatorio"),
                (2, "Afirmación de coordinación/autoría sin sustento indiciario"),
            ]
        );
    }
}

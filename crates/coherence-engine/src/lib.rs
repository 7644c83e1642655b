//! Circumstantial coherence index (ICI) for judicial decisions
//!
//! Scores how well a decision motivates circumstantial-evidence reasoning and
//! flags internally inconsistent argumentation. Text goes through the
//! paragraph segmenter and the pattern tagger; the criteria scoring and the
//! inconsistency rules then run independently of each other.

pub mod criteria;
pub mod interpretation;
pub mod patterns;
pub mod profile;
pub mod rules;
pub mod tagger;
pub mod text;

pub use profile::{ConfigError, ScoringProfile};

use shared_types::{CompositeResult, DecisionDocument, EvaluationReport, Finding};
use tracing::{debug, instrument};

/// Composite result and findings for one decision text
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub result: CompositeResult,
    pub findings: Vec<Finding>,
    pub paragraph_count: usize,
}

/// CoherenceEngine entry point
#[derive(Debug, Clone)]
pub struct CoherenceEngine {
    profile: ScoringProfile,
    parallel: bool,
}

impl CoherenceEngine {
    pub fn new() -> Self {
        Self::with_profile(ScoringProfile::ici_v7())
    }

    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self {
            profile,
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Evaluate everything on the calling thread
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Score and analyse already normalized text
    #[instrument(skip(self, text), fields(profile = %self.profile.name, chars = text.len()))]
    pub fn evaluate(&self, text: &str) -> Evaluation {
        let (result, (findings, paragraph_count)) = self.join(
            || self.score(text),
            || {
                let tagged = tagger::tag_paragraphs(text::segment_paragraphs(text));
                let findings = rules::detect_inconsistencies(&tagged, self.parallel);
                (findings, tagged.len())
            },
        );

        debug!(
            paragraphs = paragraph_count,
            findings = findings.len(),
            index = result.adjusted_index,
            "decision evaluated"
        );

        Evaluation {
            result,
            findings,
            paragraph_count,
        }
    }

    /// Normalize `raw` before evaluating it
    pub fn evaluate_raw(&self, raw: &str) -> Evaluation {
        self.evaluate(&text::normalize(raw))
    }

    /// Criteria scores, composite index, interpretation and brakes
    pub fn score(&self, text: &str) -> CompositeResult {
        let scores = criteria::score_criteria(text, &self.profile);
        interpretation::composite_result(&scores, &self.profile)
    }

    /// Findings of every inconsistency rule, in rule order
    #[instrument(skip(self, text))]
    pub fn analyze_inconsistencies(&self, text: &str) -> Vec<Finding> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let tagged = tagger::tag_paragraphs(text::segment_paragraphs(text));
        debug!(paragraphs = tagged.len(), "paragraphs tagged");
        rules::detect_inconsistencies(&tagged, self.parallel)
    }

    /// Evaluate a document handed over by the ingestion collaborator
    pub fn check_document(&self, document: &DecisionDocument) -> EvaluationReport {
        let evaluation = self.evaluate(&document.text);

        EvaluationReport {
            document_id: document.id.clone(),
            profile: self.profile.name.clone(),
            paragraph_count: evaluation.paragraph_count,
            result: evaluation.result,
            findings: evaluation.findings,
            evaluated_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    #[cfg(feature = "parallel")]
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        if self.parallel {
            rayon::join(a, b)
        } else {
            (a(), b())
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA,
        B: FnOnce() -> RB,
    {
        (a(), b())
    }
}

impl Default for CoherenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub mod finding;
pub mod types;

pub use finding::{Finding, FindingKind, Severity};
pub use types::{
    Brake, CompositeResult, CriterionId, CriterionScore, DecisionDocument, EvaluationReport,
    Paragraph,
};

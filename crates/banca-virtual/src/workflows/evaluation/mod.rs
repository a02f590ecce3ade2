//! Rubric-driven scoring of startup grant/investment applications.
//!
//! A [`RuleSet`] is loaded once per evaluation session (YAML file or the
//! embedded SEEDES fallback) and never mutated afterwards. The
//! [`EvaluationEngine`] wraps a rule set and turns raw per-criterion inputs
//! into an immutable [`ScoreResult`]; what-if simulations re-run the same
//! engine over a perturbed copy of the inputs.

pub mod domain;
mod rubric;
mod scoring;
mod sheet;

#[cfg(test)]
mod tests;

pub use domain::{
    Criterion, CriterionResult, RuleSet, ScoreInput, ScoreResult, DEFAULT_ELIMINATION_THRESHOLD,
    DEFAULT_MAX_POINTS,
};
pub use rubric::{load_rules, load_rules_strict, LoadedRules, RubricSource};
pub use scoring::EvaluationEngine;
pub use sheet::parse_score_sheet;

/// Error raised while loading rubrics or scoring inputs against them.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("malformed rubric: {detail}")]
    MalformedRubric { detail: String },
    #[error("criterion '{criterion}' has invalid weight {weight}")]
    InvalidWeight { criterion: String, weight: f64 },
    #[error("score input for '{criterion}' is not a usable number: {value}")]
    InvalidScoreInput { criterion: String, value: String },
    #[error("malformed score sheet: {detail}")]
    MalformedScoreSheet { detail: String },
    #[error("rubric source unavailable: {reason}")]
    RubricUnavailable { reason: String },
}

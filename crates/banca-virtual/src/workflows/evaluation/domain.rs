use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Raw per-criterion values keyed by criterion id. A criterion absent from
/// the map scores as 0. Values follow either the fractional convention
/// (pre-normalized to [0,1], `max_points` 1.0) or the points convention
/// (raw points against the criterion's `max_points`); both collapse into the
/// same clamp-then-divide rule in the engine.
pub type ScoreInput = HashMap<String, f64>;

pub const DEFAULT_MAX_POINTS: f64 = 1.0;
pub const DEFAULT_ELIMINATION_THRESHOLD: f64 = 0.7;

/// One scored dimension of an evaluation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub weight: f64,
    pub max_points: f64,
}

/// A named, versioned collection of weighted criteria plus the elimination
/// threshold. Criterion ids are unique and insertion order is preserved;
/// changing rules requires a fresh load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub id: String,
    pub name: String,
    pub version: String,
    pub elimination_threshold: f64,
    pub criteria: Vec<Criterion>,
}

impl RuleSet {
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.id == id)
    }

    /// Maximum raw points for a criterion; ids outside the rubric fall back
    /// to the fractional convention's implicit 1.0.
    pub fn max_points_for(&self, id: &str) -> f64 {
        self.criterion(id)
            .map(|criterion| criterion.max_points)
            .unwrap_or(DEFAULT_MAX_POINTS)
    }
}

/// Normalized outcome for a single criterion within a [`ScoreResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub id: String,
    pub label: String,
    pub weight: f64,
    /// Normalized score in [0,1].
    pub score: f64,
    /// `weight * score`.
    pub contribution: f64,
}

/// Immutable evaluation outcome. Every scoring pass, including what-if
/// simulations, produces a fresh value; nothing is updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: f64,
    pub eliminated: bool,
    pub details: Vec<CriterionResult>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub reasoning: BTreeMap<String, String>,
}

use crate::workflows::evaluation::{Criterion, EvaluationEngine, RuleSet, ScoreInput};

pub(super) const EPSILON: f64 = 1e-12;

/// Fractional dialect: one criterion, weight 1.0, implicit max_points.
pub(super) fn fractional_rubric(threshold: f64) -> RuleSet {
    RuleSet {
        id: "single".to_string(),
        name: "Single criterion".to_string(),
        version: "1".to_string(),
        elimination_threshold: threshold,
        criteria: vec![Criterion {
            id: "a".to_string(),
            label: "Overall".to_string(),
            weight: 1.0,
            max_points: 1.0,
        }],
    }
}

/// Points dialect: raw points against per-criterion maxima, SEEDES style.
pub(super) fn points_rubric() -> RuleSet {
    RuleSet {
        id: "points".to_string(),
        name: "Points rubric".to_string(),
        version: "0.1".to_string(),
        elimination_threshold: 0.7,
        criteria: vec![
            Criterion {
                id: "pitch".to_string(),
                label: "Pitch".to_string(),
                weight: 0.05,
                max_points: 5.0,
            },
            Criterion {
                id: "potencial_mercado".to_string(),
                label: "Potencial de Mercado".to_string(),
                weight: 0.15,
                max_points: 15.0,
            },
        ],
    }
}

pub(super) fn engine(rules: RuleSet) -> EvaluationEngine {
    EvaluationEngine::new(rules)
}

pub(super) fn inputs(entries: &[(&str, f64)]) -> ScoreInput {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

use super::domain::{CriterionResult, RuleSet, ScoreInput, ScoreResult};
use super::EvaluationError;
use std::collections::{BTreeMap, HashMap};

/// Stateless evaluator applying a loaded rule set to raw score inputs.
///
/// The engine never mutates its rule set or the supplied inputs; scoring the
/// same arguments twice yields identical results, so a single engine can be
/// shared read-only across callers.
pub struct EvaluationEngine {
    rules: RuleSet,
}

impl EvaluationEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn score(&self, inputs: &ScoreInput) -> Result<ScoreResult, EvaluationError> {
        self.score_with_reasoning(inputs, BTreeMap::new())
    }

    /// Scores `inputs` against the rubric, attaching free-form reasoning
    /// annotations to the result.
    ///
    /// Each criterion is processed in rubric order: the raw value (0.0 when
    /// absent) is clamped to `[0, max_points]`, normalized by dividing by
    /// `max_points`, and weighted into the running total. The fractional and
    /// points dialects share this single path since `max_points` defaults to
    /// 1.0. The total is eliminated only when the threshold is positive; a
    /// zero or negative threshold disables elimination, which rubric authors
    /// use as an escape hatch.
    pub fn score_with_reasoning(
        &self,
        inputs: &ScoreInput,
        reasoning: BTreeMap<String, String>,
    ) -> Result<ScoreResult, EvaluationError> {
        let mut total = 0.0;
        let mut details = Vec::with_capacity(self.rules.criteria.len());

        for criterion in &self.rules.criteria {
            let raw = inputs.get(&criterion.id).copied().unwrap_or(0.0);
            if !raw.is_finite() {
                return Err(EvaluationError::InvalidScoreInput {
                    criterion: criterion.id.clone(),
                    value: raw.to_string(),
                });
            }

            // max_points is validated positive at load time; hand-built rule
            // sets may still carry zero, which scores as 0 rather than
            // dividing by it.
            let normalized = if criterion.max_points > 0.0 {
                raw.clamp(0.0, criterion.max_points) / criterion.max_points
            } else {
                0.0
            };
            let contribution = normalized * criterion.weight;
            total += contribution;

            details.push(CriterionResult {
                id: criterion.id.clone(),
                label: criterion.label.clone(),
                weight: criterion.weight,
                score: normalized,
                contribution,
            });
        }

        let eliminated = self.rules.elimination_threshold > 0.0
            && total < self.rules.elimination_threshold;

        Ok(ScoreResult {
            total,
            eliminated,
            details,
            reasoning,
        })
    }

    /// Counterfactual re-scoring: applies raw-value deltas to a copy of
    /// `base_inputs` and scores the copy. The base inputs and any previous
    /// result are untouched. Each perturbed value is clamped to the
    /// criterion's `[0, max_points]` range before normalization, so a delta
    /// moves the raw entry, never the total directly. An empty delta map
    /// reproduces [`EvaluationEngine::score`] exactly.
    pub fn what_if(
        &self,
        base_inputs: &ScoreInput,
        deltas: &HashMap<String, f64>,
    ) -> Result<ScoreResult, EvaluationError> {
        let mut inputs = base_inputs.clone();

        for (id, delta) in deltas {
            if !delta.is_finite() {
                return Err(EvaluationError::InvalidScoreInput {
                    criterion: id.clone(),
                    value: delta.to_string(),
                });
            }
            let base = inputs.get(id).copied().unwrap_or(0.0);
            let max_points = self.rules.max_points_for(id);
            let adjusted = if max_points > 0.0 {
                (base + delta).clamp(0.0, max_points)
            } else {
                0.0
            };
            inputs.insert(id.clone(), adjusted);
        }

        self.score(&inputs)
    }
}

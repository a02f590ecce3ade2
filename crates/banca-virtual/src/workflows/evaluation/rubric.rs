use super::domain::{
    Criterion, RuleSet, DEFAULT_ELIMINATION_THRESHOLD, DEFAULT_MAX_POINTS,
};
use super::EvaluationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Rubric shipped with the binary so evaluations keep working when the
/// configured rules file is missing or broken. Matches the official SEEDES
/// points rubric.
const EMBEDDED_RUBRIC_YAML: &str = include_str!("seedes.yml");

/// Where the active rule set actually came from. The fallback variant is a
/// visible status, not a silent default: it changes which criteria the
/// session scores against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RubricSource {
    File { path: PathBuf },
    EmbeddedFallback { reason: String },
}

impl RubricSource {
    pub fn label(&self) -> &'static str {
        match self {
            RubricSource::File { .. } => "file",
            RubricSource::EmbeddedFallback { .. } => "embedded_fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RubricSource::EmbeddedFallback { .. })
    }
}

/// A parsed rule set together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRules {
    pub rules: RuleSet,
    pub source: RubricSource,
}

/// Loads the rubric at `path`, falling back to the embedded SEEDES rubric
/// when the file is unreadable or unparsable. The fallback is surfaced both
/// through [`RubricSource`] and a warning log.
pub fn load_rules(path: &Path) -> Result<LoadedRules, EvaluationError> {
    let fallback = |reason: String| -> Result<LoadedRules, EvaluationError> {
        warn!(path = %path.display(), %reason, "rubric unavailable, using embedded fallback");
        let rules = RuleSet::from_yaml(EMBEDDED_RUBRIC_YAML)?;
        Ok(LoadedRules {
            rules,
            source: RubricSource::EmbeddedFallback { reason },
        })
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return fallback(format!("read failed: {err}")),
    };

    match RuleSet::from_yaml(&source) {
        Ok(rules) => Ok(LoadedRules {
            rules,
            source: RubricSource::File {
                path: path.to_path_buf(),
            },
        }),
        Err(err) => fallback(err.to_string()),
    }
}

/// Variant of [`load_rules`] without the embedded fallback; an unreadable
/// source is an error the caller must handle.
pub fn load_rules_strict(path: &Path) -> Result<RuleSet, EvaluationError> {
    let source = fs::read_to_string(path).map_err(|err| EvaluationError::RubricUnavailable {
        reason: format!("{}: {err}", path.display()),
    })?;
    RuleSet::from_yaml(&source)
}

impl RuleSet {
    /// Parses and validates a YAML rubric definition. Both dialects are
    /// accepted: fractional weights without `max_points` and the points
    /// dialect with explicit per-criterion maxima.
    pub fn from_yaml(source: &str) -> Result<RuleSet, EvaluationError> {
        let doc: RubricDoc =
            serde_yaml::from_str(source).map_err(|err| EvaluationError::MalformedRubric {
                detail: err.to_string(),
            })?;

        let mut seen = HashSet::new();
        let mut criteria = Vec::with_capacity(doc.criteria.len());
        for row in doc.criteria {
            if row.weight < 0.0 || !row.weight.is_finite() {
                return Err(EvaluationError::InvalidWeight {
                    criterion: row.id,
                    weight: row.weight,
                });
            }
            let max_points = row.max_points.unwrap_or(DEFAULT_MAX_POINTS);
            if !(max_points > 0.0) || !max_points.is_finite() {
                return Err(EvaluationError::MalformedRubric {
                    detail: format!("criterion '{}' has non-positive max_points", row.id),
                });
            }
            if !seen.insert(row.id.clone()) {
                return Err(EvaluationError::MalformedRubric {
                    detail: format!("duplicate criterion id '{}'", row.id),
                });
            }
            criteria.push(Criterion {
                id: row.id,
                label: row.label,
                weight: row.weight,
                max_points,
            });
        }

        Ok(RuleSet {
            id: doc.id,
            name: doc.name,
            version: doc
                .version
                .map(|version| version.into_text())
                .unwrap_or_else(|| "0".to_string()),
            elimination_threshold: doc
                .elimination_threshold
                .unwrap_or(DEFAULT_ELIMINATION_THRESHOLD),
            criteria,
        })
    }
}

/// Raw document shape prior to validation. Required fields are enforced by
/// serde; everything else is checked explicitly so errors name the offending
/// criterion instead of a YAML offset.
#[derive(Debug, Deserialize)]
struct RubricDoc {
    id: String,
    name: String,
    #[serde(default)]
    version: Option<VersionField>,
    #[serde(default)]
    elimination_threshold: Option<f64>,
    #[serde(default)]
    criteria: Vec<CriterionRow>,
}

#[derive(Debug, Deserialize)]
struct CriterionRow {
    id: String,
    label: String,
    weight: f64,
    #[serde(default)]
    max_points: Option<f64>,
}

/// Rubric authors write versions as strings or bare numbers; either way the
/// rule set stores text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionField {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl VersionField {
    fn into_text(self) -> String {
        match self {
            VersionField::Text(value) => value,
            VersionField::Integer(value) => value.to_string(),
            VersionField::Number(value) => value.to_string(),
        }
    }
}

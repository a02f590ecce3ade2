use crate::workflows::evaluation::{load_rules, EvaluationError, RuleSet};
use std::path::Path;

const FRACTIONAL_RUBRIC: &str = r#"
id: demo_day
name: Demo Day Rubric
version: '1.2'
elimination_threshold: 0.6
criteria:
  - { id: team, label: 'Team', weight: 0.4 }
  - { id: market, label: 'Market', weight: 0.6 }
"#;

const POINTS_RUBRIC: &str = r#"
id: seedes_like
name: Points Rubric
criteria:
  - { id: pitch, label: 'Pitch', weight: 0.05, max_points: 5 }
  - { id: mercado, label: 'Mercado', weight: 0.15, max_points: 15 }
"#;

#[test]
fn parses_the_fractional_dialect() {
    let rules = RuleSet::from_yaml(FRACTIONAL_RUBRIC).expect("parses");

    assert_eq!(rules.id, "demo_day");
    assert_eq!(rules.version, "1.2");
    assert_eq!(rules.elimination_threshold, 0.6);
    assert_eq!(rules.criteria.len(), 2);
    assert_eq!(rules.criteria[0].max_points, 1.0);
}

#[test]
fn parses_the_points_dialect_with_defaults() {
    let rules = RuleSet::from_yaml(POINTS_RUBRIC).expect("parses");

    assert_eq!(rules.version, "0");
    assert_eq!(rules.elimination_threshold, 0.7);
    assert_eq!(rules.criteria[0].max_points, 5.0);
    assert_eq!(rules.criteria[1].max_points, 15.0);
}

#[test]
fn criteria_keep_insertion_order() {
    let rules = RuleSet::from_yaml(POINTS_RUBRIC).expect("parses");
    let ids: Vec<&str> = rules.criteria.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["pitch", "mercado"]);
}

#[test]
fn numeric_versions_are_stored_as_text() {
    let rules = RuleSet::from_yaml(
        "id: r\nname: R\nversion: 2\ncriteria:\n  - { id: a, label: 'A', weight: 1.0 }\n",
    )
    .expect("parses");
    assert_eq!(rules.version, "2");
}

#[test]
fn missing_required_fields_are_malformed() {
    let err = RuleSet::from_yaml("name: Missing Id\ncriteria: []\n").expect_err("must fail");
    assert!(matches!(err, EvaluationError::MalformedRubric { .. }));

    let err = RuleSet::from_yaml(
        "id: r\nname: R\ncriteria:\n  - { id: a, label: 'A' }\n",
    )
    .expect_err("criterion without weight must fail");
    assert!(matches!(err, EvaluationError::MalformedRubric { .. }));
}

#[test]
fn negative_weights_are_rejected() {
    let err = RuleSet::from_yaml(
        "id: r\nname: R\ncriteria:\n  - { id: a, label: 'A', weight: -0.5 }\n",
    )
    .expect_err("must fail");

    match err {
        EvaluationError::InvalidWeight { criterion, weight } => {
            assert_eq!(criterion, "a");
            assert_eq!(weight, -0.5);
        }
        other => panic!("expected invalid weight, got {other:?}"),
    }
}

#[test]
fn duplicate_criterion_ids_are_rejected() {
    let err = RuleSet::from_yaml(
        "id: r\nname: R\ncriteria:\n  - { id: a, label: 'A', weight: 0.5 }\n  - { id: a, label: 'B', weight: 0.5 }\n",
    )
    .expect_err("must fail");
    assert!(matches!(err, EvaluationError::MalformedRubric { .. }));
}

#[test]
fn non_positive_max_points_is_rejected() {
    let err = RuleSet::from_yaml(
        "id: r\nname: R\ncriteria:\n  - { id: a, label: 'A', weight: 0.5, max_points: 0 }\n",
    )
    .expect_err("must fail");
    assert!(matches!(err, EvaluationError::MalformedRubric { .. }));
}

#[test]
fn missing_file_falls_back_to_the_embedded_rubric() {
    let loaded = load_rules(Path::new("/nonexistent/rules.yml")).expect("fallback loads");

    assert!(loaded.source.is_fallback());
    assert_eq!(loaded.source.label(), "embedded_fallback");
    assert_eq!(loaded.rules.id, "seedes_oficial");
    assert_eq!(loaded.rules.criteria.len(), 10);
    assert_eq!(loaded.rules.max_points_for("pitch"), 5.0);
}

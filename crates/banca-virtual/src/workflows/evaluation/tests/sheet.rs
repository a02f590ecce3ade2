use crate::workflows::evaluation::{parse_score_sheet, EvaluationError};
use std::io::Cursor;

fn sheet(contents: &str) -> Cursor<Vec<u8>> {
    Cursor::new(contents.as_bytes().to_vec())
}

#[test]
fn parses_points_keyed_by_criterion_id() {
    let inputs = parse_score_sheet(sheet(
        "Criterion ID,Points\npitch,3\npotencial_mercado,11.5\n",
    ))
    .expect("parses");

    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs.get("pitch"), Some(&3.0));
    assert_eq!(inputs.get("potencial_mercado"), Some(&11.5));
}

#[test]
fn blank_point_cells_are_skipped() {
    let inputs = parse_score_sheet(sheet(
        "Criterion ID,Points\npitch,4\nviabilidade_financeira,\n",
    ))
    .expect("parses");

    assert_eq!(inputs.len(), 1);
    assert!(!inputs.contains_key("viabilidade_financeira"));
}

#[test]
fn repeated_criteria_keep_the_last_row() {
    let inputs =
        parse_score_sheet(sheet("Criterion ID,Points\npitch,2\npitch,4\n")).expect("parses");
    assert_eq!(inputs.get("pitch"), Some(&4.0));
}

#[test]
fn non_numeric_points_are_invalid_inputs() {
    let err = parse_score_sheet(sheet("Criterion ID,Points\npitch,three\n"))
        .expect_err("must fail");

    match err {
        EvaluationError::InvalidScoreInput { criterion, value } => {
            assert_eq!(criterion, "pitch");
            assert_eq!(value, "three");
        }
        other => panic!("expected invalid score input, got {other:?}"),
    }
}

#[test]
fn missing_columns_are_a_malformed_sheet() {
    let err = parse_score_sheet(sheet("Wrong,Header\nx,1\n")).expect_err("must fail");
    assert!(matches!(err, EvaluationError::MalformedScoreSheet { .. }));
}

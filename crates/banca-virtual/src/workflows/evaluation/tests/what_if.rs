use super::common::{engine, fractional_rubric, inputs, points_rubric, EPSILON};
use std::collections::HashMap;

fn deltas(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

#[test]
fn empty_deltas_reproduce_the_base_score() {
    let engine = engine(points_rubric());
    let raw = inputs(&[("pitch", 3.0), ("potencial_mercado", 12.0)]);

    let base = engine.score(&raw).expect("scores");
    let simulated = engine.what_if(&raw, &HashMap::new()).expect("simulates");

    assert_eq!(base, simulated);
}

#[test]
fn delta_is_applied_to_the_raw_value_before_normalization() {
    let engine = engine(fractional_rubric(0.7));
    let raw = inputs(&[("a", 0.5)]);

    let base = engine.score(&raw).expect("scores");
    assert!((base.total - 0.5).abs() < EPSILON);

    let simulated = engine.what_if(&raw, &deltas(&[("a", 0.2)])).expect("simulates");
    assert!((simulated.total - 0.7).abs() < EPSILON);
}

#[test]
fn base_inputs_and_base_result_are_never_mutated() {
    let engine = engine(fractional_rubric(0.7));
    let raw = inputs(&[("a", 0.5)]);

    let base = engine.score(&raw).expect("scores");
    let _simulated = engine.what_if(&raw, &deltas(&[("a", 0.3)])).expect("simulates");

    assert_eq!(raw.get("a"), Some(&0.5));
    let rescored = engine.score(&raw).expect("scores");
    assert_eq!(base, rescored);
}

#[test]
fn perturbed_values_clamp_to_the_criterion_maximum() {
    let engine = engine(points_rubric());
    let raw = inputs(&[("pitch", 4.0)]);

    let boosted = engine.what_if(&raw, &deltas(&[("pitch", 10.0)])).expect("simulates");
    assert!((boosted.details[0].score - 1.0).abs() < EPSILON);

    let cut = engine.what_if(&raw, &deltas(&[("pitch", -10.0)])).expect("simulates");
    assert!(cut.details[0].score.abs() < EPSILON);
}

#[test]
fn multi_criterion_deltas_apply_uniformly() {
    let engine = engine(points_rubric());
    let raw = inputs(&[("pitch", 2.0), ("potencial_mercado", 5.0)]);

    let simulated = engine
        .what_if(&raw, &deltas(&[("pitch", 1.0), ("potencial_mercado", 4.0)]))
        .expect("simulates");

    let expected = (3.0 / 5.0) * 0.05 + (9.0 / 15.0) * 0.15;
    assert!((simulated.total - expected).abs() < EPSILON);
}

#[test]
fn deltas_for_missing_base_entries_start_from_zero() {
    let engine = engine(points_rubric());
    let simulated = engine
        .what_if(&inputs(&[]), &deltas(&[("pitch", 2.5)]))
        .expect("simulates");

    assert!((simulated.details[0].score - 0.5).abs() < EPSILON);
}

#[test]
fn deltas_on_unknown_ids_do_not_affect_the_total() {
    let engine = engine(fractional_rubric(0.0));
    let raw = inputs(&[("a", 0.4)]);

    let simulated = engine
        .what_if(&raw, &deltas(&[("nonexistent", 0.9)]))
        .expect("simulates");

    assert!((simulated.total - 0.4).abs() < EPSILON);
}

mod common;

use common::*;
use deepmatch::matchers::{any, object_containing};
use deepmatch::{AnyType, DiffRecorder, MatchersUtil, MismatchReason, Value};

fn close_numbers(a: &Value, b: &Value) -> Option<bool> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Some((x - y).abs() < 0.01),
        _ => None,
    }
}

#[test]
fn tester_decides_numbers() {
    let util = MatchersUtil::new().with_custom_tester(close_numbers);
    assert!(util.equals(&num(1.0), &num(1.001)));
    assert!(!util.equals(&num(1.0), &num(1.1)));
}

#[test]
fn tester_applies_to_nested_values() {
    let util = MatchersUtil::new().with_custom_tester(close_numbers);
    let a = obj([("xs", arr([num(1.0), num(2.0)]))]);
    let b = obj([("xs", arr([num(1.004), num(1.999)]))]);
    assert!(util.equals(&a, &b));
    assert!(!MatchersUtil::new().equals(&a, &b));
}

#[test]
fn undecided_pairs_use_default_rules() {
    let util = MatchersUtil::new().with_custom_tester(close_numbers);
    assert!(util.equals(&s("a"), &s("a")));
    assert!(!util.equals(&s("a"), &s("b")));
}

#[test]
fn first_verdict_wins() {
    let util = MatchersUtil::new()
        .with_custom_tester(|_: &Value, _: &Value| None)
        .with_custom_tester(|_: &Value, _: &Value| Some(false))
        .with_custom_tester(|_: &Value, _: &Value| Some(true));
    assert!(!util.equals(&num(1.0), &num(1.0)));
}

#[test]
fn testers_run_before_identity() {
    let util = MatchersUtil::new().with_custom_tester(|_: &Value, _: &Value| Some(false));
    let a = obj([]);
    assert!(!util.equals(&a, &a.clone()));
}

#[test]
fn testers_run_before_matchers() {
    let util = MatchersUtil::new().with_custom_tester(|_: &Value, _: &Value| Some(true));
    assert!(util.equals(&any(AnyType::String), &num(1.0)));
}

#[test]
fn object_containing_uses_testers() {
    let util = MatchersUtil::new().with_custom_tester(close_numbers);
    let matcher = object_containing(obj([("a", num(1.0))])).unwrap();
    assert!(util.equals(&obj([("a", num(1.001)), ("b", num(5.0))]), &matcher));
}

#[test]
fn contains_uses_testers() {
    let util = MatchersUtil::new().with_custom_tester(close_numbers);
    assert!(util.contains(&arr([num(5.0), num(1.001)]), &num(1.0)));
}

#[test]
fn rejection_is_recorded() {
    let util = MatchersUtil::new().with_custom_tester(close_numbers);
    let mut recorder = DiffRecorder::new();
    assert!(!util.equals_with_diff(&obj([("a", num(1.0))]), &obj([("a", num(2.0))]), &mut recorder));
    assert_eq!(1, recorder.records().len());
    assert_eq!(MismatchReason::Unequal, recorder.records()[0].mismatch.reason);
    assert_eq!("$.a", recorder.records()[0].path.to_string());
}

#[test]
#[should_panic(expected = "tester failed")]
fn tester_panics_propagate() {
    let util = MatchersUtil::new().with_custom_tester(|_: &Value, _: &Value| -> Option<bool> {
        panic!("tester failed")
    });
    util.equals(&num(1.0), &num(1.0));
}

use attest::{AssertionFailed, Collect, FailKind, Record, TestCase, Value};

fn case() -> TestCase<Collect> {
    TestCase::with_report(Collect::new())
}

fn records(case: TestCase<Collect>) -> Vec<Record> {
    case.into_report().records
}

#[test]
fn assert_true_passes_only_on_bool_true() {
    let mut tc = case();
    assert_eq!(tc.assert_true(true, ""), Ok(()));
    assert_eq!(tc.assert_true(1, ""), Err(AssertionFailed));
    assert_eq!(tc.assert_true("true", ""), Err(AssertionFailed));
    let recs = records(tc);
    assert_eq!(recs[0], Record::Ok);
    assert_eq!(
        recs[1],
        Record::Failed {
            kind: FailKind::Bool,
            expected: Value::from("true"),
            actual: Value::from(1),
            message: String::new(),
            line: 0,
        }
    );
}

#[test]
fn assert_false_is_strict_too() {
    let mut tc = case();
    assert_eq!(tc.assert_false(false, ""), Ok(()));
    assert_eq!(tc.assert_false(0, ""), Err(AssertionFailed));
    let recs = records(tc);
    assert_eq!(
        recs[1],
        Record::Failed {
            kind: FailKind::Bool,
            expected: Value::from("false"),
            actual: Value::from(0),
            message: String::new(),
            line: 0,
        }
    );
}

#[test]
fn assert_equals_takes_the_numeric_exact_path() {
    let mut tc = case();
    assert_eq!(tc.assert_equals(5, "5", ""), Ok(()));
    assert_eq!(records(tc), vec![Record::Ok]);
}

#[test]
fn assert_equals_tolerates_float_rounding() {
    let mut tc = case();
    assert_eq!(tc.assert_equals(0.1 + 0.2, 0.3, ""), Ok(()));
}

#[test]
fn assert_same_requires_matching_kind() {
    let mut tc = case();
    assert_eq!(tc.assert_same(5, "5", ""), Err(AssertionFailed));
    assert_eq!(
        records(tc),
        vec![Record::Failed {
            kind: FailKind::Same,
            expected: Value::from(5),
            actual: Value::from("5"),
            message: String::new(),
            line: 0,
        }]
    );
}

#[test]
fn failure_carries_message_and_line() {
    let mut tc = case();
    let res = tc.assert_equals_with_line(42, 1, 2, "values diverged");
    assert_eq!(res, Err(AssertionFailed));
    assert_eq!(
        records(tc),
        vec![Record::Failed {
            kind: FailKind::Equals,
            expected: Value::from(1),
            actual: Value::from(2),
            message: "values diverged".to_string(),
            line: 42,
        }]
    );
}

#[test]
fn bare_methods_report_line_zero() {
    let mut tc = case();
    let _ = tc.assert_not_equals(1, 1, "");
    match &records(tc)[0] {
        Record::Failed { kind, line, .. } => {
            assert_eq!(*kind, FailKind::NotEquals);
            assert_eq!(*line, 0);
        }
        other => panic!("expected a failure record, got {:?}", other),
    }
}

#[test]
fn equals_and_not_equals_never_agree() {
    let pairs = [
        (Value::from(5), Value::from("5")),
        (Value::from("5"), Value::from("5")),
        (Value::from(0.1 + 0.2), Value::from(0.3)),
        (Value::from(true), Value::from(1)),
        (Value::from(1), Value::from(2)),
        (Value::Null, Value::from(false)),
        (Value::from(f64::NAN), Value::from(f64::NAN)),
        (Value::Other("a".into()), Value::Other("b".into())),
    ];
    for (a, b) in &pairs {
        let mut tc = case();
        let eq = tc.assert_equals(a.clone(), b.clone(), "").is_ok();
        let ne = tc.assert_not_equals(a.clone(), b.clone(), "").is_ok();
        assert_ne!(eq, ne, "diverged on {:?} vs {:?}", a, b);
    }
}

#[test]
fn same_and_not_same_never_agree() {
    let pairs = [
        (Value::from(1), Value::from(1.0)),
        (Value::from(1.0), Value::from(1.0)),
        (Value::from("x"), Value::from("x")),
        (Value::from(f64::INFINITY), Value::from(f64::NEG_INFINITY)),
        (Value::Null, Value::Null),
    ];
    for (a, b) in &pairs {
        let mut tc = case();
        let same = tc.assert_same(a.clone(), b.clone(), "").is_ok();
        let not_same = tc.assert_not_same(a.clone(), b.clone(), "").is_ok();
        assert_ne!(same, not_same, "diverged on {:?} vs {:?}", a, b);
    }
}

#[test]
fn every_call_emits_exactly_one_record() {
    let mut tc = case();
    let _ = tc.assert_true(true, "");
    let _ = tc.assert_false(true, "");
    let _ = tc.assert_same(1, 1, "");
    let _ = tc.assert_not_same(1, 1, "");
    let _ = tc.assert_equals(1, 1, "");
    let _ = tc.assert_not_equals(1, 1, "");
    assert_eq!(records(tc).len(), 6);
}

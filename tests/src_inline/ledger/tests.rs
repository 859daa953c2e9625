use super::*;

fn ledger() -> ScoreLedger {
    ScoreLedger::new(
        ScoreBounds::twenty_point(),
        Box::new(FixedDate("2026-10-19".to_string())),
    )
}

#[test]
fn test_insert_valid_values_grows_by_one() {
    let mut l = ledger();
    for (i, raw) in ["0", "20", "19.5", "17.25", " 8 ", "0.75"].iter().enumerate() {
        let before = l.len();
        let expected: f64 = raw.trim().parse().unwrap();
        let entry = l.insert(raw, None).unwrap();
        assert_eq!(entry.value(), expected);
        assert_eq!(l.len(), before + 1);
        assert_eq!(l.len(), i + 1);
    }
}

#[test]
fn test_insert_value_accepts_numbers() {
    let mut l = ledger();
    let entry = l.insert_value(13.5, Some("Quiz")).unwrap();
    assert_eq!(entry.value(), 13.5);
    assert_eq!(entry.label(), "Quiz");
    assert_eq!(entry.date(), "2026-10-19");
}

#[test]
fn test_insert_rejects_out_of_range_and_garbage() {
    let mut l = ledger();
    l.insert("12", None).unwrap();
    let before = l.entries().to_vec();

    for raw in ["-1", "-0.25", "20.25", "25", "abc", "", "  ", "NaN", "inf", "-inf", "12,5"] {
        assert!(l.insert(raw, Some("bad")).is_err(), "accepted {raw:?}");
        assert_eq!(l.entries().to_vec(), before);
    }
    assert!(l.insert_value(f64::NAN, None).is_err());
    assert!(l.insert_value(f64::INFINITY, None).is_err());
    assert_eq!(l.entries().to_vec(), before);
}

#[test]
fn test_rejection_reasons() {
    let mut l = ledger();
    let err = l.insert("25", None).unwrap_err();
    assert_eq!(
        err,
        LedgerError::OutOfRange {
            value: 25.0,
            min: 0.0,
            max: 20.0
        }
    );
    assert_eq!(err.reason(), "out_of_range");

    let err = l.insert("twelve", None).unwrap_err();
    assert_eq!(err.reason(), "not_a_number");
    assert!(err.to_string().contains("twelve"));
}

#[test]
fn test_rejected_value_never_appears() {
    let mut l = ledger();
    l.insert("18", None).unwrap();
    assert!(l.insert("25", None).is_err());
    l.insert("15", None).unwrap();
    assert!(l.values().iter().all(|v| *v != 25.0));
    assert_eq!(l.len(), 2);
}

#[test]
fn test_default_label_uses_size_at_insertion() {
    assert_eq!(default_label("Test", 0), "Test 1");
    assert_eq!(default_label("Test", 4), "Test 5");

    let mut l = ledger();
    assert_eq!(l.insert("10", None).unwrap().label(), "Test 1");
    assert_eq!(l.insert("11", Some("")).unwrap().label(), "Test 2");
    assert_eq!(l.insert("12", Some("   ")).unwrap().label(), "Test 3");
    assert_eq!(l.insert("13", Some("Final")).unwrap().label(), "Final");

    let first = l.entries()[0].id();
    l.remove(first);
    assert_eq!(l.insert("14", None).unwrap().label(), "Test 4");
}

#[test]
fn test_custom_label_prefix() {
    let mut l = ledger().with_label_prefix("آزمون");
    assert_eq!(l.insert("10", None).unwrap().label(), "آزمون 1");
}

#[test]
fn test_ids_unique_and_not_reused() {
    let mut l = ledger();
    let a = l.insert("1", None).unwrap().id();
    let b = l.insert("2", None).unwrap().id();
    l.remove(b);
    let c = l.insert("3", None).unwrap().id();
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_insertion_order_preserved() {
    let mut l = ledger();
    let raws = ["18", "3", "20", "7.5", "11"];
    for raw in raws {
        l.insert(raw, None).unwrap();
    }
    let values = l.values();
    assert_eq!(values, vec![18.0, 3.0, 20.0, 7.5, 11.0]);
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut l = ledger();
    let ids: Vec<EntryId> = ["1", "2", "3", "4"]
        .iter()
        .map(|raw| l.insert(raw, None).unwrap().id())
        .collect();
    let removed = l.remove(ids[1]).unwrap();
    assert_eq!(removed.value(), 2.0);
    assert_eq!(l.values(), vec![1.0, 3.0, 4.0]);
    let find = |id: EntryId| l.entries().iter().find(|e| e.id() == id);
    assert!(find(ids[1]).is_none());
    assert_eq!(find(ids[2]).unwrap().value(), 3.0);
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut l = ledger();
    l.insert("9", None).unwrap();
    l.insert("10", None).unwrap();
    let before = l.entries().to_vec();
    assert!(l.remove(EntryId::new(999)).is_none());
    assert_eq!(l.entries().to_vec(), before);

    let id = l.entries()[0].id();
    assert!(l.remove(id).is_some());
    assert!(l.remove(id).is_none());
    assert_eq!(l.len(), 1);
}

#[test]
fn test_negative_zero_stored_as_zero() {
    let mut l = ledger();
    let entry = l.insert("-0", None).unwrap();
    assert!(entry.value().is_sign_positive());
}

#[test]
fn test_empty_ledger() {
    let l = ledger();
    assert!(l.is_empty());
    assert_eq!(l.len(), 0);
    assert!(l.entries().is_empty());
}

#[test]
fn test_fractional_values_stored_exactly() {
    let mut l = ledger();
    assert_eq!(l.insert("19.999", None).unwrap().value(), 19.999);
    assert_eq!(l.insert(" 12.125 ", None).unwrap().value(), 12.125);
    assert_eq!(l.values(), vec![19.999, 12.125]);
}

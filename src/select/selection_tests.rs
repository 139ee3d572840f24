//! Tests for select/selection

use super::*;
use proptest::prelude::*;

#[test]
fn test_add_appends_in_order() {
    let mut selection = Selection::new();
    assert!(selection.add("Fatigue"));
    assert!(selection.add("Chest pain"));
    assert_eq!(selection.values(), ["Fatigue", "Chest pain"]);
}

#[test]
fn test_add_duplicate_is_noop() {
    let mut selection = Selection::from_iter(["Fatigue"]);
    assert!(!selection.add("Fatigue"));
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_add_duplicate_after_trim_is_noop() {
    let mut selection = Selection::from_iter(["Fatigue"]);
    assert!(!selection.add("  Fatigue "));
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_duplicate_check_is_case_sensitive() {
    let mut selection = Selection::from_iter(["Fatigue"]);
    assert!(selection.add("fatigue"));
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_add_blank_is_noop() {
    let mut selection = Selection::new();
    assert!(!selection.add(""));
    assert!(!selection.add("   \t"));
    assert!(selection.is_empty());
}

#[test]
fn test_add_stores_trimmed_value() {
    let mut selection = Selection::new();
    selection.add("  Headache  ");
    assert_eq!(selection.values(), ["Headache"]);
}

#[test]
fn test_remove_out_of_range_is_none() {
    let mut selection = Selection::from_iter(["A"]);
    assert_eq!(selection.remove(3), None);
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_accept_entry() {
    let selected = vec!["Fatigue".to_string()];
    assert_eq!(accept_entry(" Cough ", &selected), Some("Cough".to_string()));
    assert_eq!(accept_entry("Fatigue", &selected), None);
    assert_eq!(accept_entry(" ", &selected), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Whatever is added, the selection never holds duplicates or blank values
    #[test]
    fn prop_selection_invariant_holds(values in prop::collection::vec("[ a-cA-C]{0,4}", 0..30)) {
        let mut selection = Selection::new();
        for value in &values {
            selection.add(value);
        }

        let entries = selection.values();
        for (i, entry) in entries.iter().enumerate() {
            prop_assert!(!entry.trim().is_empty());
            prop_assert_eq!(entry.trim(), entry.as_str());
            prop_assert!(!entries[i + 1..].contains(entry));
        }
    }

    // Re-adding any existing entry never changes the length
    #[test]
    fn prop_readding_existing_is_noop(values in prop::collection::vec("[a-z]{1,6}", 1..15), pick in 0usize..15) {
        let mut selection = Selection::from(values.clone());
        let before = selection.len();
        let existing = selection.values()[pick % before].clone();

        prop_assert!(!selection.add(&existing));
        prop_assert_eq!(selection.len(), before);
    }

    // Removing by index drops exactly one entry and keeps the rest in order
    #[test]
    fn prop_remove_preserves_order(values in prop::collection::vec("[a-z]{1,6}", 1..15), pick in 0usize..15) {
        let mut selection = Selection::from(values);
        let before: Vec<String> = selection.values().to_vec();
        let index = pick % before.len();

        let removed = selection.remove(index);

        prop_assert_eq!(removed.as_ref(), Some(&before[index]));
        prop_assert_eq!(selection.len(), before.len() - 1);
        let mut expected = before.clone();
        expected.remove(index);
        prop_assert_eq!(selection.values(), expected.as_slice());
    }
}

//! Property-based tests for covalid.

use std::collections::BTreeMap;

use covalid::prelude::*;
use proptest::prelude::*;

// ============================================================================
// EMPTY PASS-THROUGH: leaf rules accept nil and empty input
// ============================================================================

proptest! {
    #[test]
    fn empty_input_passes_leaf_rules(min_len in 1usize..10, max_len in 10usize..20) {
        let leaf = rules![
            length(min_len, max_len),
            is_in(["a", "b"]),
            matches(regex::Regex::new("^x+$").unwrap()),
            string_rule(|_| false, "never"),
        ];
        prop_assert!(validate("", &leaf).is_ok());
        prop_assert!(validate(&None::<String>, &leaf).is_ok());
    }

    #[test]
    fn required_fails_iff_empty(s in ".{0,10}") {
        let result = validate(s.as_str(), &rules![required()]);
        prop_assert_eq!(result.is_err(), s.is_empty());
    }
}

// ============================================================================
// AGGREGATE ORDER: keys come out sorted whatever the insertion order
// ============================================================================

proptest! {
    #[test]
    fn aggregate_keys_are_sorted(keys in prop::collection::vec("[a-zA-Z0-9_]{1,6}", 1..12)) {
        let errors: ValidationErrors = keys
            .iter()
            .map(|k| (k.clone(), Error::from(ValidationError::new("code", "bad"))))
            .collect();

        let mut expected: Vec<&str> = keys.iter().map(String::as_str).collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(errors.keys().collect::<Vec<_>>(), expected.clone());

        let joined = expected.iter().map(|k| format!("{k}: bad")).collect::<Vec<_>>().join("; ");
        prop_assert_eq!(errors.to_string(), format!("{joined}."));
    }

    #[test]
    fn filter_never_returns_an_empty_aggregate(keys in prop::collection::vec("[a-z]{1,4}", 0..8)) {
        let errors: ValidationErrors = keys.iter().map(|k| (k.clone(), None::<Error>)).collect();
        prop_assert!(errors.filter().is_none());
    }
}

// ============================================================================
// EACH: failing elements are exactly the empty ones, keyed by index
// ============================================================================

proptest! {
    #[test]
    fn each_reports_empty_elements(items in prop::collection::vec("[a-z]{0,2}", 0..10)) {
        let result = validate(&items, &rules![each(rules![required()])]);
        let expected: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| i.to_string())
            .collect();

        match result {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => {
                let fields = err.as_fields().unwrap();
                let mut keys: Vec<String> = fields.keys().map(str::to_owned).collect();
                keys.sort_by_key(|k| k.parse::<usize>().unwrap_or(usize::MAX));
                prop_assert_eq!(keys, expected);
            }
        }
    }

    #[test]
    fn map_validation_is_idempotent(entries in prop::collection::btree_map("[a-c]", "[a-z]{0,6}", 0..4)) {
        let entries: BTreeMap<String, String> = entries;
        let rule = rules![map([
            key("a", rules![required(), length(2, 4)]),
            key("b", rules![length(0, 3)]).optional(),
        ])];
        prop_assert_eq!(validate(&entries, &rule), validate(&entries, &rule));
    }
}

// ============================================================================
// THRESHOLDS
// ============================================================================

proptest! {
    #[test]
    fn min_max_agree_with_comparison(n in any::<i64>(), lo in -100i64..0, hi in 0i64..100) {
        let result = validate(&n, &rules![min(lo), max(hi)]);
        prop_assert_eq!(result.is_ok(), n == 0 || (lo..=hi).contains(&n));
    }

    #[test]
    fn multiple_of_matches_remainder(n in any::<i64>(), base in 1i64..50) {
        let result = validate(&n, &rules![multiple_of(base)]);
        prop_assert_eq!(result.is_ok(), n % base == 0);
    }
}

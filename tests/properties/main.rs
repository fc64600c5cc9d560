//! Property tests for search field weighting.

use std::collections::BTreeMap;

use proptest::prelude::*;

use appsearch::params::MAX_WEIGHT;
use appsearch::test_utils::fixtures::{match_request, provider_with_aliases};

const FIELDS: &[&str] = &["name", "sku", "description", "color", "*"];

fn clause_strategy() -> impl Strategy<Value = (&'static str, Option<f64>)> {
    (
        prop::sample::select(FIELDS),
        prop::option::of(-20.0f64..20.0f64),
    )
}

/// Reference model: skip wildcard and non-positive boosts, cap at the
/// maximum weight, keep the last clause per field.
fn expected_weights(clauses: &[(&'static str, Option<f64>)]) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    for (field, boost) in clauses {
        match boost {
            Some(boost) if *field != "*" && *boost > 0.0 => {
                out.insert((*field).to_string(), boost.min(MAX_WEIGHT));
            }
            _ => {}
        }
    }
    out
}

proptest! {
    #[test]
    fn test_weights_match_reference_model(
        clauses in prop::collection::vec(clause_strategy(), 0..12)
    ) {
        let provider = provider_with_aliases(&[]);
        let params = provider.search_fields(&match_request("shoes", &clauses)).unwrap();
        let actual: BTreeMap<String, f64> = params
            .search_fields
            .into_iter()
            .map(|(field, entry)| (field, entry.weight))
            .collect();
        prop_assert_eq!(actual, expected_weights(&clauses));
    }

    #[test]
    fn test_weights_in_range_and_wildcard_absent(
        clauses in prop::collection::vec(clause_strategy(), 0..12)
    ) {
        let provider = provider_with_aliases(&[]);
        let params = provider.search_fields(&match_request("shoes", &clauses)).unwrap();
        prop_assert!(!params.search_fields.contains_key("*"));
        for entry in params.search_fields.values() {
            prop_assert!(entry.weight > 0.0 && entry.weight <= MAX_WEIGHT);
        }
    }

    #[test]
    fn test_falsy_text_always_empty(
        text in prop::sample::select(vec!["", "0"]),
        clauses in prop::collection::vec(clause_strategy(), 0..12)
    ) {
        let provider = provider_with_aliases(&[]);
        let params = provider.search_fields(&match_request(text, &clauses)).unwrap();
        prop_assert!(params.is_empty());
    }

    #[test]
    fn test_repeated_calls_identical(
        clauses in prop::collection::vec(clause_strategy(), 0..12)
    ) {
        let provider = provider_with_aliases(&[]);
        let request = match_request("shoes", &clauses);
        let first = provider.search_fields(&request).unwrap();
        let second = provider.search_fields(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_last_write_wins(first in 0.001f64..50.0, second in 0.001f64..50.0) {
        let provider = provider_with_aliases(&[("title", "name")]);
        let request = match_request("shoes", &[("name", Some(first)), ("title", Some(second))]);
        let params = provider.search_fields(&request).unwrap();
        prop_assert_eq!(params.len(), 1);
        prop_assert_eq!(params.weight("name"), Some(second.min(MAX_WEIGHT)));
    }
}

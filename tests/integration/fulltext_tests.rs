use std::path::PathBuf;
use std::sync::Arc;

use appsearch::app::AppContext;
use appsearch::config::Config;
use appsearch::params::{FulltextParamsProvider, MAX_WEIGHT, SearchParamsProvider};
use appsearch::request::{MatchQueryLocator, SearchRequest};
use appsearch::schema::{ConfigAttributeProvider, DefaultFieldNameResolver};
use appsearch::test_utils::fixtures::{NoQueryLocator, match_request, provider_with_aliases};
use appsearch::test_utils::logging::capture_events;
use appsearch::test_utils::{TestCase, run_table_tests};
use appsearch::AppSearchError;

fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

fn catalog_context() -> AppContext {
    let raw = std::fs::read_to_string(fixture("configs/catalog.toml")).expect("read config");
    let config = Config::from_toml(&raw).expect("parse config");
    AppContext::from_config(config)
}

type Clauses = Vec<(&'static str, Option<f64>)>;

#[test]
fn documented_scenarios() -> Result<(), String> {
    let provider = provider_with_aliases(&[("name", "product_name")]);
    let cases: Vec<TestCase<(&str, Clauses), Vec<(String, f64)>>> = vec![
        TestCase {
            name: "boosted field with wildcard",
            input: ("shoes", vec![("name", Some(3.0)), ("*", Some(1.0))]),
            expected: vec![("product_name".to_string(), 3.0)],
        },
        TestCase {
            name: "empty query text",
            input: ("", vec![("name", Some(3.0))]),
            expected: vec![],
        },
        TestCase {
            name: "boost above the cap",
            input: ("x", vec![("sku", Some(15.0))]),
            expected: vec![("sku".to_string(), 10.0)],
        },
        TestCase {
            name: "no boost key",
            input: ("x", vec![("sku", None)]),
            expected: vec![],
        },
    ];

    run_table_tests(cases, |(text, clauses)| {
        let params = provider
            .search_fields(&match_request(text, clauses))
            .expect("search fields");
        params
            .search_fields
            .into_iter()
            .map(|(field, entry)| (field, entry.weight))
            .collect()
    })
}

#[test]
fn no_query_gives_empty_params() {
    let provider = FulltextParamsProvider::new(
        Arc::new(NoQueryLocator),
        Arc::new(ConfigAttributeProvider::new(true)),
        Arc::new(DefaultFieldNameResolver::new()),
    );
    let request = match_request("shoes", &[("name", Some(3.0))]);
    assert!(provider.search_fields(&request).unwrap().is_empty());
    assert!(provider.params(&request).unwrap().is_empty());
}

#[test]
fn request_document_end_to_end() {
    let ctx = catalog_context();
    let raw = std::fs::read_to_string(fixture("requests/quick_search.json")).unwrap();
    let request = SearchRequest::from_json(&raw).unwrap();
    let params = ctx.fulltext_provider().search_fields(&request).unwrap();

    assert_eq!(params.len(), 2);
    assert_eq!(params.weight("product_name"), Some(3.0));
    assert_eq!(params.weight("sku"), Some(MAX_WEIGHT));
    assert_eq!(params.weight("description"), None);
    assert_eq!(params.weight("*"), None);
}

#[test]
fn serialized_params_snapshot() {
    let ctx = catalog_context();
    let raw = std::fs::read_to_string(fixture("requests/quick_search.json")).unwrap();
    let request = SearchRequest::from_json(&raw).unwrap();
    let params = ctx.params_provider().params(&request).unwrap();
    let rendered = serde_json::to_string_pretty(&params).unwrap();

    insta::assert_snapshot!(rendered, @r#"
    {
      "search_fields": {
        "product_name": {
          "weight": 3.0
        },
        "sku": {
          "weight": 10.0
        }
      }
    }
    "#);
}

#[test]
fn non_numeric_boost_fails_fast() {
    let raw = std::fs::read_to_string(fixture("requests/bad_boost.json")).unwrap();
    let err = SearchRequest::from_json(&raw).unwrap_err();
    assert!(matches!(err, AppSearchError::Serialization(_)));
    assert!(err.to_string().contains("not numeric"));
}

#[test]
fn strict_schema_errors_propagate() {
    let provider = FulltextParamsProvider::new(
        Arc::new(MatchQueryLocator::new()),
        Arc::new(ConfigAttributeProvider::new(true)),
        Arc::new(DefaultFieldNameResolver::new()),
    );
    let request = match_request("shoes", &[("*", Some(2.0)), ("material", Some(2.0))]);
    let err = provider.search_fields(&request).unwrap_err();
    assert!(
        matches!(err, AppSearchError::UnresolvableField { ref field, .. } if field == "material")
    );
}

#[test]
fn lenient_schema_warns_about_unknown_attributes() {
    let provider = provider_with_aliases(&[]);
    let request = match_request("shoes", &[("material", Some(2.0))]);
    let (params, events) = capture_events(|| provider.search_fields(&request).unwrap());

    assert_eq!(params.weight("material"), Some(2.0));
    let warning = events
        .iter()
        .find(|event| event.level == tracing::Level::WARN)
        .expect("unknown attribute warning");
    assert_eq!(warning.field("code"), Some("material"));
}

#[test]
fn repeated_calls_are_identical() {
    let ctx = catalog_context();
    let raw = std::fs::read_to_string(fixture("requests/quick_search.json")).unwrap();
    let request = SearchRequest::from_json(&raw).unwrap();
    let provider = ctx.fulltext_provider();
    assert_eq!(
        provider.search_fields(&request).unwrap(),
        provider.search_fields(&request).unwrap()
    );
}

#[test]
fn provider_is_shareable_across_threads() {
    let provider = Arc::new(provider_with_aliases(&[("name", "product_name")]));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let provider = Arc::clone(&provider);
            std::thread::spawn(move || {
                let boost = f64::from(i) + 1.0;
                let request = match_request("shoes", &[("name", Some(boost))]);
                provider.search_fields(&request).unwrap().weight("product_name")
            })
        })
        .collect();
    let weights: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(weights, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
}

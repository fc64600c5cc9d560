//! Search API parameter providers.
//!
//! Each provider contributes one part of the App Search request body.
//! [`CompositeParamsProvider`] runs several of them and merges the parts.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::request::SearchRequest;

pub mod fulltext;

pub use fulltext::{FieldWeight, FulltextParamsProvider, MAX_WEIGHT, SearchFieldParams};

/// Builds part of the search API request body from a platform request.
pub trait SearchParamsProvider: Send + Sync {
    fn params(&self, request: &SearchRequest) -> Result<Map<String, Value>>;
}

/// Runs providers in order and deep-merges their output.
///
/// Nested objects are merged key by key; any other value from a later
/// provider replaces the earlier one. The first provider error aborts the
/// whole build.
#[derive(Default)]
pub struct CompositeParamsProvider {
    providers: Vec<Box<dyn SearchParamsProvider>>,
}

impl CompositeParamsProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_provider(mut self, provider: Box<dyn SearchParamsProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl SearchParamsProvider for CompositeParamsProvider {
    fn params(&self, request: &SearchRequest) -> Result<Map<String, Value>> {
        let mut merged = Map::new();
        for provider in &self.providers {
            merge_into(&mut merged, provider.params(request)?);
        }
        Ok(merged)
    }
}

fn merge_into(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(incoming) => {
                if let Some(Value::Object(existing)) = target.get_mut(&key) {
                    merge_into(existing, incoming);
                } else {
                    target.insert(key, Value::Object(incoming));
                }
            }
            value => {
                target.insert(key, value);
            }
        }
    }
}

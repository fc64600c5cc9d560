//! Full-text `search_fields` parameters.
//!
//! Turns the boosted match clauses of a request's full-text query into
//! weighted App Search search fields.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::request::{QueryLocator, SearchRequest};
use crate::schema::{AttributeProvider, FieldContext, FieldNameResolver};

use super::SearchParamsProvider;

/// Highest weight App Search accepts for a search field.
pub const MAX_WEIGHT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    pub weight: f64,
}

/// Weighted fields, keyed by index field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFieldParams {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub search_fields: BTreeMap<String, FieldWeight>,
}

impl SearchFieldParams {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.search_fields.len()
    }

    #[must_use]
    pub fn weight(&self, field: &str) -> Option<f64> {
        self.search_fields.get(field).map(|entry| entry.weight)
    }
}

pub struct FulltextParamsProvider {
    locator: Arc<dyn QueryLocator>,
    attributes: Arc<dyn AttributeProvider>,
    field_names: Arc<dyn FieldNameResolver>,
}

impl FulltextParamsProvider {
    #[must_use]
    pub fn new(
        locator: Arc<dyn QueryLocator>,
        attributes: Arc<dyn AttributeProvider>,
        field_names: Arc<dyn FieldNameResolver>,
    ) -> Self {
        Self {
            locator,
            attributes,
            field_names,
        }
    }

    /// Weighted search fields for `request`.
    ///
    /// Requests without full-text query or with an empty query text give
    /// empty params. Wildcard clauses and clauses without a positive boost are
    /// skipped; when several clauses resolve to the same field, the last one
    /// wins.
    pub fn search_fields(&self, request: &SearchRequest) -> Result<SearchFieldParams> {
        let mut params = SearchFieldParams::default();

        let Some(query) = self.locator.query(request).filter(|query| query.has_text()) else {
            tracing::debug!(request = %request.name, "no query text, no search fields");
            return Ok(params);
        };

        for clause in &query.matches {
            if clause.is_wildcard() {
                tracing::trace!("skipping wildcard match");
                continue;
            }
            let Some(boost) = clause.positive_boost() else {
                tracing::trace!(field = %clause.field, "skipping match without positive boost");
                continue;
            };

            let field = self.search_field_name(&clause.field)?;
            let weight = clamp_weight(boost.value());
            params.search_fields.insert(field, FieldWeight { weight });
        }

        tracing::debug!(
            request = %request.name,
            fields = params.len(),
            "built search fields"
        );
        Ok(params)
    }

    fn search_field_name(&self, code: &str) -> Result<String> {
        let attribute = self.attributes.attribute(code)?;
        self.field_names.field_name(&attribute, FieldContext::Search)
    }
}

impl SearchParamsProvider for FulltextParamsProvider {
    fn params(&self, request: &SearchRequest) -> Result<Map<String, Value>> {
        match serde_json::to_value(self.search_fields(request)?)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

/// Cap a positive boost at [`MAX_WEIGHT`].
fn clamp_weight(boost: f64) -> f64 {
    boost.min(MAX_WEIGHT)
}

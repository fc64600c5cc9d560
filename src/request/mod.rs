//! Platform search request model.
//!
//! A [`SearchRequest`] carries a tree of [`QueryNode`]s. Full-text matching
//! lives in [`MatchQuery`] nodes, whose [`MatchClause`]s name the fields to
//! search and an optional [`Boost`]. Boost values are validated here, at the
//! request boundary, so everything downstream works with real numbers.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppSearchError, Result};

pub mod locator;

pub use locator::{MatchQueryLocator, QueryLocator};

/// Field sentinel meaning "match any field".
pub const WILDCARD_FIELD: &str = "*";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Request name (e.g. `quick_search_container`)
    #[serde(default)]
    pub name: String,
    /// Root of the query tree
    pub query: QueryNode,
}

impl SearchRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, query: QueryNode) -> Self {
        Self {
            name: name.into(),
            query,
        }
    }

    /// Parse a request from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryNode {
    Bool(BoolQuery),
    Match(MatchQuery),
    Filter(FilterQuery),
}

impl QueryNode {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bool(query) => &query.name,
            Self::Match(query) => &query.name,
            Self::Filter(query) => &query.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub must: Vec<QueryNode>,
    #[serde(default)]
    pub should: Vec<QueryNode>,
    #[serde(default)]
    pub must_not: Vec<QueryNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Box<QueryNode>>,
}

/// Full-text query: the searched text and the fields it is matched against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub matches: Vec<MatchClause>,
}

impl MatchQuery {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            value: value.into(),
            matches: Vec::new(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_clause(mut self, clause: MatchClause) -> Self {
        self.matches.push(clause);
        self
    }

    /// Whether there is any text to search for.
    ///
    /// `""` and `"0"` both count as no text.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !matches!(self.value.as_str(), "" | "0")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchClause {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost: Option<Boost>,
}

impl MatchClause {
    #[must_use]
    pub fn boosted(field: impl Into<String>, boost: Boost) -> Self {
        Self {
            field: field.into(),
            boost: Some(boost),
        }
    }

    #[must_use]
    pub fn unboosted(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            boost: None,
        }
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.field == WILDCARD_FIELD
    }

    /// The boost, when present and strictly positive.
    #[must_use]
    pub fn positive_boost(&self) -> Option<Boost> {
        self.boost.filter(|boost| boost.is_positive())
    }
}

/// Relative importance of a matched field.
///
/// Any real number is accepted, including zero and negatives. NaN is
/// rejected, and text must spell a finite decimal number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Boost(f64);

impl Boost {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(AppSearchError::MalformedClause(
                "boost is not a number".to_string(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl FromStr for Boost {
    type Err = AppSearchError;

    fn from_str(raw: &str) -> Result<Self> {
        let value = raw.trim().parse::<f64>().map_err(|err| {
            AppSearchError::MalformedClause(format!("boost '{raw}' is not numeric: {err}"))
        })?;
        if !value.is_finite() {
            return Err(AppSearchError::MalformedClause(format!(
                "boost '{raw}' is not numeric"
            )));
        }
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Boost {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawBoost {
            Number(f64),
            Text(String),
        }

        let parsed = match RawBoost::deserialize(deserializer)? {
            RawBoost::Number(value) => Self::new(value),
            RawBoost::Text(raw) => raw.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

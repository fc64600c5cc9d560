//! Locating the full-text query inside a request tree.

use super::{MatchQuery, QueryNode, SearchRequest};

/// Finds the full-text query of a search request.
pub trait QueryLocator: Send + Sync {
    /// The match query carrying the searched text, if the request has one.
    fn query<'a>(&self, request: &'a SearchRequest) -> Option<&'a MatchQuery>;
}

/// Depth-first locator returning the first match query of the tree.
///
/// `must` clauses are visited before `should` clauses, and a filter's inner
/// query is descended into. `must_not` branches are excluded text, never the
/// searched text, so they are skipped.
#[derive(Debug, Clone, Default)]
pub struct MatchQueryLocator {
    query_name: Option<String>,
}

impl MatchQueryLocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { query_name: None }
    }

    /// Only accept match queries with this name.
    #[must_use]
    pub fn with_query_name(name: impl Into<String>) -> Self {
        Self {
            query_name: Some(name.into()),
        }
    }

    fn accepts(&self, query: &MatchQuery) -> bool {
        self.query_name
            .as_deref()
            .is_none_or(|name| query.name == name)
    }

    fn find<'a>(&self, node: &'a QueryNode) -> Option<&'a MatchQuery> {
        match node {
            QueryNode::Match(query) => self.accepts(query).then_some(query),
            QueryNode::Bool(query) => query
                .must
                .iter()
                .chain(&query.should)
                .find_map(|child| self.find(child)),
            QueryNode::Filter(query) => query.query.as_deref().and_then(|inner| self.find(inner)),
        }
    }
}

impl QueryLocator for MatchQueryLocator {
    fn query<'a>(&self, request: &'a SearchRequest) -> Option<&'a MatchQuery> {
        let found = self.find(&request.query);
        if found.is_none() {
            tracing::debug!(request = %request.name, "no full-text query in request");
        }
        found
    }
}

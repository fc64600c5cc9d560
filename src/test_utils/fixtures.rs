//! In-memory collaborators and request builders for tests.

use std::sync::Arc;

use crate::error::{AppSearchError, Result};
use crate::params::FulltextParamsProvider;
use crate::request::{
    Boost, MatchClause, MatchQuery, MatchQueryLocator, QueryLocator, QueryNode, SearchRequest,
};
use crate::schema::{
    AttributeAdapter, ConfigAttributeProvider, DefaultFieldNameResolver, FieldContext,
    FieldNameResolver,
};

/// Locator that never finds a full-text query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQueryLocator;

impl QueryLocator for NoQueryLocator {
    fn query<'a>(&self, _request: &'a SearchRequest) -> Option<&'a MatchQuery> {
        None
    }
}

/// Resolver that fails for every attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingResolver;

impl FieldNameResolver for FailingResolver {
    fn field_name(&self, attribute: &AttributeAdapter, _context: FieldContext) -> Result<String> {
        Err(AppSearchError::unresolvable(
            attribute.code.clone(),
            "resolver unavailable",
        ))
    }
}

/// Full-text provider over the default collaborators, in lenient mode, with
/// the given `(code, index field)` aliases.
#[must_use]
pub fn provider_with_aliases(aliases: &[(&str, &str)]) -> FulltextParamsProvider {
    let resolver = aliases
        .iter()
        .fold(DefaultFieldNameResolver::new(), |resolver, (code, name)| {
            resolver.with_alias(*code, *name)
        });
    FulltextParamsProvider::new(
        Arc::new(MatchQueryLocator::new()),
        Arc::new(ConfigAttributeProvider::new(false)),
        Arc::new(resolver),
    )
}

/// Request whose query tree is a single match query over `clauses`.
///
/// Each clause is `(field, boost)`; a `None` boost leaves the clause unboosted.
///
/// # Panics
///
/// Panics when a boost is NaN.
#[must_use]
pub fn match_request(text: &str, clauses: &[(&str, Option<f64>)]) -> SearchRequest {
    let query = clauses
        .iter()
        .fold(MatchQuery::new(text).named("search"), |query, (field, boost)| {
            let clause = match boost {
                Some(boost) => MatchClause::boosted(
                    *field,
                    Boost::new(*boost).expect("fixture boost must not be NaN"),
                ),
                None => MatchClause::unboosted(*field),
            };
            query.with_clause(clause)
        });
    SearchRequest::new("quick_search_container", QueryNode::Match(query))
}

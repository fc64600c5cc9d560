//! appsearch - App Search request parameters from platform search requests.
//!
//! The centre of the crate is [`params::FulltextParamsProvider`], which turns
//! the boosted match clauses of a request's full-text query into the weighted
//! `search_fields` parameter of the App Search search API. Its collaborators
//! (query location, attribute lookup, field-name resolution) are traits with
//! default implementations driven by [`config::Config`].

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod params;
pub mod request;
pub mod schema;
pub mod test_utils;

pub use error::{AppSearchError, Result};

//! Integration tests for the appsearch library.

mod config_tests;
mod fulltext_tests;

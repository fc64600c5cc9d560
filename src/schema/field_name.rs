//! Attribute code to index field name resolution.

use std::collections::HashMap;

use crate::config::FieldNamesConfig;
use crate::error::{AppSearchError, Result};

use super::{AttributeAdapter, FieldContext};

const FILTER_SUFFIX: &str = "_filter";
const SORT_SUFFIX: &str = "_sort";

/// Resolves the index field name of an attribute for a given usage.
pub trait FieldNameResolver: Send + Sync {
    fn field_name(&self, attribute: &AttributeAdapter, context: FieldContext) -> Result<String>;
}

/// Alias table followed by App Search name normalization.
///
/// App Search field names only contain lowercase ASCII letters, digits and
/// underscores, and may not start with an underscore. Option-backed
/// attributes are filtered on a dedicated `_filter` field and text
/// attributes are sorted on a dedicated `_sort` field.
#[derive(Debug, Clone, Default)]
pub struct DefaultFieldNameResolver {
    aliases: HashMap<String, String>,
}

impl DefaultFieldNameResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &FieldNamesConfig) -> Self {
        Self {
            aliases: config
                .aliases
                .iter()
                .map(|(code, name)| (code.clone(), name.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.aliases.insert(code.into(), name.into());
        self
    }

    fn base_name(&self, code: &str) -> Result<String> {
        let source = self.aliases.get(code).map_or(code, String::as_str);
        let normalized = normalize_field_name(source);
        if normalized.is_empty() {
            return Err(AppSearchError::unresolvable(
                code,
                "no valid characters for an index field name",
            ));
        }
        Ok(normalized)
    }
}

impl FieldNameResolver for DefaultFieldNameResolver {
    fn field_name(&self, attribute: &AttributeAdapter, context: FieldContext) -> Result<String> {
        let base = self.base_name(&attribute.code)?;
        let name = match context {
            FieldContext::Filter if attribute.uses_options => format!("{base}{FILTER_SUFFIX}"),
            FieldContext::Sort if attribute.is_text() => format!("{base}{SORT_SUFFIX}"),
            _ => base,
        };
        tracing::trace!(code = %attribute.code, %context, field = %name, "resolved field name");
        Ok(name)
    }
}

/// Map a name onto the App Search field-name alphabet.
#[must_use]
pub fn normalize_field_name(raw: &str) -> String {
    let mapped: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    mapped.trim_start_matches('_').to_string()
}

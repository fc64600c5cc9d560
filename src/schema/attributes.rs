//! Attribute descriptor lookup.

use std::collections::HashMap;

use crate::config::SchemaConfig;
use crate::error::{AppSearchError, Result};

use super::AttributeAdapter;

/// Looks up the descriptor of an attribute by its code.
pub trait AttributeProvider: Send + Sync {
    fn attribute(&self, code: &str) -> Result<AttributeAdapter>;
}

/// Attribute provider backed by the `[schema]` configuration section.
///
/// In lenient mode an unknown code is described as a plain text attribute,
/// so searches on ad-hoc fields keep working. Strict mode reports it.
#[derive(Debug, Clone, Default)]
pub struct ConfigAttributeProvider {
    attributes: HashMap<String, AttributeAdapter>,
    strict: bool,
}

impl ConfigAttributeProvider {
    #[must_use]
    pub fn new(strict: bool) -> Self {
        Self {
            attributes: HashMap::new(),
            strict,
        }
    }

    #[must_use]
    pub fn from_config(config: &SchemaConfig) -> Self {
        let attributes = config
            .attributes
            .iter()
            .map(|(code, attribute)| {
                let adapter = AttributeAdapter {
                    code: code.clone(),
                    field_type: attribute.field_type,
                    uses_options: attribute.uses_options,
                };
                (code.clone(), adapter)
            })
            .collect();
        Self {
            attributes,
            strict: config.strict,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeAdapter) -> Self {
        self.attributes.insert(attribute.code.clone(), attribute);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeProvider for ConfigAttributeProvider {
    fn attribute(&self, code: &str) -> Result<AttributeAdapter> {
        if code.trim().is_empty() {
            return Err(AppSearchError::unresolvable(code, "empty attribute code"));
        }
        if let Some(attribute) = self.attributes.get(code) {
            return Ok(attribute.clone());
        }
        if self.strict {
            return Err(AppSearchError::unresolvable(code, "unknown attribute"));
        }
        tracing::warn!(code, "attribute not in schema, treating it as text");
        Ok(AttributeAdapter::text(code))
    }
}

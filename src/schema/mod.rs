//! Index schema: attribute descriptors and field-name resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppSearchError;

pub mod attributes;
pub mod field_name;

pub use attributes::{AttributeProvider, ConfigAttributeProvider};
pub use field_name::{DefaultFieldNameResolver, FieldNameResolver};

/// App Search schema field types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
    Geolocation,
}

/// Descriptor of a catalog attribute, as consumed by field-name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeAdapter {
    /// Attribute code (e.g. `name`, `sku`, `color`)
    pub code: String,
    pub field_type: FieldType,
    /// Values are option ids (select / multiselect attributes)
    pub uses_options: bool,
}

impl AttributeAdapter {
    /// Plain text attribute, used for codes without schema metadata.
    #[must_use]
    pub fn text(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            field_type: FieldType::Text,
            uses_options: false,
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.field_type == FieldType::Text
    }
}

/// Usage a field name is resolved for. The same attribute may map to a
/// different index field depending on whether it is searched, filtered or
/// sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldContext {
    Search,
    Filter,
    Sort,
}

impl FieldContext {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Filter => "filter",
            Self::Sort => "sort",
        }
    }
}

impl fmt::Display for FieldContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldContext {
    type Err = AppSearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "search" => Ok(Self::Search),
            "filter" => Ok(Self::Filter),
            "sort" => Ok(Self::Sort),
            _ => Err(AppSearchError::Config(format!(
                "invalid field context {value} (expected search|filter|sort)"
            ))),
        }
    }
}

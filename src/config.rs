use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppSearchError, Result};
use crate::schema::FieldType;

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "appsearch.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub field_names: FieldNamesConfig,
    #[serde(default)]
    pub locator: LocatorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path (argument or `APPSEARCH_CONFIG`) replaces discovery;
    /// otherwise the global file and then `<root>/appsearch.toml` are merged
    /// onto the defaults. Environment overrides are applied last.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("APPSEARCH_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Parse a complete configuration document.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| AppSearchError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| AppSearchError::MissingConfig("config directory not found".to_string()))?
            .join("appsearch/config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| AppSearchError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| AppSearchError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config layer");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.schema {
            self.schema.merge(patch);
        }
        if let Some(patch) = patch.field_names {
            self.field_names.merge(patch);
        }
        if let Some(patch) = patch.locator {
            self.locator.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_bool("APPSEARCH_SCHEMA_STRICT")? {
            self.schema.strict = value;
        }
        if let Some(aliases) = env_pairs("APPSEARCH_FIELD_ALIASES")? {
            self.field_names.aliases.extend(aliases);
        }
        if let Some(value) = env_string("APPSEARCH_LOCATOR_QUERY_NAME") {
            self.locator.query_name = Some(value).filter(|name| !name.is_empty());
        }
        if let Some(value) = env_bool("APPSEARCH_OUTPUT_PRETTY")? {
            self.output.pretty = value;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Reject attribute codes that are not listed in `attributes`
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeConfig>,
}

impl SchemaConfig {
    fn merge(&mut self, patch: SchemaPatch) {
        if let Some(value) = patch.strict {
            self.strict = value;
        }
        if let Some(attributes) = patch.attributes {
            self.attributes.extend(attributes);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConfig {
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub uses_options: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldNamesConfig {
    /// Attribute code -> index field name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl FieldNamesConfig {
    fn merge(&mut self, patch: FieldNamesPatch) {
        if let Some(aliases) = patch.aliases {
            self.aliases.extend(aliases);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Only match queries with this name carry the searched text
    #[serde(default)]
    pub query_name: Option<String>,
}

impl LocatorConfig {
    fn merge(&mut self, patch: LocatorPatch) {
        if let Some(value) = patch.query_name {
            self.query_name = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

const fn default_pretty() -> bool {
    true
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.pretty {
            self.pretty = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub schema: Option<SchemaPatch>,
    pub field_names: Option<FieldNamesPatch>,
    pub locator: Option<LocatorPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SchemaPatch {
    pub strict: Option<bool>,
    pub attributes: Option<BTreeMap<String, AttributeConfig>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FieldNamesPatch {
    pub aliases: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LocatorPatch {
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub pretty: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(value) => parse_bool(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppSearchError::Config(format!(
            "invalid {key} value {value} (expected true or false)"
        ))),
    }
}

fn env_pairs(key: &str) -> Result<Option<Vec<(String, String)>>> {
    match std::env::var(key) {
        Ok(value) => parse_pairs(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

/// Parse `code=name,code=name` lists.
fn parse_pairs(key: &str, value: &str) -> Result<Vec<(String, String)>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (code, name) = entry
                .split_once('=')
                .map(|(code, name)| (code.trim(), name.trim()))
                .filter(|(code, name)| !code.is_empty() && !name.is_empty())
                .ok_or_else(|| {
                    AppSearchError::Config(format!(
                        "invalid {key} entry {entry} (expected code=name)"
                    ))
                })?;
            Ok((code.to_string(), name.to_string()))
        })
        .collect()
}

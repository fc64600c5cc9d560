use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::params::{CompositeParamsProvider, FulltextParamsProvider};
use crate::request::{MatchQueryLocator, QueryLocator};
use crate::schema::{
    AttributeProvider, ConfigAttributeProvider, DefaultFieldNameResolver, FieldNameResolver,
};

/// Configuration plus the collaborators wired from it.
pub struct AppContext {
    pub config: Config,
    pub robot_mode: bool,
    pub locator: Arc<dyn QueryLocator>,
    pub attributes: Arc<dyn AttributeProvider>,
    pub field_names: Arc<dyn FieldNameResolver>,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let config = Config::load(cli.config.as_deref(), &root)?;
        let mut ctx = Self::from_config(config);
        ctx.robot_mode = cli.robot;
        Ok(ctx)
    }

    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let locator: Arc<dyn QueryLocator> = match &config.locator.query_name {
            Some(name) => Arc::new(MatchQueryLocator::with_query_name(name.clone())),
            None => Arc::new(MatchQueryLocator::new()),
        };
        let attributes = Arc::new(ConfigAttributeProvider::from_config(&config.schema));
        let field_names = Arc::new(DefaultFieldNameResolver::from_config(&config.field_names));
        tracing::debug!(
            attributes = attributes.len(),
            aliases = config.field_names.aliases.len(),
            strict = config.schema.strict,
            "wired search collaborators"
        );

        Self {
            config,
            robot_mode: false,
            locator,
            attributes,
            field_names,
        }
    }

    #[must_use]
    pub fn fulltext_provider(&self) -> FulltextParamsProvider {
        FulltextParamsProvider::new(
            Arc::clone(&self.locator),
            Arc::clone(&self.attributes),
            Arc::clone(&self.field_names),
        )
    }

    /// Every parameter provider this build knows about, merged.
    #[must_use]
    pub fn params_provider(&self) -> CompositeParamsProvider {
        CompositeParamsProvider::new().with_provider(Box::new(self.fulltext_provider()))
    }
}

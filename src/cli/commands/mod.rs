//! CLI command implementations
//!
//! Each subcommand has its own module with an Args struct and a `run()`
//! function.

use clap::Subcommand;

pub mod params;
pub mod resolve;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Params(args) => params::run(ctx, args),
        Commands::Resolve(args) => resolve::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build search API parameters from a search request JSON document
    Params(params::ParamsArgs),

    /// Resolve the index field name of an attribute
    Resolve(resolve::ResolveArgs),
}

//! appsearch params - Build search API parameters for a request

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{AppSearchError, Result};
use crate::params::SearchParamsProvider;
use crate::request::SearchRequest;

#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// Request JSON file (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Single-line output
    #[arg(long)]
    pub compact: bool,
}

pub fn run(ctx: &AppContext, args: &ParamsArgs) -> Result<()> {
    let raw = read_input(args.input.as_ref())?;
    let request = SearchRequest::from_json(&raw)?;
    let params = ctx.params_provider().params(&request)?;

    let pretty = ctx.config.output.pretty && !args.compact && !ctx.robot_mode;
    emit_json(&Value::Object(params), pretty)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path).map_err(|err| {
            AppSearchError::Config(format!("read request {}: {err}", path.display()))
        }),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

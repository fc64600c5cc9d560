use serde::Serialize;

use crate::error::Result;

/// Print `value` as JSON on stdout.
pub fn emit_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

/// JSON document printed on stdout when a command fails in robot mode.
#[derive(Debug, Serialize)]
pub struct RobotError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

impl RobotError {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: true,
            code: code.into(),
            message: message.into(),
        }
    }
}

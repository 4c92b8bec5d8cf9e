//! Output formatting for CLI results.

use anyhow::Result;
use serde::Serialize;

/// Prints `value` to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

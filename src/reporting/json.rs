// src/reporting/json.rs
use crate::error::Result;
use crate::present::Scene;

/// Prints the scene as pretty JSON for an external plotter.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(scene: &Scene) -> Result<()> {
    println!("{}", to_json(scene)?);
    Ok(())
}

/// # Errors
/// Returns error if serialization fails.
pub fn to_json(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}

//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod draw;
pub mod global;
pub mod inspect;
pub mod position;

/// Formats a sampled value's components for display.
pub(crate) fn format_components(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{:.6}", v)).collect();
    parts.join(" ")
}

//! Output formatting for resolved subnets.
//!
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{escape_csv_field, render_csv, CSV_HEADER};
pub use json::render_json;
pub use terminal::{format_field, render_text};

use crate::processing::Resolution;
use clap::ValueEnum;
use std::error::Error;

/// Output format for resolved subnets.
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Csv,
    Json,
}

/// Render resolutions in the chosen format.
pub fn render(resolutions: &[Resolution], format: Format) -> Result<String, Box<dyn Error>> {
    Ok(match format {
        Format::Text => render_text(resolutions),
        Format::Csv => render_csv(resolutions),
        Format::Json => render_json(resolutions)?,
    })
}

//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::{dotted_mask, SubnetInfo};
use crate::processing::Resolution;
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn write_info(out: &mut String, info: &SubnetInfo) -> std::fmt::Result {
    let netmask = dotted_mask(info.mask).unwrap_or_else(|_| "None".to_string());
    let broadcast = info
        .cidr()
        .map(|c| c.broadcast().to_string())
        .unwrap_or_else(|_| "None".to_string());

    writeln!(out, "  {:<12} {}/{}", "network:".bold(), info.network, info.mask)?;
    writeln!(out, "  {:<12} {}", "netmask:".bold(), netmask)?;
    writeln!(out, "  {:<12} {}", "first host:".bold(), info.first_host)?;
    writeln!(out, "  {:<12} {}", "second host:".bold(), info.second_host)?;
    writeln!(out, "  {:<12} {}", "broadcast:".bold(), broadcast)
}

/// Human readable block per resolution.
pub fn render_text(resolutions: &[Resolution]) -> String {
    let mut out = String::new();
    for r in resolutions {
        let written = match &r.result {
            Ok(info) => writeln!(out, "{}", r.input.as_str().on_blue())
                .and_then(|_| write_info(&mut out, info)),
            Err(e) => writeln!(out, "{} {e}", "invalid".on_red()),
        };
        if written.is_err() {
            log::error!("Error formatting {}", r.input);
        }
    }
    out
}

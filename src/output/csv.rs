//! CSV output formatting for resolved subnets.

use crate::models::dotted_mask;
use crate::processing::Resolution;

use super::terminal::format_field;

/// Header row matching [`render_csv`] columns.
pub const CSV_HEADER: &str =
    r#" "cnt",           "cidr",        "network",     "first_host",    "second_host", "mask",         "netmask", "status""#;

/// Double any `"` so the field survives being quoted.
pub fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}

/// One CSV row per resolution, header first. Failed inputs keep their row
/// with `None` addresses.
pub fn render_csv(resolutions: &[Resolution]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for (i, r) in resolutions.iter().enumerate() {
        let (network, first, second, mask, netmask, status) = match &r.result {
            Ok(info) => (
                info.network.clone(),
                info.first_host.clone(),
                info.second_host.clone(),
                info.mask.to_string(),
                dotted_mask(info.mask).unwrap_or_else(|_| "None".to_string()),
                "ok",
            ),
            Err(_) => (
                "None".to_string(),
                "None".to_string(),
                "None".to_string(),
                "None".to_string(),
                "None".to_string(),
                "invalid",
            ),
        };
        lines.push(format!(
            "{cnt},{cidr},{network},{first},{second},{mask},{netmask},{status}",
            cnt = format_field(i + 1, 6),
            cidr = format_field(escape_csv_field(&r.input), 20),
            network = format_field(network, 17),
            first = format_field(first, 17),
            second = format_field(second, 17),
            mask = format_field(mask, 6),
            netmask = format_field(netmask, 17),
            status = format_field(status, 9),
        ));
    }
    lines.join("\n")
}

//! JSON output.

use crate::models::SubnetInfo;
use crate::processing::Resolution;

/// Pretty JSON: one object for a single input, an array otherwise.
/// Failed inputs are `null`.
pub fn render_json(resolutions: &[Resolution]) -> Result<String, serde_json::Error> {
    let infos: Vec<Option<&SubnetInfo>> = resolutions
        .iter()
        .map(|r| r.result.as_ref().ok())
        .collect();
    match infos.as_slice() {
        [single] => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(&infos),
    }
}

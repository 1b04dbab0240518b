//! Resolving many CIDR strings in one go.

use crate::error::ResolveError;
use crate::models::SubnetInfo;
use crate::resolver::{resolve_with_mode, Mode};

/// One input line and what became of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The CIDR string as given.
    pub input: String,
    /// The resolved subnet, or why there is none.
    pub result: Result<SubnetInfo, ResolveError>,
}

impl Resolution {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Resolve every input independently. A bad input never stops the batch.
pub fn resolve_all<S: AsRef<str>>(inputs: &[S], mode: Mode) -> Vec<Resolution> {
    log::info!("#Start resolve_all() {} input(s) mode={mode}", inputs.len());

    let resolutions: Vec<Resolution> = inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let result = resolve_with_mode(input, mode);
            if let Err(e) = &result {
                log::warn!("Skipping {input:?}: {e}");
            }
            Resolution {
                input: input.to_string(),
                result,
            }
        })
        .collect();

    let failed = resolutions.iter().filter(|r| !r.is_ok()).count();
    log::info!(
        "# Resolved {} of {} input(s), {failed} failed",
        resolutions.len() - failed,
        resolutions.len()
    );
    resolutions
}

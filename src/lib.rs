//! IPv4 CIDR resolver.
//!
//! Given `A.B.C.D/N`, derives the network address and the first two host
//! addresses that follow it. See [`resolve`].
//!
//! Around the resolver sit the pieces the command line tool needs:
//! - [`models`] - address primitives and result types
//! - [`processing`] - batch resolution and topology link addressing
//! - [`input`] / [`output`] - files in, text/CSV/JSON out
//! - [`config`] - environment and flag handling

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;
pub mod resolver;

use std::error::Error;

pub use error::{ParseError, ResolveError};
pub use models::SubnetInfo;
pub use resolver::{parse_cidr, resolve, resolve_strict, resolve_with_mode, Mode};

use config::Config;
use processing::{assign_link_addresses, resolve_all, LinkReport};

/// CIDR strings from the command line followed by those in `input_file`.
pub fn collect_inputs(
    cidrs: &[String],
    input_file: Option<&str>,
) -> Result<Vec<String>, Box<dyn Error>> {
    let mut inputs: Vec<String> = cidrs.to_vec();
    if let Some(path) = input_file {
        inputs.extend(input::read_cidr_list(path)?);
    }
    if inputs.is_empty() {
        return Err("No CIDR given, pass one as an argument or use --input".into());
    }
    Ok(inputs)
}

/// Resolve `inputs` and render them. The flag is true when every input resolved.
pub fn resolve_inputs(
    inputs: &[String],
    config: &Config,
) -> Result<(String, bool), Box<dyn Error>> {
    let resolutions = resolve_all(inputs, config.mode);
    let all_ok = resolutions.iter().all(|r| r.is_ok());
    let rendered = output::render(&resolutions, config.format)?;
    Ok((rendered, all_ok))
}

/// Read a topology, address its links and write it to `out` (stdout if `None`).
pub fn link_topology(
    topology_file: &str,
    mode: Mode,
    overwrite: bool,
    out: Option<&str>,
) -> Result<LinkReport, Box<dyn Error>> {
    let mut topology = input::read_topology(topology_file)?;
    let report = assign_link_addresses(&mut topology, mode, overwrite);
    input::write_topology(&topology, out)?;
    Ok(report)
}

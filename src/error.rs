//! Error types for CIDR resolution.
//!
//! [`ParseError`] is the only failure a caller of [`crate::resolve`] sees.
//! [`ResolveError`] adds the strict-mode rejection on top of it.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Input did not match `A.B.C.D/N` with every component in range.
///
/// The reason text is diagnostic only; all parse failures are the same kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid CIDR {input:?}: {reason}")]
pub struct ParseError {
    input: String,
    reason: String,
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, reason: impl Into<String>) -> ParseError {
        ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The rejected input, as given by the caller.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Failure of [`crate::resolve_with_mode`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Strict mode only: a host address wrapped past 255.255.255.255 or
    /// left the subnet.
    #[error("host {host_offset} of {cidr} is outside the subnet")]
    HostOutsideSubnet {
        cidr: String,
        network: Ipv4Addr,
        host_offset: u32,
    },
}

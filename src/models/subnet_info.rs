//! Resolver output record.

use super::{Ipv4, ParseError};
use serde::{Deserialize, Serialize};

/// Key addresses of one subnet, as returned by [`crate::resolve`].
///
/// Serializes with the camelCase keys `network`, `firstHost`, `secondHost`
/// and `mask`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SubnetInfo {
    /// Network address, host bits zeroed.
    pub network: String,
    /// `network + 1`.
    pub first_host: String,
    /// `network + 2`.
    pub second_host: String,
    /// Prefix length, unchanged from the input.
    pub mask: u8,
}

impl SubnetInfo {
    /// The network in CIDR notation, e.g. `192.168.1.0/24`.
    pub fn cidr(&self) -> Result<Ipv4, ParseError> {
        Ipv4::new(&format!("{}/{}", self.network, self.mask))
    }
}

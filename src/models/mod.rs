//! Domain models for the CIDR resolver.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetInfo`] - resolved network and host addresses
//! - [`Topology`] and [`Connection`] - topology documents for link addressing

mod ipv4;
mod subnet_info;
mod topology;

pub use crate::error::ParseError;

// Re-export public types
pub use ipv4::{
    broadcast_addr, checked_host_offset, cut_addr, dotted_mask, get_cidr_mask, host_offset,
    to_dotted, Ipv4, MAX_LENGTH,
};
pub use subnet_info::SubnetInfo;
pub use topology::{Connection, OptionalField, Topology};

//! Subnet data processing logic.
//!
//! - [`batch`] - resolving lists of CIDR strings
//! - [`links`] - addressing topology links from their subnets

mod batch;
mod links;

// Re-export public functions
pub use batch::{resolve_all, Resolution};
pub use links::{assign_link_addresses, LinkReport};

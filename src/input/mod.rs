//! Reading resolver inputs from local files.
//!
//! - [`file`] - CIDR lists and topology JSON documents

mod file;

pub use file::{parse_cidr_list, read_cidr_list, read_topology, write_topology};

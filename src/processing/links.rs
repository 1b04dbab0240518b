//! Point-to-point link addressing.
//!
//! A connection with a `subnet` gets the first host on its `_from` end and
//! the second host on its `_to` end.

use crate::models::Topology;
use crate::resolver::{resolve_with_mode, Mode};
use serde::Serialize;

/// Counts from one [`assign_link_addresses`] pass.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkReport {
    /// Connections that had at least one address filled in.
    pub assigned: usize,
    /// Connections left alone because both ends already had addresses.
    pub skipped_existing: usize,
    /// Connections with no subnet.
    pub without_subnet: usize,
    /// Connections whose subnet did not resolve.
    pub invalid: usize,
}

fn is_blank(ip: Option<&str>) -> bool {
    ip.map_or(true, |s| s.trim().is_empty())
}

/// Fill `src_ip` and `dst_ip` of every connection that has a subnet.
///
/// Addresses already present are kept unless `overwrite` is set. A subnet
/// that fails to resolve is logged and counted, the connection is untouched.
pub fn assign_link_addresses(topology: &mut Topology, mode: Mode, overwrite: bool) -> LinkReport {
    log::info!(
        "#Start assign_link_addresses() {} connection(s) mode={mode} overwrite={overwrite}",
        topology.connections.len()
    );
    let mut report = LinkReport::default();

    for conn in topology.connections.iter_mut() {
        let Some(subnet) = conn.link_subnet().map(str::to_string) else {
            report.without_subnet += 1;
            continue;
        };

        let fill_src = overwrite || is_blank(conn.src_ip());
        let fill_dst = overwrite || is_blank(conn.dst_ip());
        if !fill_src && !fill_dst {
            log::debug!("Keeping existing addresses on {}", conn.key);
            report.skipped_existing += 1;
            continue;
        }

        match resolve_with_mode(&subnet, mode) {
            Ok(info) => {
                if fill_src {
                    conn.src_ip = Some(Some(info.first_host));
                }
                if fill_dst {
                    conn.dst_ip = Some(Some(info.second_host));
                }
                log::debug!(
                    "{key}: {from}={src:?} {to}={dst:?}",
                    key = conn.key,
                    from = conn.from_device,
                    src = conn.src_ip(),
                    to = conn.to_device,
                    dst = conn.dst_ip()
                );
                report.assigned += 1;
            }
            Err(e) => {
                log::warn!("Connection {}: {e}", conn.key);
                report.invalid += 1;
            }
        }
    }

    log::info!("# {report:?}");
    report
}

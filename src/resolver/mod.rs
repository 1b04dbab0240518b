//! CIDR Resolver.
//!
//! Turns `A.B.C.D/N` into the network address and the two addresses that
//! follow it. Every function here is pure; calls share no state.

mod mode;

pub use mode::Mode;

use crate::error::{ParseError, ResolveError};
use crate::models::{checked_host_offset, host_offset, to_dotted, Ipv4, SubnetInfo};

/// Parse and validate a CIDR string without resolving it.
pub fn parse_cidr(cidr: &str) -> Result<Ipv4, ParseError> {
    Ipv4::new(cidr)
}

/// Resolve a CIDR string to its network and first two host addresses.
///
/// Host addresses are `network + 1` and `network + 2` computed modulo 2^32,
/// so `255.255.255.255/32` yields hosts `0.0.0.0` and `0.0.0.1`.
///
/// # Examples
/// ```
/// let info = cidr_resolver::resolve("192.168.1.10/24").unwrap();
/// assert_eq!(info.network, "192.168.1.0");
/// assert_eq!(info.first_host, "192.168.1.1");
/// assert_eq!(info.second_host, "192.168.1.2");
/// assert_eq!(info.mask, 24);
///
/// assert!(cidr_resolver::resolve("10.0.0.0/33").is_err());
/// ```
pub fn resolve(cidr: &str) -> Result<SubnetInfo, ParseError> {
    let block = parse_cidr(cidr)?;
    let info = resolve_block(block);
    log::debug!("resolve({cidr}) -> {info:?}");
    Ok(info)
}

/// Resolve an already validated [`Ipv4`].
pub fn resolve_block(block: Ipv4) -> SubnetInfo {
    let network = block.network();
    SubnetInfo {
        network: to_dotted(u32::from(network)),
        first_host: to_dotted(u32::from(host_offset(network, 1))),
        second_host: to_dotted(u32::from(host_offset(network, 2))),
        mask: block.mask(),
    }
}

/// Resolve with an explicit overflow [`Mode`].
pub fn resolve_with_mode(cidr: &str, mode: Mode) -> Result<SubnetInfo, ResolveError> {
    let block = parse_cidr(cidr)?;
    if mode == Mode::Strict {
        let network = block.network();
        for offset in [1, 2] {
            if checked_host_offset(network, block.mask(), offset).is_none() {
                return Err(ResolveError::HostOutsideSubnet {
                    cidr: block.to_string(),
                    network,
                    host_offset: offset,
                });
            }
        }
    }
    let info = resolve_block(block);
    log::debug!("resolve_with_mode({cidr}, {mode}) -> {info:?}");
    Ok(info)
}

/// Shorthand for [`resolve_with_mode`] with [`Mode::Strict`].
pub fn resolve_strict(cidr: &str) -> Result<SubnetInfo, ResolveError> {
    resolve_with_mode(cidr, Mode::Strict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_LENGTH;
    use std::net::Ipv4Addr;

    fn check(cidr: &str, network: &str, first: &str, second: &str, mask: u8) {
        let info = resolve(cidr).unwrap_or_else(|e| panic!("{cidr}: {e}"));
        assert_eq!(info.network, network, "{cidr}");
        assert_eq!(info.first_host, first, "{cidr}");
        assert_eq!(info.second_host, second, "{cidr}");
        assert_eq!(info.mask, mask, "{cidr}");
    }

    const ADDRESSES: [&str; 8] = [
        "0.0.0.0",
        "0.0.0.1",
        "10.0.0.5",
        "127.255.255.255",
        "128.0.0.0",
        "192.168.1.10",
        "203.0.113.77",
        "255.255.255.255",
    ];

    #[test]
    fn test_typical() {
        check("192.168.1.10/24", "192.168.1.0", "192.168.1.1", "192.168.1.2", 24);
        check("10.18.126.200/20", "10.18.112.0", "10.18.112.1", "10.18.112.2", 20);
        check("172.16.5.4/12", "172.16.0.0", "172.16.0.1", "172.16.0.2", 12);
    }

    #[test]
    fn test_zero_prefix() {
        check("10.0.0.0/0", "0.0.0.0", "0.0.0.1", "0.0.0.2", 0);
        check("255.255.255.255/0", "0.0.0.0", "0.0.0.1", "0.0.0.2", 0);
    }

    #[test]
    fn test_full_prefix() {
        check("10.0.0.5/32", "10.0.0.5", "10.0.0.6", "10.0.0.7", 32);
    }

    #[test]
    fn test_wraparound() {
        check(
            "255.255.255.255/32",
            "255.255.255.255",
            "0.0.0.0",
            "0.0.0.1",
            32,
        );
        check("255.255.255.254/32", "255.255.255.254", "255.255.255.255", "0.0.0.0", 32);
    }

    #[test]
    fn test_invalid() {
        for cidr in ["192.168.1/24", "300.1.1.1/24", "10.0.0.0/33", "", "10.0.0.0"] {
            assert!(resolve(cidr).is_err(), "{cidr} should fail");
        }
    }

    #[test]
    fn test_mask_is_preserved() {
        for addr in ADDRESSES {
            for n in 0..=MAX_LENGTH {
                let info = resolve(&format!("{addr}/{n}")).unwrap();
                assert_eq!(info.mask, n);
            }
        }
    }

    #[test]
    fn test_network_is_aligned() {
        for addr in ADDRESSES {
            for n in 0..=MAX_LENGTH {
                let info = resolve(&format!("{addr}/{n}")).unwrap();
                let bits = u32::from(info.network.parse::<Ipv4Addr>().unwrap());
                let host_bits = u32::MAX.checked_shr(n as u32).unwrap_or(0);
                assert_eq!(bits & host_bits, 0, "{addr}/{n}");
            }
        }
    }

    #[test]
    fn test_network_is_idempotent() {
        for addr in ADDRESSES {
            for n in 0..=MAX_LENGTH {
                let once = resolve(&format!("{addr}/{n}")).unwrap();
                let twice = resolve(&format!("{}/{}", once.network, n)).unwrap();
                assert_eq!(once, twice, "{addr}/{n}");
            }
        }
    }

    #[test]
    fn test_wrapping_mode_matches_resolve() {
        for cidr in ["255.255.255.255/32", "10.0.0.5/32", "192.168.1.10/24"] {
            assert_eq!(
                resolve_with_mode(cidr, Mode::Wrapping).unwrap(),
                resolve(cidr).unwrap()
            );
        }
    }

    #[test]
    fn test_strict() {
        let info = resolve_strict("192.168.1.10/24").unwrap();
        assert_eq!(info.second_host, "192.168.1.2");
        assert!(resolve_strict("10.0.0.0/30").is_ok());
        assert!(resolve_strict("10.0.0.0/0").is_ok());

        assert!(matches!(
            resolve_strict("10.0.0.5/32"),
            Err(ResolveError::HostOutsideSubnet { host_offset: 1, .. })
        ));
        assert!(matches!(
            resolve_strict("10.0.0.0/31"),
            Err(ResolveError::HostOutsideSubnet { host_offset: 2, .. })
        ));
        assert!(matches!(
            resolve_strict("255.255.255.255/32"),
            Err(ResolveError::HostOutsideSubnet { .. })
        ));
        assert!(matches!(
            resolve_strict("300.1.1.1/24"),
            Err(ResolveError::Parse(_))
        ));
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                std::thread::spawn(move || {
                    let cidr = format!("10.{i}.3.4/16");
                    resolve(&cidr).unwrap()
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap().network, format!("10.{i}.0.0"));
        }
    }
}

//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for an address paired with a prefix length,
//! along with the bit-level helpers the resolver is built from.

use crate::error::ParseError;
use itertools::Itertools;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Four dot separated groups of one to three ASCII digits.
static OCTETS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_octets_regex() -> &'static Regex {
    OCTETS_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

/// Mask bits for a prefix length already known to be <= 32.
///
/// `u32::MAX << 32` overflows, so a zero prefix gets its own branch.
fn prefix_bits(len: u8) -> u32 {
    if len == 0 {
        0
    } else {
        u32::MAX << (MAX_LENGTH - len.min(MAX_LENGTH))
    }
}

fn check_len(len: u8) -> Result<u8, ParseError> {
    if len > MAX_LENGTH {
        Err(ParseError::new(
            format!("/{len}"),
            format!("prefix length {len} is above {MAX_LENGTH}"),
        ))
    } else {
        Ok(len)
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_resolver::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert!(get_cidr_mask(33).is_err());
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, ParseError> {
    Ok(prefix_bits(check_len(len)?))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, ParseError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, ParseError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from((u32::from(addr) & mask) | !mask))
}

/// `network + offset` modulo 2^32.
pub fn host_offset(network: Ipv4Addr, offset: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network).wrapping_add(offset))
}

/// `network + offset`, or `None` if the sum overflows 32 bits or passes
/// the broadcast address of the `/len` subnet.
pub fn checked_host_offset(network: Ipv4Addr, len: u8, offset: u32) -> Option<Ipv4Addr> {
    let host = u32::from(network).checked_add(offset)?;
    let hi = u32::from(broadcast_addr(network, len).ok()?);
    if host > hi {
        None
    } else {
        Some(Ipv4Addr::from(host))
    }
}

/// Render a u32 as four dot separated octets, most significant first.
pub fn to_dotted(bits: u32) -> String {
    [24u32, 16, 8, 0]
        .iter()
        .map(|shift| (bits >> shift) & 0xFF)
        .join(".")
}

/// Prefix length as a dotted netmask, e.g. `24` -> `255.255.255.0`.
pub fn dotted_mask(len: u8) -> Result<String, ParseError> {
    Ok(to_dotted(get_cidr_mask(len)?))
}

/// IPv4 address with CIDR notation support.
///
/// The address keeps whatever host bits it was given; [`Ipv4::network`]
/// masks them off.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Parse a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Surrounding whitespace is ignored. Anything else that is not
    /// `A.B.C.D/N` with octets in 0..=255 and N in 0..=32 is rejected.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, ParseError> {
        let cidr = addr_cidr.trim();
        let (addr_part, mask_part) = cidr
            .split_once('/')
            .ok_or_else(|| ParseError::new(addr_cidr, "missing '/' separator"))?;
        if mask_part.contains('/') {
            return Err(ParseError::new(addr_cidr, "more than one '/' separator"));
        }
        if addr_part.is_empty() || mask_part.is_empty() {
            return Err(ParseError::new(addr_cidr, "empty address or prefix length"));
        }

        let caps = get_octets_regex().captures(addr_part).ok_or_else(|| {
            ParseError::new(
                addr_cidr,
                format!("address {addr_part:?} is not four decimal octets"),
            )
        })?;
        let mut o = [0u32; 4];
        for (i, octet) in o.iter_mut().enumerate() {
            let value: u32 = caps[i + 1]
                .parse()
                .map_err(|_| ParseError::new(addr_cidr, "octet is not a number"))?;
            if value > 255 {
                return Err(ParseError::new(
                    addr_cidr,
                    format!("octet {value} is above 255"),
                ));
            }
            *octet = value;
        }
        let bits = (o[0] << 24) | (o[1] << 16) | (o[2] << 8) | o[3];

        if mask_part.len() > 2 || !mask_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::new(
                addr_cidr,
                format!("prefix length {mask_part:?} is not a number in 0..=32"),
            ));
        }
        let mask: u8 = mask_part
            .parse()
            .map_err(|_| ParseError::new(addr_cidr, "prefix length is not a number"))?;
        check_len(mask).map_err(|e| ParseError::new(addr_cidr, e.reason()))?;

        Ok(Ipv4 {
            addr: Ipv4Addr::from(bits),
            mask,
        })
    }

    /// Build from an already parsed address and prefix length.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, ParseError> {
        check_len(mask).map_err(|e| ParseError::new(format!("{addr}/{mask}"), e.reason()))?;
        Ok(Ipv4 { addr, mask })
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Subnet mask bits.
    pub fn netmask(&self) -> u32 {
        prefix_bits(self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network()) | !self.netmask())
    }
}

impl FromStr for Ipv4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Ipv4, ParseError> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

//! Host address overflow policy.

use std::fmt;
use std::str::FromStr;

/// What to do when `network + 1` or `network + 2` leaves the subnet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Add modulo 2^32 and report whatever comes out.
    #[default]
    Wrapping,
    /// Reject hosts that wrap or pass the broadcast address.
    Strict,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Mode, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapping" | "wrap" => Ok(Mode::Wrapping),
            "strict" => Ok(Mode::Strict),
            other => Err(format!(
                "unknown mode {other:?}, expected \"wrapping\" or \"strict\""
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Wrapping => write!(f, "wrapping"),
            Mode::Strict => write!(f, "strict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("strict".parse::<Mode>().unwrap(), Mode::Strict);
        assert_eq!(" Wrapping ".parse::<Mode>().unwrap(), Mode::Wrapping);
        assert_eq!("wrap".parse::<Mode>().unwrap(), Mode::Wrapping);
        assert!("lenient".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Wrapping);
        assert_eq!(Mode::Strict.to_string(), "strict");
    }
}

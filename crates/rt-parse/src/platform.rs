//! Platform dispatch for dialect parsers

use std::fmt;
use std::str::FromStr;

use vrf_rt_core::{Result, RtError, VrfTable};

use crate::ios::IosParser;
use crate::iosxr::IosXrParser;

/// Supported network platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Cisco IOS / IOS-XE: single-line route-target statements
    Ios,
    /// Cisco IOS-XR: block-delimited route-target statements
    IosXr,
}

impl Platform {
    /// Parse captured VRF configuration with this platform's dialect parser
    pub fn parse_rts(&self, text: &str) -> Result<VrfTable> {
        match self {
            Platform::Ios => IosParser::new().parse(text),
            Platform::IosXr => IosXrParser::new().parse(text),
        }
    }

    /// CLI command that captures the VRF configuration on this platform
    pub fn vrf_command(&self) -> &'static str {
        match self {
            Platform::Ios => "show running-config | section vrf definition",
            Platform::IosXr => "show running-config vrf",
        }
    }

    /// CLI command that captures the software version line
    pub fn version_command(&self) -> &'static str {
        "show version | include Software,"
    }
}

impl FromStr for Platform {
    type Err = RtError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "iosxr" => Ok(Platform::IosXr),
            _ => Err(RtError::UnsupportedPlatform {
                platform: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::IosXr => write!(f, "iosxr"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parsing_is_case_insensitive() {
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("IOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("IosXr".parse::<Platform>().unwrap(), Platform::IosXr);
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let err = "junos".parse::<Platform>().unwrap_err();
        assert!(matches!(
            err,
            RtError::UnsupportedPlatform { platform } if platform == "junos"
        ));
    }

    #[test]
    fn test_vrf_commands() {
        assert!(Platform::Ios.vrf_command().contains("section"));
        assert_eq!(Platform::IosXr.vrf_command(), "show running-config vrf");
    }
}

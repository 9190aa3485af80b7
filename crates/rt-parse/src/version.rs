//! Software version parser for `show version` output

use regex::Regex;

/// Extract the version ID from IOS-XE or IOS-XR `show version` output.
///
/// A single character class covers both platforms; only the version ID is
/// captured, not general platform facts. Returns `None` when no version
/// line is present.
pub fn parse_version(text: &str) -> Option<String> {
    let version_regex =
        Regex::new(r"Cisco\s+IOS\s+X[ER]\s+Software,\s+Version\s+(?P<version>\S+)").unwrap();
    version_regex
        .captures(text)
        .map(|caps| caps["version"].to_string())
}

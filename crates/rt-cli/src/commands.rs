//! Command implementations for rtdiff
//!
//! This is the glue layer: it reads captured device output and intent
//! documents from disk and feeds them to the pure core. The core itself
//! never touches the filesystem.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use vrf_rt_core::{intent_from_yaml, rt_diff};
use vrf_rt_parse::{parse_version, Platform};

/// Parse a captured running-config file and render the VRF table as JSON
pub fn parse_command(platform: &str, config: &Path) -> Result<String> {
    let platform: Platform = platform.parse()?;
    let text = fs::read_to_string(config)
        .with_context(|| format!("reading captured output {}", config.display()))?;

    log::info!("parsing {} as {}", config.display(), platform);
    let table = platform.parse_rts(&text)?;
    Ok(serde_json::to_string_pretty(&table)?)
}

/// Diff a captured running-config file against an intent document and
/// render the per-VRF changes as JSON
pub fn diff_command(
    platform: &str,
    intent: &Path,
    config: &Path,
    changes_only: bool,
) -> Result<String> {
    let platform: Platform = platform.parse()?;

    let config_text = fs::read_to_string(config)
        .with_context(|| format!("reading captured output {}", config.display()))?;
    let intent_text = fs::read_to_string(intent)
        .with_context(|| format!("reading intent document {}", intent.display()))?;

    let actual = platform.parse_rts(&config_text)?;
    let desired = intent_from_yaml(&intent_text)?;

    let mut diffs = rt_diff(&desired, &actual);
    if changes_only {
        diffs.retain(|d| !d.is_noop());
    }
    log::info!("{} VRF entries in diff output", diffs.len());
    Ok(serde_json::to_string_pretty(&diffs)?)
}

/// Extract the software version ID from a captured `show version` file
pub fn version_command(output: &Path) -> Result<String> {
    let text = fs::read_to_string(output)
        .with_context(|| format!("reading captured output {}", output.display()))?;

    match parse_version(&text) {
        Some(version) => Ok(version),
        None => bail!("no version line found in {}", output.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const IOS_CONFIG: &str = "\
vrf definition BLUE
 route-target import 100:1
 route-target export 100:2
";

    #[test]
    fn test_parse_command_renders_json() {
        let config = temp_file(IOS_CONFIG);
        let json = parse_command("ios", config.path()).unwrap();
        assert!(json.contains("\"BLUE\""));
        assert!(json.contains("100:1"));
        assert!(json.contains("100:2"));
    }

    #[test]
    fn test_parse_command_rejects_unknown_platform() {
        let config = temp_file(IOS_CONFIG);
        assert!(parse_command("junos", config.path()).is_err());
    }

    #[test]
    fn test_diff_command_changes_only() {
        let config = temp_file(IOS_CONFIG);
        let intent = temp_file(
            "\
vrfs:
  BLUE:
    route_import:
      - \"100:1\"
    route_export:
      - \"100:2\"
",
        );
        let json =
            diff_command("ios", intent.path(), config.path(), true).unwrap();
        // Device already matches intent, so the filtered diff is empty
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn test_version_command() {
        let output = temp_file("Cisco IOS XE Software, Version 16.09.02\n");
        assert_eq!(version_command(output.path()).unwrap(), "16.09.02");

        let junk = temp_file("nothing useful here\n");
        assert!(version_command(junk.path()).is_err());
    }
}

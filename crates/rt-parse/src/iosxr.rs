//! IOS-XR dialect parser (block-delimited route-target statements)
//!
//! IOS-XR groups route-targets inside delimited sub-blocks terminated by
//! a bare `!` line:
//!
//! ```text
//! vrf VPN1
//!  address-family ipv4 unicast
//!   import route-target
//!    65000:1
//!    65000:2
//!   !
//!   export route-target
//!    65000:1
//!   !
//! ```

use std::collections::BTreeSet;

use regex::Regex;

use vrf_rt_core::error::ParseError;
use vrf_rt_core::{Result, RouteTarget, VrfRecord, VrfTable};

use crate::segment::{split_vrf_blocks, stanza_snippet};

/// Parser for IOS-XR `vrf` stanzas
pub struct IosXrParser {
    name_regex: Regex,
    import_regex: Regex,
    export_regex: Regex,
}

impl IosXrParser {
    /// Create new parser with pre-compiled patterns
    pub fn new() -> Self {
        Self {
            // Anchored: the name line must open the stanza
            name_regex: Regex::new(r"^vrf\s+(?P<name>\S+)").unwrap(),
            import_regex: Regex::new(r"(?s)import\s+route-target(?P<body>.+?)!").unwrap(),
            export_regex: Regex::new(r"(?s)export\s+route-target(?P<body>.+?)!").unwrap(),
        }
    }

    /// Parse captured VRF configuration into a [`VrfTable`].
    ///
    /// The import and export sub-blocks are located independently; a
    /// stanza may carry one, both, or neither. A missing sub-block is an
    /// empty set, not an error.
    pub fn parse(&self, text: &str) -> Result<VrfTable> {
        let mut table = VrfTable::new();
        for block in split_vrf_blocks(text, "vrf") {
            let record = self.parse_block(&block)?;
            log::debug!(
                "parsed VRF {}: {} import, {} export",
                record.name,
                record.import_rts.len(),
                record.export_rts.len()
            );
            table.insert(record.name.clone(), record);
        }
        Ok(table)
    }

    fn parse_block(&self, block: &str) -> Result<VrfRecord> {
        let name = self
            .name_regex
            .captures(block)
            .map(|caps| caps["name"].to_string())
            .ok_or_else(|| ParseError::MissingVrfName {
                snippet: stanza_snippet(block),
            })?;

        let mut record = VrfRecord::new(name);
        if let Some(caps) = self.import_regex.captures(block) {
            collect_block_rts(&caps["body"], &mut record.import_rts);
        }
        if let Some(caps) = self.export_regex.captures(block) {
            collect_block_rts(&caps["body"], &mut record.export_rts);
        }
        Ok(record)
    }
}

impl Default for IosXrParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Admit every non-empty trimmed line of a sub-block interior through the
/// route-target validator; malformed lines drop silently.
fn collect_block_rts(body: &str, rts: &mut BTreeSet<RouteTarget>) {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Ok(rt) = line.parse::<RouteTarget>() {
            rts.insert(rt);
        }
    }
}

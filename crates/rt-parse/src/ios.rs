//! IOS-XE dialect parser (single-line route-target statements)
//!
//! IOS-XE declares route-targets one per line inside a `vrf definition`
//! stanza:
//!
//! ```text
//! vrf definition BLUE
//!  address-family ipv4
//!   route-target import 100:1
//!   route-target export 100:2
//! ```

use regex::Regex;

use vrf_rt_core::error::ParseError;
use vrf_rt_core::{Result, RouteTarget, VrfRecord, VrfTable};

use crate::segment::{split_vrf_blocks, stanza_snippet};

/// Parser for IOS-XE `vrf definition` stanzas
pub struct IosParser {
    name_regex: Regex,
    import_regex: Regex,
    export_regex: Regex,
}

impl IosParser {
    /// Create new parser with pre-compiled patterns
    pub fn new() -> Self {
        Self {
            name_regex: Regex::new(r"vrf\s+definition\s+(?P<name>\S+)").unwrap(),
            import_regex: Regex::new(r"route-target\s+import\s+(?P<rt>\d+:\d+)").unwrap(),
            export_regex: Regex::new(r"route-target\s+export\s+(?P<rt>\d+:\d+)").unwrap(),
        }
    }

    /// Parse captured VRF configuration into a [`VrfTable`].
    ///
    /// Route-target lines are collected by a find-all over the whole
    /// stanza, so unrelated interleaved lines are ignored. A stanza
    /// without a recognizable definition line fails the whole call.
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
        collect_rts(&self.import_regex, block, &mut record.import_rts);
        collect_rts(&self.export_regex, block, &mut record.export_rts);
        Ok(record)
    }
}

impl Default for IosParser {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_rts(
    pattern: &Regex,
    block: &str,
    rts: &mut std::collections::BTreeSet<RouteTarget>,
) {
    for caps in pattern.captures_iter(block) {
        // The capture group already matched \d+:\d+; anything that still
        // fails validation is dropped, never an error.
        if let Ok(rt) = caps["rt"].parse::<RouteTarget>() {
            rts.insert(rt);
        }
    }
}

//! Desired-state (intent) document model
//!
//! Intent documents describe the route-targets each VRF should carry,
//! independent of what is currently deployed. The caller reads the file;
//! this module only turns its text into a [`VrfTable`].

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{RouteTarget, VrfRecord, VrfTable};
use crate::Result;

/// Root of a desired-state YAML document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDoc {
    /// Desired VRFs keyed by name
    pub vrfs: IndexMap<String, IntentVrf>,
}

/// Desired route-target sets for one VRF
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentVrf {
    /// Route-targets the VRF must import
    #[serde(default)]
    pub route_import: BTreeSet<RouteTarget>,
    /// Route-targets the VRF must export
    #[serde(default)]
    pub route_export: BTreeSet<RouteTarget>,
}

/// Deserialize a desired-state YAML document into a [`VrfTable`].
///
/// Unlike scraped CLI output, intent is authored data: a malformed
/// route-target literal fails the whole load instead of being dropped.
pub fn intent_from_yaml(text: &str) -> Result<VrfTable> {
    let doc: IntentDoc = serde_yaml::from_str(text)?;

    Ok(doc
        .vrfs
        .into_iter()
        .map(|(name, vrf)| {
            let record = VrfRecord {
                name: name.clone(),
                import_rts: vrf.route_import,
                export_rts: vrf.route_export,
            };
            (name, record)
        })
        .collect())
}

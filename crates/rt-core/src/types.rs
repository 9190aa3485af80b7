//! Core route-target types and data structures

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Regex for valid route-target literals (`ASN:NN`)
pub const ROUTE_TARGET_REGEX: &str = r"^\d+:\d+$";

/// A BGP/MPLS VPN route-target tag in `ASN:NN` form
///
/// Immutable once constructed; equality and ordering follow the string
/// form, so `65000:100` and `65000:100` are the same tag regardless of
/// which device or intent file they came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteTarget(String);

impl RouteTarget {
    /// Check whether a string is a well-formed `ASN:NN` literal
    pub fn is_valid(s: &str) -> bool {
        let rt_regex = Regex::new(ROUTE_TARGET_REGEX).unwrap();
        rt_regex.is_match(s)
    }

    /// Borrow the literal string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RouteTarget {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(RouteTarget(s.to_string()))
        } else {
            Err(ParseError::InvalidRouteTarget {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<String> for RouteTarget {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RouteTarget> for String {
    fn from(rt: RouteTarget) -> Self {
        rt.0
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Route-target configuration of a single VRF
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrfRecord {
    /// VRF name as configured on the device
    pub name: String,
    /// Imported route-targets
    #[serde(rename = "route_import", default)]
    pub import_rts: BTreeSet<RouteTarget>,
    /// Exported route-targets
    #[serde(rename = "route_export", default)]
    pub export_rts: BTreeSet<RouteTarget>,
}

impl VrfRecord {
    /// Create an empty record for a named VRF
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_rts: BTreeSet::new(),
            export_rts: BTreeSet::new(),
        }
    }
}

/// Parsed or intended VRF state, keyed by VRF name
///
/// Each name appears exactly once; insertion order follows the device
/// output (or intent document) so re-rendering stays recognizable.
pub type VrfTable = IndexMap<String, VrfRecord>;

/// Per-VRF route-target changes needed to move actual state to desired state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtDiff {
    /// Name of the VRF this entry applies to
    pub vrf_name: String,
    /// Imports to configure
    pub import_add: BTreeSet<RouteTarget>,
    /// Imports present on the device but absent from intent
    pub import_remove: BTreeSet<RouteTarget>,
    /// Exports to configure
    pub export_add: BTreeSet<RouteTarget>,
    /// Exports present on the device but absent from intent
    pub export_remove: BTreeSet<RouteTarget>,
}

impl RtDiff {
    /// True when the VRF needs no changes in either direction
    pub fn is_noop(&self) -> bool {
        self.import_add.is_empty()
            && self.import_remove.is_empty()
            && self.export_add.is_empty()
            && self.export_remove.is_empty()
    }
}

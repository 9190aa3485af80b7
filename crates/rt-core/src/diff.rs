//! Route-target diff engine
//!
//! Pure set comparison between desired (intent) and actual (parsed) VRF
//! state. The output drives downstream configuration templating.

use std::collections::BTreeSet;

use crate::types::{RtDiff, RouteTarget, VrfTable};

/// Compute per-VRF route-target changes between desired and actual state.
///
/// Produces one entry per VRF present in either table, sorted by VRF name
/// for reproducible output. A VRF missing from `actual` turns entirely
/// into additions; a VRF missing from `desired` turns entirely into
/// removal candidates (drift cleanup). Per direction:
/// `add = desired - actual`, `remove = actual - desired`.
pub fn rt_diff(desired: &VrfTable, actual: &VrfTable) -> Vec<RtDiff> {
    log::debug!(
        "diffing {} desired VRFs against {} actual VRFs",
        desired.len(),
        actual.len()
    );

    let mut names: BTreeSet<&str> = desired.keys().map(String::as_str).collect();
    names.extend(actual.keys().map(String::as_str));

    names
        .into_iter()
        .map(|name| {
            let wanted = desired.get(name);
            let present = actual.get(name);

            let (import_add, import_remove) = diff_direction(
                wanted.map(|v| &v.import_rts),
                present.map(|v| &v.import_rts),
            );
            let (export_add, export_remove) = diff_direction(
                wanted.map(|v| &v.export_rts),
                present.map(|v| &v.export_rts),
            );

            RtDiff {
                vrf_name: name.to_string(),
                import_add,
                import_remove,
                export_add,
                export_remove,
            }
        })
        .collect()
}

fn diff_direction(
    desired: Option<&BTreeSet<RouteTarget>>,
    actual: Option<&BTreeSet<RouteTarget>>,
) -> (BTreeSet<RouteTarget>, BTreeSet<RouteTarget>) {
    let empty = BTreeSet::new();
    let desired = desired.unwrap_or(&empty);
    let actual = actual.unwrap_or(&empty);

    let add = desired.difference(actual).cloned().collect();
    let remove = actual.difference(desired).cloned().collect();
    (add, remove)
}

//! End-to-end pipeline tests: captured output -> parse -> diff

use vrf_rt_core::{intent_from_yaml, rt_diff};

use crate::platform::Platform;

const IOS_RUNNING_CONFIG: &str = "\
vrf definition VPN1
 description first customer vpn
 !
 address-family ipv4
  route-target export 65000:1
  route-target import 65000:1
  route-target import 65000:999
 exit-address-family
!
vrf definition VPN2
 !
 address-family ipv4
  route-target export 65000:2
  route-target import 65000:2
 exit-address-family
!
";

const IOSXR_RUNNING_CONFIG: &str = "\
vrf VPN1
 address-family ipv4 unicast
  import route-target
   65000:1
   65000:999
  !
  export route-target
   65000:1
  !
 !
!
vrf VPN2
 address-family ipv4 unicast
  import route-target
   65000:2
  !
  export route-target
   65000:2
  !
 !
!
";

const INTENT: &str = "\
vrfs:
  VPN1:
    route_import:
      - \"65000:1\"
      - \"65000:1001\"
    route_export:
      - \"65000:1\"
  VPN2:
    route_import:
      - \"65000:2\"
    route_export:
      - \"65000:2\"
";

#[test]
fn test_ios_capture_to_diff() {
    let platform: Platform = "ios".parse().unwrap();
    let actual = platform.parse_rts(IOS_RUNNING_CONFIG).unwrap();
    assert_eq!(actual.len(), 2);

    let desired = intent_from_yaml(INTENT).unwrap();
    let diffs = rt_diff(&desired, &actual);
    assert_eq!(diffs.len(), 2);

    // VPN1 drifted: one import to add, one stale import to remove
    let vpn1 = &diffs[0];
    assert_eq!(vpn1.vrf_name, "VPN1");
    assert_eq!(vpn1.import_add.len(), 1);
    assert!(vpn1.import_add.contains(&"65000:1001".parse().unwrap()));
    assert!(vpn1.import_remove.contains(&"65000:999".parse().unwrap()));
    assert!(vpn1.export_add.is_empty());
    assert!(vpn1.export_remove.is_empty());

    // VPN2 already matches intent
    assert!(diffs[1].is_noop());
}

#[test]
fn test_iosxr_capture_to_diff_matches_ios_semantics() {
    let ios = Platform::Ios.parse_rts(IOS_RUNNING_CONFIG).unwrap();
    let iosxr = Platform::IosXr.parse_rts(IOSXR_RUNNING_CONFIG).unwrap();

    // Both dialects describe the same RT state, so the normalized
    // tables agree apart from the dialect they came from.
    assert_eq!(ios, iosxr);

    let desired = intent_from_yaml(INTENT).unwrap();
    assert_eq!(rt_diff(&desired, &ios), rt_diff(&desired, &iosxr));
}

#[test]
fn test_vrf_missing_from_device_is_all_additions() {
    let desired = intent_from_yaml(INTENT).unwrap();
    let actual = Platform::Ios
        .parse_rts("vrf definition VPN1\n route-target import 65000:1\n")
        .unwrap();

    let diffs = rt_diff(&desired, &actual);
    let vpn2 = diffs.iter().find(|d| d.vrf_name == "VPN2").unwrap();
    assert_eq!(vpn2.import_add.len(), 1);
    assert_eq!(vpn2.export_add.len(), 1);
    assert!(vpn2.import_remove.is_empty());
    assert!(vpn2.export_remove.is_empty());
}

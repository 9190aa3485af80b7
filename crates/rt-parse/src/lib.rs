//! VRF Route-Target Parse
//!
//! Vendor-dialect parsing of captured CLI output into structured
//! route-target state

pub mod ios;
pub mod iosxr;
pub mod platform;
pub mod segment;
pub mod version;

#[cfg(test)]
mod tests;

pub use ios::IosParser;
pub use iosxr::IosXrParser;
pub use platform::Platform;
pub use segment::split_vrf_blocks;
pub use version::parse_version;

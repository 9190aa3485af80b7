//! VRF Route-Target Core
//!
//! Core types, intent model and diff engine for VRF route-target state

pub mod diff;
pub mod error;
pub mod intent;
pub mod types;

pub use diff::rt_diff;
pub use error::{ParseError, RtError};
pub use intent::intent_from_yaml;
pub use types::*;

/// Result type for route-target operations
pub type Result<T> = std::result::Result<T, RtError>;

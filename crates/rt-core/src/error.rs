//! Error types for route-target operations

use thiserror::Error;

/// Main error type for route-target operations
#[derive(Debug, Error)]
pub enum RtError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("Intent document error: {0}")]
    Intent(#[from] serde_yaml::Error),
}

/// Errors raised while parsing VRF stanzas or route-target literals
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("VRF stanza has no name line: {snippet}")]
    MissingVrfName { snippet: String },

    #[error("Invalid route-target literal: {value}")]
    InvalidRouteTarget { value: String },
}

//! Error types for region management.
//!
//! Out-of-range geometry is clamped and never reported here. These variants
//! cover caller contract violations and configuration loading.

use crate::region::RegionId;
use thiserror::Error;

/// Errors that can occur while managing regions
#[derive(Error, Debug)]
pub enum RegionError {
    /// The region is not part of the collection
    #[error("Unknown region: {0}")]
    UnknownRegion(RegionId),

    /// The menu can only be placed against a host bound
    #[error("Region {0} has no host bound")]
    Unbounded(RegionId),

    /// A menu action was triggered while the menu was not attached
    #[error("Menu is not attached to any region")]
    NoMenuTarget,

    /// Invalid settings value
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for region operations
pub type RegionResult<T> = Result<T, RegionError>;

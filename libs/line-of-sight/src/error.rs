//! # Error Types
//!
//! Errors raised by a sweep. A ray that hits nothing is a normal outcome and
//! never surfaces here.
//!
//! ## Error Policy
//!
//! - Degenerate configuration fails fast instead of producing NaN geometry
//! - No retries: every ray query runs exactly once as scheduled

use config::ConfigError;
use sight_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while sweeping or presenting a field of view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SightError {
    /// The configuration cannot drive a sweep.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The assembled mesh failed validation.
    #[error("Mesh assembly failed: {0}")]
    Mesh(#[from] MeshError),

    /// A tick arrived before the host activated the node.
    #[error("line-of-sight node is inactive; the host must call activate() first")]
    Inactive,
}

/// Result alias for sweep operations.
pub type SightResult<T> = Result<T, SightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: SightError = ConfigError::NonPositiveResolution(0.0).into();
        assert!(err.to_string().contains("resolution must be positive"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SightError>();
    }
}

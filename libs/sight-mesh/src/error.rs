//! # Mesh Errors
//!
//! Error types for mesh validation.

use thiserror::Error;

/// Errors reported by [`Mesh::validate`](crate::Mesh::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Not enough vertices to form a single triangle.
    #[error("Too few vertices: {count} (need at least {min})")]
    TooFewVertices { count: usize, min: usize },

    /// A triangle references a vertex that does not exist.
    #[error("Triangle {triangle} references vertex {index} but the mesh has {vertex_count}")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

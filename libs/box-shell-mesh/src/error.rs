//! # Mesh Errors
//!
//! Error types for box meshing. Only the outer surface reports errors:
//! user-supplied geometry and resolution, and index writes rejected by a
//! sink. Defects inside the construction algorithm are assertions.

use thiserror::Error;

/// Errors that can occur while preparing or storing a box mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Box extents are not positive finite numbers
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// Fewer nodes than the minimum were requested along an axis
    #[error("Invalid resolution: axis {axis} has {nodes} nodes (min: {min})")]
    InvalidResolution { axis: char, nodes: u32, min: u32 },

    /// Boundary node count does not fit the node index space
    #[error("Too many nodes: {count} (max: {max})")]
    TooManyNodes { count: u128, max: u64 },

    /// Node write outside the declared node range
    #[error("Node index {index} out of range (count: {count})")]
    NodeIndexOutOfRange { index: u32, count: u32 },

    /// Quad write outside the declared quad range
    #[error("Quad index {index} out of range (count: {count})")]
    QuadIndexOutOfRange { index: u32, count: u32 },

    /// Quad connectivity is malformed
    #[error("Invalid quad {index}: {message}")]
    InvalidQuad { index: u32, message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid quad error.
    pub fn invalid_quad(index: u32, message: impl Into<String>) -> Self {
        Self::InvalidQuad {
            index,
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::InvalidResolution {
            axis: 'y',
            nodes: 1,
            min: 2,
        };
        assert!(err.to_string().contains("axis y"));
        assert!(err.to_string().contains("min: 2"));

        let err = MeshError::invalid_quad(7, "duplicate node 3");
        assert_eq!(err.to_string(), "Invalid quad 7: duplicate node 3");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}

//! # Error Types
//!
//! Error types for kernel operations.
//!
//! ## Error Policy
//!
//! - Invalid inputs (too few path or profile points, empty profile lists)
//!   abort the operation with an explicit error and no partial mesh.
//! - Epsilon-scale degeneracies produced during clipping (zero-area
//!   fragments, coincident reflection points) are dropped silently; they
//!   are expected behavior, not failures.
//! - Every operation is side-effect-free on failure, so callers may retry
//!   with adjusted inputs.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during kernel operations.
///
/// ## Example
///
/// ```rust
/// use solid_kernel::{build_sweep, KernelError, SweepOptions};
///
/// let too_short = [glam::DVec3::ZERO];
/// match build_sweep(&too_short, &[], &SweepOptions::default()) {
///     Ok(mesh) => println!("built {} vertices", mesh.vertex_count()),
///     Err(KernelError::InvalidInput { message }) => eprintln!("bad input: {message}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum KernelError {
    /// The caller supplied input the kernel cannot operate on.
    ///
    /// Raised for paths with fewer than two points, profiles with fewer
    /// than two points, or an empty profile list.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the offending input
        message: String,
    },

    /// Input collapsed to zero measure and no meaningful result exists.
    ///
    /// Raised when an entire profile or path has no extent (all points
    /// coincident), as opposed to epsilon-scale slivers which are
    /// silently dropped.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the degenerate input
        message: String,
    },
}

impl KernelError {
    /// Shorthand constructor for [`KernelError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Shorthand constructor for [`KernelError::DegenerateGeometry`].
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let input_err = KernelError::invalid_input("path needs at least 2 points");
        assert!(input_err.to_string().contains("Invalid input"));
        assert!(input_err.to_string().contains("2 points"));

        let degen_err = KernelError::degenerate("profile has zero length");
        assert!(degen_err.to_string().contains("Degenerate geometry"));
    }

    /// Test error types are Send + Sync for async compatibility.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KernelError>();
    }
}

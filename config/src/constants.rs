//! # Configuration Constants
//!
//! Centralized constants for the solid-modeling kernel. All geometric
//! tolerances, tessellation defaults, and input limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default sweep/profile tessellation parameters
//! - **Limits**: Minimum input sizes accepted by kernel operations

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon band for plane-side classification.
///
/// A vertex whose signed distance to a splitting plane is within this band
/// is considered coplanar; otherwise it is in front of or behind the plane.
/// Polygons with vertices on both sides are spanning and get cut.
///
/// # Example
///
/// ```rust
/// use config::constants::PLANE_EPSILON;
///
/// fn classify(signed_distance: f64) -> i32 {
///     if signed_distance < -PLANE_EPSILON {
///         -1 // back
///     } else if signed_distance > PLANE_EPSILON {
///         1 // front
///     } else {
///         0 // coplanar
///     }
/// }
///
/// assert_eq!(classify(1e-6), 0);
/// assert_eq!(classify(1e-3), 1);
/// ```
pub const PLANE_EPSILON: f64 = 1e-5;

/// Squared-length threshold below which a direction is treated as zero.
///
/// Used by the rotation-minimizing frame propagation: when a reflection
/// denominator (a squared segment length) falls below this value the
/// reflection is skipped and the previous normal is carried forward.
/// Also guards Gram-Schmidt orthogonalization against near-parallel axes.
pub const FRAME_EPSILON: f64 = 1e-12;

/// Cutoff for degenerate geometry (zero-area polygons, zero-length edges).
///
/// Geometry smaller than this is silently dropped rather than surfaced as
/// an error; such slivers are expected at epsilon scale after clipping.
pub const DEGENERATE_EPSILON: f64 = 1e-10;

/// Threshold on `|dot(tangent, up)|` above which the world-up heuristic
/// switches to the world-X axis when seeding the first frame.
pub const NEAR_PARALLEL_THRESHOLD: f64 = 0.999;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of segments along a swept path.
///
/// A sweep emits `DEFAULT_SWEEP_STEPS + 1` rings unless the caller
/// overrides the step count.
pub const DEFAULT_SWEEP_STEPS: usize = 32;

/// Default number of samples per resampled profile ring.
///
/// Every input profile is resampled to this vertex count so that profiles
/// of different resolutions can be interpolated point-for-point.
pub const DEFAULT_PROFILE_SAMPLES: usize = 32;

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Minimum number of points in a guide path.
pub const MIN_PATH_POINTS: usize = 2;

/// Minimum number of points in a sweep profile.
pub const MIN_PROFILE_POINTS: usize = 2;

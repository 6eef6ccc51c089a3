//! # Config Crate
//!
//! Centralized configuration constants for the solid-modeling kernel.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PLANE_EPSILON, DEFAULT_SWEEP_STEPS};
//!
//! // Use PLANE_EPSILON for plane-side classification
//! let distance: f64 = 0.000001; // 1e-6, inside the coplanar band (1e-5)
//! let is_coplanar = distance.abs() < PLANE_EPSILON;
//! assert!(is_coplanar);
//!
//! // Use resolution defaults for sweeps
//! let steps_override = 0;
//! let steps = if steps_override > 0 { steps_override } else { DEFAULT_SWEEP_STEPS };
//! assert_eq!(steps, DEFAULT_SWEEP_STEPS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

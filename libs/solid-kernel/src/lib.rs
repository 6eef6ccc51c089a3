//! # Solid-Kernel
//!
//! Solid-modeling kernel for a browser CAD pipeline: CSG boolean operations
//! on triangle meshes via BSP trees, and swept solids built by transporting
//! 2D profiles along a 3D guide curve with rotation-minimizing frames.
//!
//! ## Boolean Path
//!
//! ```text
//! Mesh + Transform → Solid → union/subtract/intersect → Mesh
//! ```
//!
//! ## Sweep Path
//!
//! ```text
//! path points + Profiles → GuideCurve → Frames → rings → Mesh
//! ```
//!
//! ## Example
//!
//! ```rust
//! use solid_kernel::{build_cube, subtract, Solid, Transform};
//!
//! let cube = build_cube([2.0, 2.0, 2.0], true);
//! let hole = build_cube([1.0, 1.0, 4.0], true);
//!
//! let a = Solid::from_mesh(&cube, &Transform::IDENTITY);
//! let b = Solid::from_mesh(&hole, &Transform::IDENTITY);
//!
//! let result = subtract(&a, &b).to_mesh();
//! assert!(!result.is_empty());
//! ```
//!
//! The kernel is synchronous and single-threaded: every call runs to
//! completion on the calling thread, builds its own intermediate state, and
//! never mutates caller-owned inputs. Concurrent calls on independent inputs
//! are safe without locking.

pub mod csg;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod sweep;

pub use csg::{intersect, subtract, union, Plane, Polygon, Solid, Vertex};
pub use error::{KernelError, KernelResult};
pub use mesh::{Mesh, Transform};
pub use primitives::{build_cube, build_sphere};
pub use sweep::{
    build_sweep, compute_frames, Frame, GuideCurve, Profile, SweepOptions,
};

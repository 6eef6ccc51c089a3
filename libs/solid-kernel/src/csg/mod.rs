//! # CSG Boolean Operations
//!
//! Constructive solid geometry on triangle meshes: union, subtract,
//! intersect.
//!
//! ## Overview
//!
//! Solids are flat polygon sets ([`Solid`]); each boolean operation builds
//! transient BSP trees from its two inputs, composes the clipping
//! primitives, and flattens the result back to a polygon set.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`union`] | `A ∪ B` |
//! | [`subtract`] | `A - B` |
//! | [`intersect`] | `A ∩ B` |
//!
//! ## Example
//!
//! ```rust
//! use solid_kernel::{build_cube, union, Solid, Transform};
//!
//! let mut other = build_cube([2.0, 2.0, 2.0], true);
//! other.translate(glam::DVec3::new(1.0, 0.0, 0.0));
//!
//! let a = Solid::from_mesh(&build_cube([2.0, 2.0, 2.0], true), &Transform::IDENTITY);
//! let b = Solid::from_mesh(&other, &Transform::IDENTITY);
//!
//! let merged = union(&a, &b);
//! assert!(!merged.is_empty());
//! ```
//!
//! ## Numerical Robustness
//!
//! Classification uses an epsilon band around each plane; thin or
//! near-coplanar duplicate geometry can produce missing or duplicated
//! slivers at that scale. This is accepted behavior bounded by
//! [`config::constants::PLANE_EPSILON`], not a defect.
//!
//! ## Module Structure
//!
//! - `mod.rs` - Boolean façade (this file)
//! - `node.rs` - BSP tree build/clip/invert
//! - `plane.rs` - Classification and polygon splitting
//! - `polygon.rs`, `vertex.rs` - Value types carried through clipping
//! - `solid.rs` - Flat polygon set and mesh exchange
//! - `tests.rs` - Integration tests (volume properties)

mod node;
mod plane;
mod polygon;
mod solid;
mod vertex;


pub use node::Node;
pub use plane::{Classification, Plane};
pub use polygon::Polygon;
pub use solid::Solid;
pub use vertex::Vertex;

// =============================================================================
// BOOLEAN OPERATIONS
// =============================================================================

/// Union of two solids: `A ∪ B`.
///
/// Clips each solid against the other so interior surfaces vanish, with
/// the extra invert pass removing the part of B's surface lying exactly
/// on A. Inputs are never mutated; trees operate on cloned polygons.
#[must_use]
pub fn union(a: &Solid, b: &Solid) -> Solid {
    let mut a = Node::from_polygons(a.polygons.clone());
    let mut b = Node::from_polygons(b.polygons.clone());

    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());

    Solid::from_polygons(a.all_polygons())
}

/// Subtraction: `A - B`.
///
/// Implemented as the union sequence run on inverted A, inverted back at
/// the end; the paired inversions keep every output polygon facing
/// outward.
#[must_use]
pub fn subtract(a: &Solid, b: &Solid) -> Solid {
    let mut a = Node::from_polygons(a.polygons.clone());
    let mut b = Node::from_polygons(b.polygons.clone());

    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());
    a.invert();

    Solid::from_polygons(a.all_polygons())
}

/// Intersection: `A ∩ B`.
#[must_use]
pub fn intersect(a: &Solid, b: &Solid) -> Solid {
    let mut a = Node::from_polygons(a.polygons.clone());
    let mut b = Node::from_polygons(b.polygons.clone());

    a.invert();
    b.clip_to(&a);
    b.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    a.build(b.all_polygons());
    a.invert();

    Solid::from_polygons(a.all_polygons())
}

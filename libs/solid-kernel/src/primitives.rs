//! # Primitive Constructors
//!
//! Canonical closed test/caller meshes: axis-aligned cube and lat-long
//! sphere. These feed the boolean property tests and give callers
//! well-formed inputs; the kernel itself never requires them.

use glam::{DVec2, DVec3};
use std::f64::consts::PI;

use crate::mesh::Mesh;

// =============================================================================
// CUBE
// =============================================================================

/// Build an axis-aligned cube mesh.
///
/// 24 vertices (4 per face for per-face normals) and 12 triangles.
///
/// ## Parameters
///
/// - `size`: `[width, depth, height]`
/// - `center`: center at the origin if true, else in the positive octant
///
/// ## Example
///
/// ```rust
/// use solid_kernel::build_cube;
///
/// let mesh = build_cube([2.0, 2.0, 2.0], true);
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
#[must_use]
pub fn build_cube(size: [f64; 3], center: bool) -> Mesh {
    let [sx, sy, sz] = size;
    let (min, max) = if center {
        (DVec3::new(-sx, -sy, -sz) / 2.0, DVec3::new(sx, sy, sz) / 2.0)
    } else {
        (DVec3::ZERO, DVec3::new(sx, sy, sz))
    };

    let mut mesh = Mesh::with_capacity(24, 12);

    // Each entry: face normal and its four corners in CCW order viewed
    // from outside.
    let faces: [(DVec3, [DVec3; 4]); 6] = [
        (
            DVec3::Z,
            [
                DVec3::new(min.x, min.y, max.z),
                DVec3::new(max.x, min.y, max.z),
                DVec3::new(max.x, max.y, max.z),
                DVec3::new(min.x, max.y, max.z),
            ],
        ),
        (
            DVec3::NEG_Z,
            [
                DVec3::new(max.x, min.y, min.z),
                DVec3::new(min.x, min.y, min.z),
                DVec3::new(min.x, max.y, min.z),
                DVec3::new(max.x, max.y, min.z),
            ],
        ),
        (
            DVec3::Y,
            [
                DVec3::new(min.x, max.y, max.z),
                DVec3::new(max.x, max.y, max.z),
                DVec3::new(max.x, max.y, min.z),
                DVec3::new(min.x, max.y, min.z),
            ],
        ),
        (
            DVec3::NEG_Y,
            [
                DVec3::new(min.x, min.y, min.z),
                DVec3::new(max.x, min.y, min.z),
                DVec3::new(max.x, min.y, max.z),
                DVec3::new(min.x, min.y, max.z),
            ],
        ),
        (
            DVec3::X,
            [
                DVec3::new(max.x, min.y, max.z),
                DVec3::new(max.x, min.y, min.z),
                DVec3::new(max.x, max.y, min.z),
                DVec3::new(max.x, max.y, max.z),
            ],
        ),
        (
            DVec3::NEG_X,
            [
                DVec3::new(min.x, min.y, min.z),
                DVec3::new(min.x, min.y, max.z),
                DVec3::new(min.x, max.y, max.z),
                DVec3::new(min.x, max.y, min.z),
            ],
        ),
    ];

    const CORNER_UVS: [DVec2; 4] = [
        DVec2::ZERO,
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ];

    for (normal, corners) in faces {
        let mut idx = [0u32; 4];
        for (k, corner) in corners.into_iter().enumerate() {
            idx[k] = mesh.add_vertex(corner, normal, CORNER_UVS[k]);
        }
        mesh.add_triangle(idx[0], idx[1], idx[2]);
        mesh.add_triangle(idx[0], idx[2], idx[3]);
    }

    mesh
}

// =============================================================================
// SPHERE
// =============================================================================

/// Build a lat-long sphere mesh with pole fans.
///
/// `segments` meridians around the equator, `segments / 2` latitude rings
/// (minimum 2). Shared ring vertices, so the surface is closed and
/// manifold.
///
/// ## Example
///
/// ```rust
/// use solid_kernel::build_sphere;
///
/// let mesh = build_sphere(1.0, 16);
/// assert!(mesh.triangle_count() > 0);
/// ```
#[must_use]
pub fn build_sphere(radius: f64, segments: usize) -> Mesh {
    let segments = segments.max(3);
    let rings = (segments / 2).max(2);

    let mut mesh = Mesh::with_capacity(segments * rings, segments * rings * 2);

    // Poles first, then the interior latitude rings.
    let top = mesh.add_vertex(DVec3::new(0.0, 0.0, radius), DVec3::Z, DVec2::new(0.5, 0.0));

    for i in 1..rings {
        let phi = PI * i as f64 / rings as f64;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..segments {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let dir = DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi);
            mesh.add_vertex(
                dir * radius,
                dir,
                DVec2::new(theta / (2.0 * PI), phi / PI),
            );
        }
    }

    let bottom = mesh.add_vertex(
        DVec3::new(0.0, 0.0, -radius),
        DVec3::NEG_Z,
        DVec2::new(0.5, 1.0),
    );

    let ring_base = |i: usize| 1 + (i - 1) * segments;

    // Top fan
    for j in 0..segments {
        let j1 = (j + 1) % segments;
        mesh.add_triangle(
            top,
            (ring_base(1) + j) as u32,
            (ring_base(1) + j1) as u32,
        );
    }

    // Quad strips between rings
    for i in 1..rings - 1 {
        for j in 0..segments {
            let j1 = (j + 1) % segments;
            let a = (ring_base(i) + j) as u32;
            let b = (ring_base(i) + j1) as u32;
            let c = (ring_base(i + 1) + j1) as u32;
            let d = (ring_base(i + 1) + j) as u32;
            mesh.add_triangle(a, d, c);
            mesh.add_triangle(a, c, b);
        }
    }

    // Bottom fan
    for j in 0..segments {
        let j1 = (j + 1) % segments;
        mesh.add_triangle(
            bottom,
            (ring_base(rings - 1) + j1) as u32,
            (ring_base(rings - 1) + j) as u32,
        );
    }

    mesh
}

// =============================================================================
// TESTS
// =============================================================================

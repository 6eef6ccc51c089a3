//! # CSG Solid
//!
//! The persistent unit exchanged with callers: a flat polygon set plus the
//! mesh conversions at the kernel boundary. BSP trees are built transiently
//! per operation and discarded.

use glam::{DVec2, DVec3};

use crate::mesh::{Mesh, Transform};

use super::polygon::Polygon;
use super::vertex::Vertex;

// =============================================================================
// SOLID
// =============================================================================

/// A solid represented by its boundary polygons.
///
/// No tree structure is retained between operations; each boolean builds
/// its own BSP trees from these lists and throws them away on return.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    /// Boundary polygons with outward-facing planes.
    pub polygons: Vec<Polygon>,
}

impl Solid {
    /// Create a solid from an existing polygon list.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Check whether the solid has no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    // =========================================================================
    // MESH EXCHANGE
    // =========================================================================

    /// Convert a positioned mesh into world-space polygons.
    ///
    /// Each triangle becomes one polygon. Positions go through the full
    /// transform, normals through its inverse-transpose. Missing normal or
    /// UV buffers are tolerated (face normals / zero UVs are substituted);
    /// a mesh with no position data yields an empty solid rather than an
    /// error. Zero-area triangles are dropped.
    #[must_use]
    pub fn from_mesh(mesh: &Mesh, transform: &Transform) -> Self {
        if mesh.is_empty() || mesh.indices.is_empty() {
            return Self::default();
        }

        let matrix = transform.matrix();
        let normal_matrix = transform.normal_matrix();
        let has_normals = mesh.normals.len() == mesh.positions.len();
        let has_uvs = mesh.uvs.len() / 2 == mesh.positions.len() / 3;

        let mut polygons = Vec::with_capacity(mesh.triangle_count());

        for t in 0..mesh.triangle_count() {
            let mut verts = Vec::with_capacity(3);
            for k in 0..3 {
                let idx = mesh.indices[t * 3 + k] as usize;
                let pos = matrix.transform_point3(DVec3::new(
                    mesh.positions[idx * 3],
                    mesh.positions[idx * 3 + 1],
                    mesh.positions[idx * 3 + 2],
                ));
                let normal = if has_normals {
                    (normal_matrix
                        * DVec3::new(
                            mesh.normals[idx * 3],
                            mesh.normals[idx * 3 + 1],
                            mesh.normals[idx * 3 + 2],
                        ))
                    .normalize_or(DVec3::Z)
                } else {
                    DVec3::ZERO // patched below from the face plane
                };
                let uv = if has_uvs {
                    DVec2::new(mesh.uvs[idx * 2], mesh.uvs[idx * 2 + 1])
                } else {
                    DVec2::ZERO
                };
                verts.push(Vertex::new(pos, normal, uv));
            }

            if let Some(mut poly) = Polygon::new(verts) {
                if !has_normals {
                    let n = poly.plane.normal;
                    for v in &mut poly.vertices {
                        v.normal = n;
                    }
                }
                polygons.push(poly);
            }
        }

        Self { polygons }
    }

    /// Convert the polygon set back to a renderable triangle mesh.
    ///
    /// Polygons are fan-triangulated and vertex normals are recomputed
    /// from the final geometry, masking any distortion introduced by
    /// polygon splitting.
    #[must_use]
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.polygons.len() * 3, self.polygons.len());

        for poly in &self.polygons {
            let base = mesh.add_vertex(poly.vertices[0].pos, poly.vertices[0].normal, poly.vertices[0].uv);
            let mut prev = mesh.add_vertex(poly.vertices[1].pos, poly.vertices[1].normal, poly.vertices[1].uv);
            for v in &poly.vertices[2..] {
                let next = mesh.add_vertex(v.pos, v.normal, v.uv);
                mesh.add_triangle(base, prev, next);
                prev = next;
            }
        }

        mesh.recompute_normals();
        mesh
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::build_cube;
    use approx::assert_relative_eq;
    use glam::DQuat;

    #[test]
    fn test_empty_mesh_yields_empty_solid() {
        let solid = Solid::from_mesh(&Mesh::new(), &Transform::IDENTITY);
        assert!(solid.is_empty());
        assert!(solid.to_mesh().is_empty());
    }

    #[test]
    fn test_cube_round_trip() {
        let cube = build_cube([2.0, 2.0, 2.0], true);
        let solid = Solid::from_mesh(&cube, &Transform::IDENTITY);

        assert_eq!(solid.polygons.len(), 12);

        let out = solid.to_mesh();
        assert_eq!(out.triangle_count(), 12);
        // All positions on the ±1 cube surface.
        for i in (0..out.positions.len()).step_by(3) {
            let p = DVec3::new(out.positions[i], out.positions[i + 1], out.positions[i + 2]);
            assert!(p.abs().max_element() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_from_mesh_applies_transform() {
        let cube = build_cube([2.0, 2.0, 2.0], true);
        let transform = Transform {
            position: DVec3::new(10.0, 0.0, 0.0),
            rotation: DQuat::IDENTITY,
            scale: DVec3::splat(0.5),
        };
        let solid = Solid::from_mesh(&cube, &transform);

        for poly in &solid.polygons {
            for v in &poly.vertices {
                assert!((v.pos.x - 10.0).abs() <= 0.5 + 1e-12);
                assert!(v.pos.y.abs() <= 0.5 + 1e-12);
            }
        }
    }

    #[test]
    fn test_outward_planes_on_cube() {
        let cube = build_cube([2.0, 2.0, 2.0], true);
        let solid = Solid::from_mesh(&cube, &Transform::IDENTITY);

        // Every face plane points away from the cube center.
        for poly in &solid.polygons {
            let centroid = poly
                .vertices
                .iter()
                .fold(DVec3::ZERO, |acc, v| acc + v.pos)
                / poly.vertices.len() as f64;
            assert!(poly.plane.normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_to_mesh_recomputes_normals() {
        let cube = build_cube([2.0, 2.0, 2.0], true);
        let out = Solid::from_mesh(&cube, &Transform::IDENTITY).to_mesh();

        // Per-face duplicated vertices keep flat, unit-length normals.
        for i in (0..out.normals.len()).step_by(3) {
            let n = DVec3::new(out.normals[i], out.normals[i + 1], out.normals[i + 2]);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
        }
    }
}

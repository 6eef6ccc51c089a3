//! # CSG Polygon
//!
//! Convex, coplanar vertex loop with a cached plane. The unit of work for
//! BSP construction and clipping.

use super::plane::Plane;
use super::vertex::Vertex;

/// Ordered, coplanar, convex loop of at least three vertices.
///
/// ## Invariant
///
/// All vertices lie within the classification epsilon of `plane`, which is
/// derived from the first three vertices at construction and carried
/// through cuts so fragments never re-derive a degenerate plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertex loop in counter-clockwise order viewed from the front side.
    pub vertices: Vec<Vertex>,
    /// Cached supporting plane.
    pub plane: Plane,
}

impl Polygon {
    /// Build a polygon, deriving its plane from the first three vertices.
    ///
    /// Returns `None` when there are fewer than three vertices or the
    /// leading triple is collinear (zero-area polygon); such input is
    /// silently dropped by callers rather than surfaced as an error.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0].pos, vertices[1].pos, vertices[2].pos)?;
        Some(Self { vertices, plane })
    }

    /// Build a polygon fragment that inherits a known supporting plane.
    ///
    /// Used by splitting, where the fragment is coplanar with its parent
    /// by construction. Returns `None` for sliver fragments (< 3 vertices).
    #[must_use]
    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        Some(Self { vertices, plane })
    }

    /// Reverse orientation: vertex order is reversed, vertex normals and
    /// the plane are negated.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            *v = v.flipped();
        }
        self.plane.flip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3};

    fn vert(p: DVec3) -> Vertex {
        Vertex::new(p, DVec3::Z, DVec2::ZERO)
    }

    #[test]
    fn test_new_derives_plane() {
        let poly = Polygon::new(vec![vert(DVec3::ZERO), vert(DVec3::X), vert(DVec3::Y)])
            .expect("valid triangle");
        assert!((poly.plane.normal - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_new_rejects_degenerate() {
        assert!(Polygon::new(vec![vert(DVec3::ZERO), vert(DVec3::X)]).is_none());
        assert!(
            Polygon::new(vec![vert(DVec3::ZERO), vert(DVec3::X), vert(DVec3::X * 3.0)])
                .is_none()
        );
    }

    #[test]
    fn test_flip_reverses_and_negates() {
        let mut poly = Polygon::new(vec![vert(DVec3::ZERO), vert(DVec3::X), vert(DVec3::Y)])
            .expect("valid triangle");
        let first = poly.vertices[0].pos;
        poly.flip();

        assert!((poly.plane.normal + DVec3::Z).length() < 1e-12);
        assert_eq!(poly.vertices[2].pos, first);
        assert_eq!(poly.vertices[0].normal, -DVec3::Z);

        // Double flip restores the original orientation.
        poly.flip();
        assert!((poly.plane.normal - DVec3::Z).length() < 1e-12);
        assert_eq!(poly.vertices[0].pos, first);
    }
}

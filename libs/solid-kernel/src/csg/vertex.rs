//! # CSG Vertex
//!
//! Vertex value type carried through BSP clipping. Attributes are
//! interpolated linearly when a polygon is cut by a plane.

use glam::{DVec2, DVec3};

/// A mesh vertex with position, normal, and texture coordinate.
///
/// Immutable value semantics: clipping never edits a vertex in place, it
/// produces new interpolated vertices at plane crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// World-space position.
    pub pos: DVec3,
    /// Vertex normal (unit length on well-formed input).
    pub normal: DVec3,
    /// Texture coordinate.
    pub uv: DVec2,
}

impl Vertex {
    /// Create a vertex from its attributes.
    #[must_use]
    pub fn new(pos: DVec3, normal: DVec3, uv: DVec2) -> Self {
        Self { pos, normal, uv }
    }

    /// Vertex with the normal negated, used when a polygon is flipped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            pos: self.pos,
            normal: -self.normal,
            uv: self.uv,
        }
    }

    /// Linearly interpolate all attributes toward `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`. Used to insert new
    /// vertices where an edge crosses a splitting plane.
    #[must_use]
    pub fn interpolate(&self, other: &Vertex, t: f64) -> Self {
        Self {
            pos: self.pos.lerp(other.pos, t),
            normal: self.normal.lerp(other.normal, t),
            uv: self.uv.lerp(other.uv, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate_midpoint() {
        let a = Vertex::new(DVec3::ZERO, DVec3::X, DVec2::ZERO);
        let b = Vertex::new(DVec3::new(2.0, 0.0, 0.0), DVec3::Y, DVec2::new(1.0, 1.0));

        let mid = a.interpolate(&b, 0.5);
        assert_relative_eq!(mid.pos.x, 1.0);
        assert_relative_eq!(mid.uv.x, 0.5);
        assert_relative_eq!(mid.normal.x, 0.5);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let a = Vertex::new(DVec3::ZERO, DVec3::X, DVec2::ZERO);
        let b = Vertex::new(DVec3::ONE, DVec3::Y, DVec2::ONE);

        assert_eq!(a.interpolate(&b, 0.0), a);
        assert_eq!(a.interpolate(&b, 1.0), b);
    }

    #[test]
    fn test_flipped_negates_normal() {
        let v = Vertex::new(DVec3::ONE, DVec3::Z, DVec2::ZERO);
        let f = v.flipped();
        assert_eq!(f.normal, -DVec3::Z);
        assert_eq!(f.pos, v.pos);
    }
}

//! # Splitting Plane
//!
//! Plane primitive used both to classify polygons against BSP nodes and to
//! cut spanning polygons into front/back fragments.

use config::constants::{DEGENERATE_EPSILON, PLANE_EPSILON};
use glam::DVec3;

use super::polygon::Polygon;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Vertex/polygon position relative to a plane, within the epsilon band.
///
/// Discriminants are bit flags, so per-vertex classes combine into a
/// whole-polygon class with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Classification {
    /// On the plane (within [`PLANE_EPSILON`]).
    Coplanar = 0,
    /// Entirely on the positive side.
    Front = 1,
    /// Entirely on the negative side.
    Back = 2,
    /// Vertices on both sides; the polygon must be cut.
    Spanning = 3,
}

impl Classification {
    fn from_mask(mask: u8) -> Self {
        match mask {
            0 => Self::Coplanar,
            1 => Self::Front,
            2 => Self::Back,
            _ => Self::Spanning,
        }
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// Plane in Hessian normal form: `normal · p - w = 0` for points `p` on the
/// plane. Points with `normal · p > w` are in front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing to the front side.
    pub normal: DVec3,
    /// Signed distance from the origin along `normal`.
    pub w: f64,
}

impl Plane {
    /// Construct the plane through three points, oriented by their winding.
    ///
    /// Returns `None` for collinear points (zero-area triangle); callers
    /// drop such polygons as degenerate.
    #[must_use]
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length_squared() < DEGENERATE_EPSILON {
            return None;
        }
        let normal = cross.normalize();
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Reverse the plane's orientation in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance of a point to the plane (positive in front).
    #[must_use]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classify a single point against the plane's epsilon band.
    #[must_use]
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let d = self.signed_distance(point);
        if d < -PLANE_EPSILON {
            Classification::Back
        } else if d > PLANE_EPSILON {
            Classification::Front
        } else {
            Classification::Coplanar
        }
    }

    // =========================================================================
    // POLYGON SPLITTING
    // =========================================================================

    /// Classify `polygon` against this plane and route it (or its cut
    /// fragments) into the four output lists.
    ///
    /// ## Algorithm
    ///
    /// 1. Classify each vertex as front, back, or coplanar using the
    ///    [`PLANE_EPSILON`] band.
    /// 2. Combine the per-vertex classes: all-coplanar polygons go to
    ///    `coplanar_front` or `coplanar_back` depending on facing; uniform
    ///    polygons go to `front`/`back` whole.
    /// 3. Spanning polygons are cut: each edge crossing the plane inserts a
    ///    vertex interpolated at the parametric line/plane intersection.
    ///    Fragments left with fewer than 3 vertices are degenerate slivers
    ///    and are discarded.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let mut mask = 0u8;
        let mut types = Vec::with_capacity(polygon.vertices.len());

        for v in &polygon.vertices {
            let class = self.classify_point(v.pos);
            mask |= class as u8;
            types.push(class);
        }

        match Classification::from_mask(mask) {
            Classification::Coplanar => {
                if self.normal.dot(polygon.plane.normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            Classification::Front => front.push(polygon.clone()),
            Classification::Back => back.push(polygon.clone()),
            Classification::Spanning => {
                let (f, b) = self.cut_spanning(polygon, &types);
                if let Some(p) = f {
                    front.push(p);
                }
                if let Some(p) = b {
                    back.push(p);
                }
            }
        }
    }

    /// Cut a spanning polygon into its front and back fragments.
    fn cut_spanning(
        &self,
        polygon: &Polygon,
        types: &[Classification],
    ) -> (Option<Polygon>, Option<Polygon>) {
        let n = polygon.vertices.len();
        let mut f = Vec::with_capacity(n + 1);
        let mut b = Vec::with_capacity(n + 1);

        for i in 0..n {
            let j = (i + 1) % n;
            let ti = types[i];
            let tj = types[j];
            let vi = polygon.vertices[i];
            let vj = polygon.vertices[j];

            if ti != Classification::Back {
                f.push(vi);
            }
            if ti != Classification::Front {
                b.push(vi);
            }

            // Edge crosses the plane: insert the interpolated vertex on
            // both sides.
            if (ti as u8 | tj as u8) == Classification::Spanning as u8 {
                let denom = self.normal.dot(vj.pos - vi.pos);
                let t = (self.w - self.normal.dot(vi.pos)) / denom;
                let v = vi.interpolate(&vj, t);
                f.push(v);
                b.push(v);
            }
        }

        (
            Polygon::with_plane(f, polygon.plane),
            Polygon::with_plane(b, polygon.plane),
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csg::vertex::Vertex;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn tri(a: DVec3, b: DVec3, c: DVec3) -> Polygon {
        let verts = [a, b, c]
            .into_iter()
            .map(|p| Vertex::new(p, DVec3::Z, DVec2::ZERO))
            .collect();
        Polygon::new(verts).expect("test triangle must be non-degenerate")
    }

    fn split(plane: &Plane, poly: &Polygon) -> (Vec<Polygon>, Vec<Polygon>, Vec<Polygon>, Vec<Polygon>) {
        let (mut cf, mut cb, mut f, mut b) = (vec![], vec![], vec![], vec![]);
        plane.split_polygon(poly, &mut cf, &mut cb, &mut f, &mut b);
        (cf, cb, f, b)
    }

    #[test]
    fn test_from_points_unit_normal() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y)
            .expect("non-degenerate");
        assert_relative_eq!(plane.normal.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(plane.w, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_points_collinear_is_none() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_classify_point_epsilon_band() {
        let plane = Plane { normal: DVec3::Z, w: 0.0 };
        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, 1.0)), Classification::Front);
        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, -1.0)), Classification::Back);
        // Inside the band counts as coplanar from either side.
        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, 1e-6)), Classification::Coplanar);
        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, -1e-6)), Classification::Coplanar);
    }

    #[test]
    fn test_split_front_polygon() {
        let plane = Plane { normal: DVec3::Z, w: 0.0 };
        let poly = tri(
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 1.0, 2.0),
        );
        let (cf, cb, f, b) = split(&plane, &poly);
        assert!(cf.is_empty() && cb.is_empty() && b.is_empty());
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn test_split_coplanar_routing() {
        let plane = Plane { normal: DVec3::Z, w: 0.0 };
        let same = tri(DVec3::ZERO, DVec3::X, DVec3::Y);
        let (cf, cb, _, _) = split(&plane, &same);
        assert_eq!(cf.len(), 1, "same-facing coplanar goes front");
        assert!(cb.is_empty());

        let mut opposite = same.clone();
        opposite.flip();
        let (cf, cb, _, _) = split(&plane, &opposite);
        assert!(cf.is_empty());
        assert_eq!(cb.len(), 1, "opposite-facing coplanar goes back");
    }

    #[test]
    fn test_split_spanning_polygon() {
        let plane = Plane { normal: DVec3::Z, w: 0.0 };
        let poly = tri(
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.0, 0.0, 1.0),
        );
        let (_, _, f, b) = split(&plane, &poly);
        assert_eq!(f.len(), 1);
        assert_eq!(b.len(), 1);

        // Each fragment stays on its own side of the plane.
        for p in &f[0].vertices {
            assert!(plane.signed_distance(p.pos) >= -1e-9);
        }
        for p in &b[0].vertices {
            assert!(plane.signed_distance(p.pos) <= 1e-9);
        }
        // Quad on the back side (two original verts + two cut verts).
        assert_eq!(b[0].vertices.len(), 4);
    }

    #[test]
    fn test_split_interpolates_at_crossing() {
        let plane = Plane { normal: DVec3::Z, w: 0.0 };
        let poly = tri(
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(2.0, 0.0, -1.0),
            DVec3::new(0.0, 0.0, 1.0),
        );
        let (_, _, f, _) = split(&plane, &poly);
        let on_plane: Vec<_> = f[0]
            .vertices
            .iter()
            .filter(|v| v.pos.z.abs() < 1e-9)
            .collect();
        assert_eq!(on_plane.len(), 2, "two edges cross the plane");
    }
}

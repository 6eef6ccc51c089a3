//! # Rotation-Minimizing Frames
//!
//! Orthonormal frame transport along a guide curve using the Double
//! Reflection Method (Wang et al. 2008). Each step reflects the previous
//! frame through the plane bisecting the two sample points, then through
//! the plane bisecting the reflected and actual tangents. The result
//! carries no spin of its own, so profiles swept through these frames do
//! not corkscrew around the path.

use config::constants::{FRAME_EPSILON, NEAR_PARALLEL_THRESHOLD};
use glam::DVec3;

use super::curve::GuideCurve;

// =============================================================================
// FRAME
// =============================================================================

/// One orthonormal frame on the guide curve.
///
/// `tangent`, `normal`, and `binormal` form a right-handed basis with
/// `binormal = tangent × normal`. Profile coordinates map as
/// `world = position + u * binormal + v * normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Point on the curve.
    pub position: DVec3,
    /// Unit curve direction.
    pub tangent: DVec3,
    /// Unit vector perpendicular to the tangent (profile V axis).
    pub normal: DVec3,
    /// `tangent × normal` (profile U axis).
    pub binormal: DVec3,
}

impl Frame {
    /// Rotate the frame's normal and binormal about its tangent by `angle`
    /// radians. Used to apply twist on top of the minimal-rotation
    /// transport.
    #[must_use]
    pub fn twisted(&self, angle: f64) -> Self {
        if angle == 0.0 {
            return *self;
        }
        let (sin, cos) = angle.sin_cos();
        Self {
            position: self.position,
            tangent: self.tangent,
            normal: self.normal * cos + self.binormal * sin,
            binormal: self.binormal * cos - self.normal * sin,
        }
    }
}

// =============================================================================
// FRAME COMPUTATION
// =============================================================================

/// Compute `steps + 1` rotation-minimizing frames uniformly spaced in
/// curve parameter.
///
/// The first frame's normal comes from `align` projected perpendicular to
/// the start tangent; when `align` is absent, near-zero, or parallel to
/// the tangent, a world-up heuristic is used instead (world Y, or world X
/// when the tangent is nearly vertical). Subsequent frames are transported
/// by double reflection and re-orthogonalized against the sampled tangent.
#[must_use]
pub fn compute_frames(curve: &GuideCurve, steps: usize, align: Option<DVec3>) -> Vec<Frame> {
    let steps = steps.max(1);
    let mut frames = Vec::with_capacity(steps + 1);

    let position = curve.point_at(0.0);
    let tangent = curve.tangent_at(0.0);
    let normal = seed_normal(tangent, align);
    frames.push(Frame {
        position,
        tangent,
        normal,
        binormal: tangent.cross(normal).normalize_or(DVec3::X),
    });

    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let position = curve.point_at(t);
        let tangent = curve.tangent_at(t);
        let prev = frames[i - 1];

        let reflected = double_reflect(&prev, position, tangent);

        // Drift correction: keep the normal exactly perpendicular to the
        // sampled tangent.
        let ortho = reflected - tangent * tangent.dot(reflected);
        let normal = if ortho.length_squared() > FRAME_EPSILON {
            ortho.normalize()
        } else {
            seed_normal(tangent, align)
        };

        frames.push(Frame {
            position,
            tangent,
            normal,
            binormal: tangent.cross(normal).normalize_or(DVec3::X),
        });
    }

    frames
}

/// Transport the previous frame's normal to a new sample by double
/// reflection. Reflections with a vanishing denominator are skipped,
/// carrying the prior vector through unchanged.
fn double_reflect(prev: &Frame, position: DVec3, tangent: DVec3) -> DVec3 {
    let v1 = position - prev.position;
    let c1 = v1.length_squared();
    if c1 < FRAME_EPSILON {
        return prev.normal;
    }

    // First reflection: through the plane bisecting the segment.
    let normal_l = prev.normal - v1 * (2.0 / c1 * v1.dot(prev.normal));
    let tangent_l = prev.tangent - v1 * (2.0 / c1 * v1.dot(prev.tangent));

    // Second reflection: through the plane bisecting the tangents.
    let v2 = tangent - tangent_l;
    let c2 = v2.length_squared();
    if c2 < FRAME_EPSILON {
        return normal_l;
    }
    normal_l - v2 * (2.0 / c2 * v2.dot(normal_l))
}

/// Initial frame normal: the alignment hint if usable, else a world-up
/// heuristic. Always unit length and perpendicular to `tangent`.
fn seed_normal(tangent: DVec3, align: Option<DVec3>) -> DVec3 {
    if let Some(axis) = align {
        if axis.length_squared() > FRAME_EPSILON {
            let ortho = axis - tangent * tangent.dot(axis);
            if ortho.length_squared() > FRAME_EPSILON {
                return ortho.normalize();
            }
        }
    }

    let up = if tangent.y.abs() > NEAR_PARALLEL_THRESHOLD {
        DVec3::X
    } else {
        DVec3::Y
    };
    let ortho = up - tangent * tangent.dot(up);
    ortho.normalize_or(DVec3::X)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_orthonormal(frame: &Frame) {
        assert_relative_eq!(frame.tangent.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.normal.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.binormal.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.tangent.dot(frame.normal), 0.0, epsilon = 1e-9);
        assert_relative_eq!(frame.tangent.dot(frame.binormal), 0.0, epsilon = 1e-9);
        assert_relative_eq!(frame.normal.dot(frame.binormal), 0.0, epsilon = 1e-9);
        // Right-handed
        let cross = frame.tangent.cross(frame.normal);
        assert_relative_eq!(cross.dot(frame.binormal), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_straight_path_frames_constant() {
        let curve = GuideCurve::new(&[DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)]).unwrap();
        let frames = compute_frames(&curve, 8, None);

        assert_eq!(frames.len(), 9);
        for frame in &frames {
            assert_orthonormal(frame);
            assert_relative_eq!(frame.tangent.z, 1.0, epsilon = 1e-6);
            // World-up seed survives transport on a straight path.
            assert_relative_eq!(frame.normal.y, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_vertical_path_uses_x_fallback() {
        let curve = GuideCurve::new(&[DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0)]).unwrap();
        let frames = compute_frames(&curve, 4, None);

        for frame in &frames {
            assert_orthonormal(frame);
            assert_relative_eq!(frame.normal.x.abs(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_align_hint_sets_seed_normal() {
        let curve = GuideCurve::new(&[DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)]).unwrap();
        let frames = compute_frames(&curve, 4, Some(DVec3::X));

        for frame in &frames {
            assert_relative_eq!(frame.normal.x, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_align_parallel_to_tangent_falls_back() {
        let curve = GuideCurve::new(&[DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)]).unwrap();
        // Hint parallel to the tangent carries no orientation information.
        let frames = compute_frames(&curve, 4, Some(DVec3::Z));

        for frame in &frames {
            assert_orthonormal(frame);
            assert_relative_eq!(frame.normal.y, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_planar_curve_keeps_normal_fixed() {
        // A quarter arc in the XZ plane: the seed normal is world Y, which
        // is the plane normal. A rotation-minimizing frame never spins
        // about the tangent, so the normal stays pinned to ±Y while the
        // binormal turns within the plane.
        let points: Vec<DVec3> = (0..=16)
            .map(|i| {
                let a = std::f64::consts::FRAC_PI_2 * i as f64 / 16.0;
                DVec3::new(a.sin() * 5.0, 0.0, 5.0 - a.cos() * 5.0)
            })
            .collect();
        let curve = GuideCurve::new(&points).unwrap();
        let frames = compute_frames(&curve, 64, None);

        let reference = frames[0].normal;
        assert_relative_eq!(reference.y, 1.0, epsilon = 1e-6);
        for frame in &frames {
            assert_orthonormal(frame);
            assert_relative_eq!(frame.normal.dot(reference), 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_helix_frames_change_smoothly() {
        let points: Vec<DVec3> = (0..=32)
            .map(|i| {
                let a = 4.0 * std::f64::consts::PI * i as f64 / 32.0;
                DVec3::new(a.cos() * 2.0, a.sin() * 2.0, i as f64 * 0.2)
            })
            .collect();
        let curve = GuideCurve::new(&points).unwrap();
        let frames = compute_frames(&curve, 128, None);

        for pair in frames.windows(2) {
            assert_orthonormal(&pair[1]);
            // Consecutive normals never flip or jump.
            assert!(
                pair[0].normal.dot(pair[1].normal) > 0.98,
                "normal jump between consecutive frames"
            );
        }
    }

    #[test]
    fn test_twisted_rotates_about_tangent() {
        let curve = GuideCurve::new(&[DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)]).unwrap();
        let frame = compute_frames(&curve, 1, None)[0];

        let quarter = frame.twisted(std::f64::consts::FRAC_PI_2);
        assert_orthonormal(&quarter);
        assert_relative_eq!(quarter.tangent.dot(frame.tangent), 1.0, epsilon = 1e-9);
        assert_relative_eq!(quarter.normal.dot(frame.binormal), 1.0, epsilon = 1e-9);

        let full = frame.twisted(2.0 * std::f64::consts::PI);
        assert_relative_eq!(full.normal.dot(frame.normal), 1.0, epsilon = 1e-9);
    }
}

//! # Guide Curve
//!
//! Smooth parametric curve through sampled path points, built as a
//! centripetal Catmull-Rom spline. Centripetal parameterization avoids the
//! loops and cusps the uniform variant produces on uneven point spacing,
//! so callers need no resampling precondition.

use config::constants::{DEGENERATE_EPSILON, MIN_PATH_POINTS};
use glam::DVec3;

use crate::error::{KernelError, KernelResult};

/// Finite-difference half-step for tangent evaluation.
const TANGENT_DELTA: f64 = 1e-4;

// =============================================================================
// GUIDE CURVE
// =============================================================================

/// Centripetal Catmull-Rom spline through a sequence of 3D points.
///
/// The curve interpolates every input point: `point_at(k / (n-1))` is
/// exactly `points[k]`. Parameter `t ∈ [0, 1]` maps uniformly across
/// segments.
#[derive(Debug, Clone)]
pub struct GuideCurve {
    points: Vec<DVec3>,
}

impl GuideCurve {
    /// Build a curve through `points`.
    ///
    /// ## Errors
    ///
    /// [`KernelError::InvalidInput`] when fewer than two points are given.
    pub fn new(points: &[DVec3]) -> KernelResult<Self> {
        if points.len() < MIN_PATH_POINTS {
            return Err(KernelError::invalid_input(format!(
                "guide path requires at least {MIN_PATH_POINTS} points, found {}",
                points.len()
            )));
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    /// Number of control points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Whether the path returns to its starting point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        (first - last).length_squared() < DEGENERATE_EPSILON
    }

    /// Evaluate the curve position at `t ∈ [0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> DVec3 {
        let n = self.points.len();
        let t = t.clamp(0.0, 1.0);

        let scaled = t * (n - 1) as f64;
        let seg = (scaled.floor() as usize).min(n - 2);
        let u = scaled - seg as f64;

        // Clamped ghost points at the ends.
        let p0 = self.points[seg.saturating_sub(1)];
        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p3 = self.points[(seg + 2).min(n - 1)];

        catmull_rom_centripetal(p0, p1, p2, p3, u)
    }

    /// Unit tangent at `t ∈ [0, 1]` by central differencing.
    ///
    /// Falls back to the overall chord direction when the local difference
    /// collapses (coincident samples).
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> DVec3 {
        let t = t.clamp(0.0, 1.0);
        let a = self.point_at((t - TANGENT_DELTA).max(0.0));
        let b = self.point_at((t + TANGENT_DELTA).min(1.0));

        let delta = b - a;
        if delta.length_squared() > DEGENERATE_EPSILON * DEGENERATE_EPSILON {
            return delta.normalize();
        }
        let chord = self.points[self.points.len() - 1] - self.points[0];
        chord.normalize_or(DVec3::Z)
    }
}

// =============================================================================
// CENTRIPETAL CATMULL-ROM SEGMENT
// =============================================================================

/// Evaluate one centripetal Catmull-Rom segment between `p1` and `p2` at
/// local parameter `u ∈ [0, 1]`.
///
/// Knot spacing uses the square root of chord length (α = 0.5). Collapsed
/// knot intervals (repeated points) are widened to keep the tangent
/// computation finite.
fn catmull_rom_centripetal(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, u: f64) -> DVec3 {
    let mut dt0 = p0.distance(p1).sqrt();
    let mut dt1 = p1.distance(p2).sqrt();
    let mut dt2 = p2.distance(p3).sqrt();

    if dt1 < 1e-6 {
        dt1 = 1.0;
    }
    if dt0 < 1e-6 {
        dt0 = dt1;
    }
    if dt2 < 1e-6 {
        dt2 = dt1;
    }

    // Non-uniform tangents scaled into the [p1, p2] interval.
    let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

    // Cubic Hermite basis.
    let u2 = u * u;
    let u3 = u2 * u;
    p1 * (2.0 * u3 - 3.0 * u2 + 1.0)
        + t1 * (u3 - 2.0 * u2 + u)
        + p2 * (-2.0 * u3 + 3.0 * u2)
        + t2 * (u3 - u2)
}

// =============================================================================
// TESTS
// =============================================================================

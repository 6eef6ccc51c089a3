//! # Sweep Profiles
//!
//! 2D cross-section outlines carried along the guide curve. A profile owns
//! its points in local XY coordinates plus a 3D placement transform; before
//! sweeping, the placed points are projected into a frame's (binormal,
//! normal) basis and resampled to a fixed count by arc length so rings
//! from different profiles interpolate vertex-to-vertex.

use config::constants::{DEGENERATE_EPSILON, MIN_PROFILE_POINTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{KernelError, KernelResult};
use crate::mesh::Transform;

use super::frame::Frame;

// =============================================================================
// PROFILE
// =============================================================================

/// A 2D cross-section outline with a 3D placement.
///
/// `points` live in the profile's local XY plane (Z = 0); `transform`
/// positions that plane in world space, typically on or near the guide
/// curve. Closed profiles connect the last point back to the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Outline points in local XY coordinates.
    pub points: Vec<DVec2>,
    /// Whether the outline wraps from the last point back to the first.
    pub closed: bool,
    /// Placement of the local XY plane in world space.
    pub transform: Transform,
}

impl Profile {
    /// Create a profile at the identity placement.
    #[must_use]
    pub fn new(points: Vec<DVec2>, closed: bool) -> Self {
        Self {
            points,
            closed,
            transform: Transform::IDENTITY,
        }
    }

    /// Create a profile with an explicit placement.
    #[must_use]
    pub fn with_transform(points: Vec<DVec2>, closed: bool, transform: Transform) -> Self {
        Self {
            points,
            closed,
            transform,
        }
    }

    /// A closed regular polygon approximating a circle, counter-clockwise.
    #[must_use]
    pub fn circle(radius: f64, segments: usize) -> Self {
        let segments = segments.max(3);
        let points = (0..segments)
            .map(|i| {
                let a = 2.0 * PI * i as f64 / segments as f64;
                DVec2::new(a.cos() * radius, a.sin() * radius)
            })
            .collect();
        Self::new(points, true)
    }

    /// A closed axis-aligned rectangle centered on the origin,
    /// counter-clockwise.
    #[must_use]
    pub fn rectangle(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::new(
            vec![
                DVec2::new(-hw, -hh),
                DVec2::new(hw, -hh),
                DVec2::new(hw, hh),
                DVec2::new(-hw, hh),
            ],
            true,
        )
    }

    /// Project the placed profile into a frame's cross-section plane and
    /// resample it to exactly `sample_count` points, uniform in arc
    /// length.
    ///
    /// The returned coordinates are `(u, v)` in the frame's
    /// (binormal, normal) basis. Closed profiles wrap across the closing
    /// edge; open profiles pin their first and last points.
    ///
    /// ## Errors
    ///
    /// - [`KernelError::InvalidInput`] when the profile has fewer than two
    ///   points.
    /// - [`KernelError::DegenerateGeometry`] when all points coincide
    ///   (zero total outline length).
    pub fn project(&self, frame: &Frame, sample_count: usize) -> KernelResult<Vec<DVec2>> {
        if self.points.len() < MIN_PROFILE_POINTS {
            return Err(KernelError::invalid_input(format!(
                "profile requires at least {MIN_PROFILE_POINTS} points, found {}",
                self.points.len()
            )));
        }

        let matrix = self.transform.matrix();
        let world: Vec<DVec3> = self
            .points
            .iter()
            .map(|p| matrix.transform_point3(DVec3::new(p.x, p.y, 0.0)))
            .collect();

        let resampled = resample(&world, self.closed, sample_count)?;

        Ok(resampled
            .into_iter()
            .map(|p| {
                let rel = p - frame.position;
                DVec2::new(rel.dot(frame.binormal), rel.dot(frame.normal))
            })
            .collect())
    }
}

// =============================================================================
// ARC-LENGTH RESAMPLING
// =============================================================================

/// Resample a polyline to `count` points spaced uniformly by arc length.
///
/// Closed outlines include the wrap-around segment and distribute `count`
/// points over the full loop (no duplicate at the seam); open outlines
/// keep their endpoints exact.
fn resample(points: &[DVec3], closed: bool, count: usize) -> KernelResult<Vec<DVec3>> {
    let n = points.len();
    let segment_count = if closed { n } else { n - 1 };

    // Cumulative arc length at each segment start.
    let mut cumulative = Vec::with_capacity(segment_count + 1);
    cumulative.push(0.0);
    let mut total = 0.0;
    for s in 0..segment_count {
        total += points[s].distance(points[(s + 1) % n]);
        cumulative.push(total);
    }

    if total < DEGENERATE_EPSILON {
        return Err(KernelError::degenerate(
            "profile outline has zero length (all points coincide)",
        ));
    }

    let count = count.max(2);
    let spacing = if closed {
        total / count as f64
    } else {
        total / (count - 1) as f64
    };

    let mut out = Vec::with_capacity(count);
    let mut seg = 0;
    for k in 0..count {
        let target = (k as f64 * spacing).min(total);
        while seg + 1 < segment_count && cumulative[seg + 1] < target {
            seg += 1;
        }
        let seg_len = cumulative[seg + 1] - cumulative[seg];
        let f = if seg_len > DEGENERATE_EPSILON {
            (target - cumulative[seg]) / seg_len
        } else {
            0.0
        };
        let a = points[seg];
        let b = points[(seg + 1) % n];
        out.push(a.lerp(b, f));
    }

    if !closed {
        // Pin the far endpoint exactly against accumulated rounding.
        out[count - 1] = points[n - 1];
    }

    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DQuat;

    fn frame_at_origin() -> Frame {
        Frame {
            position: DVec3::ZERO,
            tangent: DVec3::Z,
            normal: DVec3::Y,
            binormal: DVec3::Z.cross(DVec3::Y),
        }
    }

    #[test]
    fn test_too_few_points_rejected() {
        let profile = Profile::new(vec![DVec2::ZERO], true);
        let err = profile.project(&frame_at_origin(), 8).unwrap_err();
        assert!(matches!(err, KernelError::InvalidInput { .. }));
    }

    #[test]
    fn test_coincident_points_degenerate() {
        let profile = Profile::new(vec![DVec2::ONE, DVec2::ONE, DVec2::ONE], true);
        let err = profile.project(&frame_at_origin(), 8).unwrap_err();
        assert!(matches!(err, KernelError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_closed_resample_count_and_spacing() {
        let profile = Profile::rectangle(2.0, 2.0);
        let samples = profile.project(&frame_at_origin(), 16).unwrap();

        assert_eq!(samples.len(), 16);
        // Perimeter 8 split into 16 equal steps of 0.5.
        for pair in samples.windows(2) {
            assert_relative_eq!(pair[0].distance(pair[1]), 0.5, epsilon = 1e-9);
        }
        let wrap = samples[15].distance(samples[0]);
        assert_relative_eq!(wrap, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_open_resample_pins_endpoints() {
        let profile = Profile::new(
            vec![DVec2::ZERO, DVec2::new(1.0, 0.0), DVec2::new(1.0, 3.0)],
            false,
        );
        let frame = frame_at_origin();
        let samples = profile.project(&frame, 9).unwrap();

        assert_eq!(samples.len(), 9);
        // Frame basis: u along binormal (-X), v along normal (+Y).
        let first = samples[0];
        let last = samples[8];
        assert_relative_eq!(first.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(last.y, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_samples_on_radius() {
        let profile = Profile::circle(2.0, 64);
        let samples = profile.project(&frame_at_origin(), 32).unwrap();

        for p in &samples {
            // Resampled points sit on the polygon chords, just inside the
            // true radius.
            assert!(p.length() <= 2.0 + 1e-9);
            assert!(p.length() > 1.99);
        }
    }

    #[test]
    fn test_transform_offsets_projection() {
        let transform = Transform {
            position: DVec3::new(0.0, 1.0, 0.0),
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        };
        let profile = Profile::with_transform(
            vec![DVec2::ZERO, DVec2::new(0.0, 1.0)],
            false,
            transform,
        );
        let samples = profile.project(&frame_at_origin(), 2).unwrap();

        // Placement shifts the outline one unit along the frame normal.
        assert_relative_eq!(samples[0].y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(samples[1].y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_is_counter_clockwise() {
        let circle = Profile::circle(1.0, 8);
        let mut area = 0.0;
        let n = circle.points.len();
        for i in 0..n {
            let a = circle.points[i];
            let b = circle.points[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        assert!(area > 0.0);
    }
}

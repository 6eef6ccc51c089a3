//! # Swept Geometry
//!
//! Sweeps 2D cross-section profiles along a 3D guide curve to produce a
//! triangle mesh.
//!
//! ## Pipeline
//!
//! 1. Fit a centripetal Catmull-Rom [`GuideCurve`] through the path points.
//! 2. Transport [`Frame`]s along it with the Double Reflection Method
//!    ([`compute_frames`]), so the cross-section never corkscrews.
//! 3. Project each [`Profile`] into its station frame and resample it to a
//!    fixed vertex count, uniform in arc length.
//! 4. At every step, interpolate between the bracketing profile rings, add
//!    the requested twist, and emit one ring of vertices.
//! 5. Stitch adjacent rings with quads, seal closed profiles with
//!    ear-clipped end caps when requested, and recompute vertex normals.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use solid_kernel::{build_sweep, Profile, SweepOptions};
//!
//! let path = [DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)];
//! let profile = Profile::circle(1.0, 32);
//!
//! let mesh = build_sweep(&path, &[profile], &SweepOptions::default()).unwrap();
//! assert!(mesh.triangle_count() > 0);
//! ```
//!
//! ## Module Structure
//!
//! - `mod.rs` - Options and the sweep builder (this file)
//! - `curve.rs` - Centripetal Catmull-Rom guide curve
//! - `frame.rs` - Rotation-minimizing frame transport
//! - `profile.rs` - Cross-section projection and resampling
//! - `cap.rs` - Ear-clipped end caps
//! - `tests.rs` - Integration tests

mod cap;
mod curve;
mod frame;
mod profile;


pub use curve::GuideCurve;
pub use frame::{compute_frames, Frame};
pub use profile::Profile;

use config::constants::{
    DEFAULT_PROFILE_SAMPLES, DEFAULT_SWEEP_STEPS, MIN_PATH_POINTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::mesh::Mesh;

use cap::{signed_area, triangulate};

// =============================================================================
// OPTIONS
// =============================================================================

/// Tuning knobs for [`build_sweep`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepOptions {
    /// Number of segments along the path (`steps + 1` rings are emitted).
    pub steps: usize,
    /// Vertex count every cross-section ring is resampled to.
    pub profile_samples: usize,
    /// Optional hint orienting the first frame's normal. Unusable hints
    /// (zero, or parallel to the start tangent) fall back to the world-up
    /// heuristic rather than failing.
    pub align: Option<DVec3>,
    /// Total twist in degrees, distributed linearly along the path.
    pub twist_degrees: f64,
    /// Seal the ends of a closed profile with flat caps.
    pub capped: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_SWEEP_STEPS,
            profile_samples: DEFAULT_PROFILE_SAMPLES,
            align: None,
            twist_degrees: 0.0,
            capped: false,
        }
    }
}

// =============================================================================
// SWEEP BUILDER
// =============================================================================

/// Sweep `profiles` along `path` into a triangle mesh.
///
/// A single profile keeps its shape along the whole path; multiple
/// profiles are stationed uniformly along it and the cross-section morphs
/// linearly between neighbors. All profiles must agree on open/closed.
///
/// ## Errors
///
/// - [`KernelError::InvalidInput`] for a path shorter than
///   [`MIN_PATH_POINTS`], an empty profile list, mixed open/closed flags,
///   or a profile with too few points.
/// - [`KernelError::DegenerateGeometry`] when a profile outline collapses
///   to a point.
pub fn build_sweep(
    path: &[DVec3],
    profiles: &[Profile],
    options: &SweepOptions,
) -> KernelResult<Mesh> {
    if path.len() < MIN_PATH_POINTS {
        return Err(KernelError::invalid_input(format!(
            "sweep path requires at least {MIN_PATH_POINTS} points, found {}",
            path.len()
        )));
    }
    let Some(first_profile) = profiles.first() else {
        return Err(KernelError::invalid_input(
            "sweep requires at least one profile",
        ));
    };
    let closed = first_profile.closed;
    if profiles.iter().any(|p| p.closed != closed) {
        return Err(KernelError::invalid_input(
            "all sweep profiles must agree on open/closed",
        ));
    }

    let steps = options.steps.max(1);
    let samples = options.profile_samples.max(3);

    let curve = GuideCurve::new(path)?;
    let frames = compute_frames(&curve, steps, options.align);

    // Project each profile at its station along the path. Closed rings
    // are normalized to counter-clockwise so lateral quads always face
    // outward.
    let station_count = profiles.len();
    let mut stations: Vec<Vec<DVec2>> = Vec::with_capacity(station_count);
    for (k, profile) in profiles.iter().enumerate() {
        let t = if station_count == 1 {
            0.0
        } else {
            k as f64 / (station_count - 1) as f64
        };
        let frame_index = ((t * steps as f64).round() as usize).min(steps);
        let mut ring = profile.project(&frames[frame_index], samples)?;
        if closed && signed_area(&ring) < 0.0 {
            // Reverse traversal but keep the seam vertex first, so
            // stationed rings keep their vertex correspondence.
            ring[1..].reverse();
        }
        stations.push(ring);
    }

    let twist_total = options.twist_degrees.to_radians();
    let mut mesh = Mesh::with_capacity((steps + 1) * samples, steps * samples * 2);

    let mut first_ring = Vec::new();
    let mut last_ring = Vec::new();

    for (i, frame) in frames.iter().enumerate() {
        let t = i as f64 / steps as f64;
        let ring = interpolate_ring(&stations, t);
        let frame = frame.twisted(twist_total * t);

        for (j, p) in ring.iter().enumerate() {
            let position = frame.position + frame.binormal * p.x + frame.normal * p.y;
            let uv = DVec2::new(j as f64 / samples as f64, t);
            // Placeholder normal, recomputed once the surface is stitched.
            mesh.add_vertex(position, frame.normal, uv);
        }

        if i == 0 {
            first_ring = ring.clone();
        }
        if i == steps {
            last_ring = ring;
        }
    }

    stitch_rings(&mut mesh, steps, samples, closed);

    if options.capped && closed && !curve.is_closed() {
        add_caps(&mut mesh, &first_ring, &last_ring, steps, samples);
    }

    mesh.recompute_normals();
    Ok(mesh)
}

/// Cross-section ring at path parameter `t`, morphing linearly between
/// the two bracketing station rings.
fn interpolate_ring(stations: &[Vec<DVec2>], t: f64) -> Vec<DVec2> {
    let n = stations.len();
    if n == 1 {
        return stations[0].clone();
    }

    let scaled = t.clamp(0.0, 1.0) * (n - 1) as f64;
    let seg = (scaled.floor() as usize).min(n - 2);
    let f = scaled - seg as f64;

    stations[seg]
        .iter()
        .zip(&stations[seg + 1])
        .map(|(a, b)| a.lerp(*b, f))
        .collect()
}

/// Connect consecutive rings with outward-facing quads (two triangles
/// each). Closed rings wrap around the seam; open rings leave the sheet
/// edges free.
fn stitch_rings(mesh: &mut Mesh, steps: usize, samples: usize, closed: bool) {
    let span = if closed { samples } else { samples - 1 };
    for i in 0..steps {
        for j in 0..span {
            let j1 = (j + 1) % samples;
            let a = (i * samples + j) as u32;
            let b = (i * samples + j1) as u32;
            let c = ((i + 1) * samples + j1) as u32;
            let d = ((i + 1) * samples + j) as u32;
            mesh.add_triangle(a, d, c);
            mesh.add_triangle(a, c, b);
        }
    }
}

/// Seal both ends of a closed sweep with ear-clipped caps over the
/// existing ring vertices.
///
/// Cap triangles wound counter-clockwise in ring (u, v) coordinates face
/// along the negative tangent, which is outward at the start of the path;
/// the end cap uses the same triangulation reversed.
fn add_caps(mesh: &mut Mesh, first_ring: &[DVec2], last_ring: &[DVec2], steps: usize, samples: usize) {
    for tri in triangulate(first_ring) {
        mesh.add_triangle(tri[0], tri[1], tri[2]);
    }

    let base = (steps * samples) as u32;
    for tri in triangulate(last_ring) {
        mesh.add_triangle(base + tri[2], base + tri[1], base + tri[0]);
    }
}

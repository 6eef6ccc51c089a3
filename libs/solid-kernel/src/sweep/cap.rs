//! # End Cap Triangulation
//!
//! Ear-clipping triangulation of the closed cross-section ring, used to
//! seal the ends of a capped sweep. Handles non-convex outlines; input
//! winding is detected by signed area and the output triangles are always
//! counter-clockwise in the ring's (u, v) plane.

use config::constants::DEGENERATE_EPSILON;
use glam::DVec2;

// =============================================================================
// SIGNED AREA
// =============================================================================

/// Twice-signed shoelace area of a closed 2D outline. Positive for
/// counter-clockwise winding.
#[must_use]
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

// =============================================================================
// EAR CLIPPING
// =============================================================================

/// Triangulate a closed 2D outline by ear clipping.
///
/// Returns index triples into `points`, wound counter-clockwise in the
/// (u, v) plane regardless of the input winding. Outlines with fewer than
/// three points yield no triangles. Degenerate configurations where no
/// valid ear remains (self-intersections, collinear runs) are clipped
/// anyway so the walk always terminates, at the cost of local overlap.
#[must_use]
pub fn triangulate(points: &[DVec2]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut remaining: Vec<u32> = (0..n as u32).collect();
    if signed_area(points) < 0.0 {
        remaining.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    let mut cursor = 0;
    let mut since_clip = 0;

    while remaining.len() > 3 {
        let len = remaining.len();
        let prev = remaining[(cursor + len - 1) % len];
        let curr = remaining[cursor % len];
        let next = remaining[(cursor + 1) % len];

        let force = since_clip > len;
        if force || is_ear(points, &remaining, prev, curr, next) {
            triangles.push([prev, curr, next]);
            remaining.remove(cursor % len);
            cursor = 0;
            since_clip = 0;
        } else {
            cursor += 1;
            since_clip += 1;
        }
    }

    triangles.push([remaining[0], remaining[1], remaining[2]]);
    triangles
}

/// An ear is a convex corner whose triangle contains no other remaining
/// outline point.
fn is_ear(points: &[DVec2], remaining: &[u32], prev: u32, curr: u32, next: u32) -> bool {
    let a = points[prev as usize];
    let b = points[curr as usize];
    let c = points[next as usize];

    // Convexity in CCW order.
    if cross(b - a, c - b) <= DEGENERATE_EPSILON {
        return false;
    }

    for &idx in remaining {
        if idx == prev || idx == curr || idx == next {
            continue;
        }
        if point_in_triangle(points[idx as usize], a, b, c) {
            return false;
        }
    }
    true
}

fn cross(a: DVec2, b: DVec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Strict containment test against a CCW triangle; boundary points do not
/// count, so shared outline vertices never block an ear.
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    cross(b - a, p - a) > DEGENERATE_EPSILON
        && cross(c - b, p - b) > DEGENERATE_EPSILON
        && cross(a - c, p - c) > DEGENERATE_EPSILON
}

// =============================================================================
// TESTS
// =============================================================================

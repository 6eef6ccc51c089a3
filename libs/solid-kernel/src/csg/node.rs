//! # BSP Tree
//!
//! Binary Space Partitioning tree over CSG polygons.
//!
//! ## Algorithm Overview
//!
//! The tree recursively partitions space using planes taken from the
//! polygons themselves. Each node stores:
//! - A splitting plane
//! - Polygons coplanar with that plane
//! - Front subtree (positive side)
//! - Back subtree (negative side)
//!
//! Boolean operations compose four primitives: `build`, `clip_to`,
//! `invert`, and `all_polygons`. Trees are transient per operation; the
//! persistent unit exchanged with callers is the flat polygon set in
//! [`Solid`](super::Solid).
//!
//! ## References
//!
//! - Thibault, W. C., & Naylor, B. F. (1987). "Set operations on polyhedra
//!   using BSP trees"

use super::plane::Plane;
use super::polygon::Polygon;

// =============================================================================
// BSP NODE
// =============================================================================

/// BSP tree node.
///
/// ```text
///           [Plane]
///          /       \
///      Front       Back
///     (+ side)   (- side)
/// ```
///
/// A node with `plane = None` is empty: all operations on it are no-ops
/// and clipping returns its input unmodified. Children are owned
/// exclusively, so inversion and clipping are plain recursive methods with
/// no aliasing.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Splitting plane (None for an empty node).
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane.
    polygons: Vec<Polygon>,
    /// Front subtree (positive side of plane).
    front: Option<Box<Node>>,
    /// Back subtree (negative side of plane).
    back: Option<Box<Node>>,
}

impl Node {
    /// Create an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree directly from a polygon list.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::new();
        node.build(polygons);
        node
    }

    /// Insert polygons into the tree, extending it as needed.
    ///
    /// ## Algorithm
    ///
    /// 1. Use the first polygon's plane as this node's splitter (if unset)
    /// 2. Partition the rest into coplanar / front / back, cutting
    ///    spanning polygons into both sides
    /// 3. Recurse into non-empty child sets
    ///
    /// The splitter is always the first polygon in the batch; adversarial
    /// polygon orderings can therefore degrade to O(n²).
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }

        if self.plane.is_none() {
            self.plane = Some(polygons[0].plane);
        }
        let Some(plane) = self.plane else { return };

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        for poly in &polygons {
            plane.split_polygon(
                poly,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }

        // Both coplanar orientations live on this node.
        self.polygons.append(&mut coplanar_front);
        self.polygons.append(&mut coplanar_back);

        if !front.is_empty() {
            self.front
                .get_or_insert_with(|| Box::new(Node::new()))
                .build(front);
        }
        if !back.is_empty() {
            self.back
                .get_or_insert_with(|| Box::new(Node::new()))
                .build(back);
        }
    }

    /// Remove all polygons (or fragments thereof) that lie inside the
    /// solid this tree represents.
    ///
    /// Survivors are the parts kept outside, plus coplanar polygons facing
    /// the same way as their node's plane. An empty tree returns the input
    /// unmodified.
    #[must_use]
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };

        let mut front = Vec::new();
        let mut back = Vec::new();

        for poly in &polygons {
            // Coplanar-front survives with the front set; coplanar-back is
            // treated as inside-facing and follows the back set.
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            plane.split_polygon(
                poly,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            front.append(&mut coplanar_front);
            back.append(&mut coplanar_back);
        }

        let mut result = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };

        if let Some(node) = &self.back {
            result.extend(node.clip_polygons(back));
        }
        // No back subtree: the back half-space is solid, polygons there
        // are discarded.

        result
    }

    /// Clip every polygon stored in this tree against `other`.
    ///
    /// Removes, from every node, all polygon area inside the solid that
    /// `other` represents.
    pub fn clip_to(&mut self, other: &Node) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));

        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Swap the solid/empty sense of the tree in place.
    ///
    /// Flips all polygons and planes and swaps front/back children at
    /// every node. O(tree size).
    pub fn invert(&mut self) {
        for poly in &mut self.polygons {
            poly.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }

        std::mem::swap(&mut self.front, &mut self.back);

        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
    }

    /// Flatten the tree back into a polygon list (pre-order: own polygons,
    /// then front, then back).
    #[must_use]
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = self.polygons.clone();
        if let Some(front) = &self.front {
            result.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            result.extend(back.all_polygons());
        }
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Mesh Module
//!
//! Triangle mesh representation exchanged with the scene layer.
//!
//! ## Structure
//!
//! - [`Mesh`] - Triangle mesh with vertices, indices, normals, and UVs
//! - [`Transform`] - Position/rotation/scale applied to meshes and profiles
//!
//! ## Example
//!
//! ```rust
//! use solid_kernel::Mesh;
//! use glam::{DVec2, DVec3};
//!
//! let mut mesh = Mesh::new();
//! let v0 = mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
//! let v1 = mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::X);
//! let v2 = mesh.add_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
//! mesh.add_triangle(v0, v1, v2);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

use glam::{DMat3, DMat4, DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangle mesh with vertices, indices, normals, and texture coordinates.
///
/// This is both the input and output format for all kernel operations. The
/// mesh uses flat arrays optimized for direct upload to WebGL buffers.
///
/// ## Memory Layout
///
/// - `positions`: `[x0, y0, z0, x1, y1, z1, ...]` - 3 floats per vertex
/// - `normals`: `[nx0, ny0, nz0, ...]` - 3 floats per vertex
/// - `uvs`: `[u0, v0, u1, v1, ...]` - 2 floats per vertex
/// - `indices`: `[i0, i1, i2, ...]` - 3 indices per triangle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`
    pub positions: Vec<f64>,

    /// Vertex normals: `[nx0, ny0, nz0, ...]`
    pub normals: Vec<f64>,

    /// Texture coordinates: `[u0, v0, u1, v1, ...]`
    pub uvs: Vec<f64>,

    /// Triangle indices: `[i0, i1, i2, ...]`
    pub indices: Vec<u32>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh with pre-allocated capacity.
    ///
    /// ## Parameters
    ///
    /// - `vertex_capacity`: Expected number of vertices
    /// - `triangle_capacity`: Expected number of triangles
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity * 3),
            normals: Vec::with_capacity(vertex_capacity * 3),
            uvs: Vec::with_capacity(vertex_capacity * 2),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    // =========================================================================
    // VERTEX / TRIANGLE OPERATIONS
    // =========================================================================

    /// Add a vertex with position, normal, and texture coordinate.
    ///
    /// Returns the vertex index for use in triangle definitions.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = (self.positions.len() / 3) as u32;
        self.positions.extend_from_slice(&[position.x, position.y, position.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        self.uvs.extend_from_slice(&[uv.x, uv.y]);
        index
    }

    /// Add a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Fetch a vertex position by index.
    #[must_use]
    pub fn position(&self, index: u32) -> DVec3 {
        let i = index as usize * 3;
        DVec3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }

    /// Fetch the three corner positions of a triangle.
    ///
    /// `triangle` indexes triangles, not the flat index buffer.
    #[must_use]
    pub fn triangle(&self, triangle: usize) -> (DVec3, DVec3, DVec3) {
        let i = triangle * 3;
        (
            self.position(self.indices[i]),
            self.position(self.indices[i + 1]),
            self.position(self.indices[i + 2]),
        )
    }

    // =========================================================================
    // TRANSFORM OPERATIONS
    // =========================================================================

    /// Apply translation to all vertices.
    pub fn translate(&mut self, offset: DVec3) {
        for i in (0..self.positions.len()).step_by(3) {
            self.positions[i] += offset.x;
            self.positions[i + 1] += offset.y;
            self.positions[i + 2] += offset.z;
        }
    }

    /// Recompute smooth per-vertex normals from triangle geometry.
    ///
    /// Accumulates area-weighted face normals at each vertex and
    /// normalizes. Called on every kernel output so that normals stay
    /// consistent after polygon splitting or ring stitching.
    pub fn recompute_normals(&mut self) {
        let mut accum = vec![DVec3::ZERO; self.vertex_count()];

        for t in 0..self.triangle_count() {
            let (a, b, c) = self.triangle(t);
            // Cross product length is twice the triangle area, giving the
            // area weighting for free.
            let face = (b - a).cross(c - a);
            let i = t * 3;
            accum[self.indices[i] as usize] += face;
            accum[self.indices[i + 1] as usize] += face;
            accum[self.indices[i + 2] as usize] += face;
        }

        self.normals.clear();
        self.normals.reserve(accum.len() * 3);
        for n in accum {
            let n = n.normalize_or(DVec3::Z);
            self.normals.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }

    // =========================================================================
    // MERGE OPERATIONS
    // =========================================================================

    /// Merge another mesh into this one.
    ///
    /// Indices are adjusted to account for existing vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let vertex_offset = self.vertex_count() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);

        for &idx in &other.indices {
            self.indices.push(idx + vertex_offset);
        }
    }
}

// =============================================================================
// TRANSFORM
// =============================================================================

/// World placement of a mesh or profile: position, rotation, and scale.
///
/// Equivalent to the decomposed 4x4 matrix carried by scene objects. The
/// kernel only reads transforms; it never writes them back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    /// Translation component.
    pub position: DVec3,
    /// Rotation component.
    pub rotation: DQuat,
    /// Per-axis scale component.
    pub scale: DVec3,
}

impl Transform {
    /// The identity transform (no translation, rotation, or scaling).
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
        scale: DVec3::ONE,
    };

    /// Create a pure translation.
    #[must_use]
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Compose into a 4x4 column-major matrix (scale, then rotate, then
    /// translate).
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Matrix for transforming normals under this transform.
    ///
    /// Inverse-transpose of the upper 3x3, which stays correct under
    /// non-uniform scale. Falls back to the rotation alone if the linear
    /// part is singular (zero scale on some axis).
    #[must_use]
    pub fn normal_matrix(&self) -> DMat3 {
        let linear = DMat3::from_mat4(self.matrix());
        if linear.determinant().abs() > f64::EPSILON {
            linear.inverse().transpose()
        } else {
            DMat3::from_quat(self.rotation)
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// TESTS
// =============================================================================

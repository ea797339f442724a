//! # Mesh Module
//!
//! Triangle mesh representation handed to the viewer.
//!
//! ## Structure
//!
//! - `Mesh` - Self-contained vertex buffer plus triangle index list
//! - `weld` - Position-based vertex welding used by the CSG output path
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use lining_mesh::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let v0 = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
//! let v1 = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
//! let v2 = mesh.add_vertex(DVec3::new(0.0, 0.0, 1.0));
//! mesh.add_triangle(v0, v1, v2);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

pub mod weld;

use std::collections::HashMap;

use glam::{DMat4, DVec3};

use crate::error::{MeshError, MeshResult};

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangle mesh with owned vertices and index triples.
///
/// `y` is the tunnel's longitudinal axis, `x`/`z` span the cross-section.
/// A mesh never references vertices owned by another mesh; winding of each
/// triangle determines its outward normal (right-hand rule).
///
/// ## Example
///
/// ```rust
/// use lining_mesh::Mesh;
///
/// let mesh = Mesh::new();
/// assert_eq!(mesh.vertex_count(), 0);
/// assert_eq!(mesh.triangle_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions in meters.
    pub vertices: Vec<DVec3>,

    /// Triangles as index triples into `vertices`.
    pub triangles: Vec<[u32; 3]>,
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
    /// ## Example
    ///
    /// ```rust
    /// use lining_mesh::Mesh;
    ///
    /// // A four-wall wedge at resolution 10
    /// let mesh = Mesh::with_capacity(40, 72);
    /// assert!(mesh.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            triangles: Vec::with_capacity(triangle_capacity),
        }
    }

    // =========================================================================
    // BUILDING
    // =========================================================================

    /// Add a vertex and return its index for use in triangle definitions.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Add a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Add the quad `a, b, c, d` as the triangles `(a, b, c)` and `(a, c, d)`.
    ///
    /// The quad's winding carries over to both triangles.
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Unnormalized normal of triangle `index` (`(b - a) × (c - a)`).
    ///
    /// Returns `None` when the index is out of range.
    #[must_use]
    pub fn triangle_normal(&self, index: usize) -> Option<DVec3> {
        let [a, b, c] = self.triangle_positions(index)?;
        Some((b - a).cross(c - a))
    }

    /// Centroid of triangle `index`.
    #[must_use]
    pub fn triangle_centroid(&self, index: usize) -> Option<DVec3> {
        let [a, b, c] = self.triangle_positions(index)?;
        Some((a + b + c) / 3.0)
    }

    fn triangle_positions(&self, index: usize) -> Option<[DVec3; 3]> {
        let tri = self.triangles.get(index)?;
        Some([
            *self.vertices.get(tri[0] as usize)?,
            *self.vertices.get(tri[1] as usize)?,
            *self.vertices.get(tri[2] as usize)?,
        ])
    }

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Meaningful for closed solids only; positive when triangles wind
    /// outward. Open shells return an origin-dependent value.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        (0..self.triangles.len())
            .filter_map(|i| self.triangle_positions(i))
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// Verify every triangle index addresses a vertex of this mesh.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` naming the first offending triangle.
    pub fn validate_indices(&self) -> MeshResult<()> {
        let count = self.vertices.len();
        match self
            .triangles
            .iter()
            .position(|tri| tri.iter().any(|&i| i as usize >= count))
        {
            Some(t) => Err(MeshError::invalid(format!(
                "triangle {t} {:?} references a vertex outside 0..{count}",
                self.triangles[t]
            ))),
            None => Ok(()),
        }
    }

    // =========================================================================
    // TRANSFORM OPERATIONS
    // =========================================================================

    /// Apply translation to all vertices.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Apply an affine transformation to all vertices.
    ///
    /// Triangle winding is untouched, so a transform with negative
    /// determinant flips every normal.
    pub fn transform(&mut self, matrix: DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    // =========================================================================
    // TOPOLOGY
    // =========================================================================

    /// Number of directed edges `(a, b)` without a matching `(b, a)`.
    ///
    /// Zero for a watertight, consistently wound surface. Open shells report
    /// their boundary; T-junctions report both the long edge and its pieces.
    #[must_use]
    pub fn unpaired_edges(&self) -> usize {
        let mut balance: HashMap<(u32, u32), i64> = HashMap::new();
        for t in &self.triangles {
            for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                // Key by the unordered pair, signed by direction
                if a < b {
                    *balance.entry((a, b)).or_default() += 1;
                } else {
                    *balance.entry((b, a)).or_default() -= 1;
                }
            }
        }
        balance.values().map(|d| d.unsigned_abs() as usize).sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests;

//! Reinforcement hoop as a thin circular band.
//!
//! The circle is sampled over `[0, 2π]` so the last sample duplicates the
//! first. The seam is left open: no triangles join the last and first
//! sample, and the band is an open strip of `2(k − 1)` triangles.

use std::f64::consts::TAU;

use tracing::trace;

use crate::arc::{lift, sample_arc};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::segment::HoopSpec;

/// Builds one reinforcement hoop.
///
/// ```rust
/// use lining_mesh::builders::HoopBuilder;
/// use lining_mesh::HoopSpec;
///
/// let hoop = HoopSpec { mid_radius: 4.45, tube_radius: 0.03, y_position: 0.42 };
/// let mesh = HoopBuilder::new(30).build(&hoop).unwrap();
/// assert_eq!(mesh.vertex_count(), 60);
/// assert_eq!(mesh.triangle_count(), 58);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoopBuilder {
    resolution: u32,
}

impl HoopBuilder {
    /// Builder sampling the circle at `resolution` angles.
    #[must_use]
    pub fn new(resolution: u32) -> Self {
        Self { resolution }
    }

    /// Samples around the circle, seam included twice.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Build the band spanning `y_position ± tube_radius` at `mid_radius`.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` if `tube_radius ≤ 0`, `mid_radius ≤ tube_radius`,
    /// or `resolution < 2`.
    pub fn build(&self, hoop: &HoopSpec) -> MeshResult<Mesh> {
        hoop.validate()?;
        let circle = sample_arc(0.0, TAU, hoop.mid_radius, self.resolution)?;

        let k = circle.len() as u32;
        let mut mesh = Mesh::with_capacity(2 * circle.len(), 2 * (circle.len() - 1));
        for y in [hoop.y_position - hoop.tube_radius, hoop.y_position + hoop.tube_radius] {
            for &p in &circle {
                mesh.add_vertex(lift(p, y));
            }
        }

        for i in 0..k - 1 {
            mesh.add_quad(i, k + i, k + i + 1, i + 1);
        }

        trace!(y = hoop.y_position, triangles = mesh.triangle_count(), "hoop built");
        Ok(mesh)
    }
}

//! Vertex welding for meshes assembled from polygon soups.

use std::collections::HashMap;

use config::constants::VERTEX_WELD_SCALE;
use glam::DVec3;

use super::Mesh;

/// Helper for welding duplicate vertices during mesh construction.
///
/// Positions are quantized to [`VERTEX_WELD_SCALE`] cells; two positions
/// that fall in the same cell share one vertex. Normals are not compared:
/// output meshes are flat-shaded by the viewer.
#[derive(Debug, Default)]
pub struct VertexWelder {
    cache: HashMap<[i64; 3], u32>,
}

impl VertexWelder {
    /// Create new vertex welder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertex to mesh, returning index (may reuse existing vertex).
    pub fn add(&mut self, mesh: &mut Mesh, position: DVec3) -> u32 {
        let key = [
            (position.x * VERTEX_WELD_SCALE).round() as i64,
            (position.y * VERTEX_WELD_SCALE).round() as i64,
            (position.z * VERTEX_WELD_SCALE).round() as i64,
        ];
        *self
            .cache
            .entry(key)
            .or_insert_with(|| mesh.add_vertex(position))
    }
}

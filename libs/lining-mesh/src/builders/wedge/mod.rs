//! Ring segment as an open shell, by parametric extrusion of sampled arcs.
//!
//! ```text
//!   y = y_offset + width        back-outer  3k ... back-inner (reversed)
//!          ▲                        ┌───────────────┐
//!          │    outer skin  ───►    │               │   ◄─── inner skin
//!          │                        └───────────────┘
//!   y = y_offset               front-outer 0..k   front-inner k..2k (reversed)
//! ```
//!
//! The inner arc is stored in reverse so that outer and inner samples follow
//! one rotational sense around the cross-section loop.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::MeshBuilder;
use crate::arc::{lift, sample_arc};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::segment::RingSegmentSpec;

/// Triangulation scheme of an extruded wedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WedgeStyle {
    /// Front wall, back wall, outer skin and inner skin.
    ///
    /// `4k` vertices and `8(k − 1)` triangles for resolution `k`.
    #[default]
    FourWall,
    /// The closed cross-section loop (outer arc, reversed inner arc) swept
    /// along the axis: outer skin, inner skin and both radial joint faces.
    ///
    /// `4k` vertices and `4k` triangles for resolution `k`.
    Profile,
}

/// Extrusion builder for ring segments.
///
/// ## Example
///
/// ```rust
/// use lining_mesh::builders::{MeshBuilder, WedgeBuilder, WedgeStyle};
/// use lining_mesh::RingSegmentSpec;
///
/// let builder = WedgeBuilder::new(10, WedgeStyle::FourWall);
/// let segment = RingSegmentSpec {
///     angle_start: 0.0,
///     angle_end: std::f64::consts::FRAC_PI_3,
///     inner_radius: 4.4,
///     outer_radius: 4.7,
///     y_offset: 0.0,
///     width: 2.1,
/// };
/// let mesh = builder.build(&segment).unwrap();
/// assert_eq!(mesh.vertex_count(), 40);
/// assert_eq!(mesh.triangle_count(), 72);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WedgeBuilder {
    resolution: u32,
    style: WedgeStyle,
}

impl WedgeBuilder {
    /// Builder sampling each arc at `resolution` angles.
    ///
    /// The resolution is checked by the arc sampler on every build.
    #[must_use]
    pub fn new(resolution: u32, style: WedgeStyle) -> Self {
        Self { resolution, style }
    }

    /// Arc samples per segment.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Triangulation scheme.
    #[must_use]
    pub fn style(&self) -> WedgeStyle {
        self.style
    }
}

impl MeshBuilder for WedgeBuilder {
    fn build(&self, segment: &RingSegmentSpec) -> MeshResult<Mesh> {
        segment.validate()?;

        let outer = sample_arc(
            segment.angle_start,
            segment.angle_end,
            segment.outer_radius,
            self.resolution,
        )?;
        let mut inner = sample_arc(
            segment.angle_start,
            segment.angle_end,
            segment.inner_radius,
            self.resolution,
        )?;
        inner.reverse();

        let y_front = segment.y_offset;
        let y_back = segment.y_offset + segment.width;

        let mesh = match self.style {
            WedgeStyle::FourWall => four_wall(&outer, &inner, y_front, y_back),
            WedgeStyle::Profile => profile(&outer, &inner, y_front, y_back),
        };
        trace!(
            style = ?self.style,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "wedge built"
        );
        Ok(mesh)
    }

    fn name(&self) -> &'static str {
        match self.style {
            WedgeStyle::FourWall => "wedge",
            WedgeStyle::Profile => "profile-wedge",
        }
    }

    fn work_per_segment(&self) -> usize {
        self.resolution as usize
    }
}

fn four_wall(outer: &[DVec2], inner: &[DVec2], y_front: f64, y_back: f64) -> Mesh {
    let k = outer.len() as u32;
    let mut mesh = Mesh::with_capacity(4 * outer.len(), 8 * (outer.len() - 1));

    for (arc, y) in [(outer, y_front), (inner, y_front), (outer, y_back), (inner, y_back)] {
        for &p in arc {
            mesh.add_vertex(lift(p, y));
        }
    }

    let front_outer = |i: u32| i;
    let front_inner = |i: u32| k + (k - 1 - i);
    let back_outer = |i: u32| 2 * k + i;
    let back_inner = |i: u32| 3 * k + (k - 1 - i);

    // `i` walks the angles; inner samples are looked up at the same angle
    for i in 0..k - 1 {
        let n = i + 1;
        // front wall faces -y
        mesh.add_quad(front_outer(i), front_outer(n), front_inner(n), front_inner(i));
        // back wall faces +y
        mesh.add_quad(back_outer(i), back_inner(i), back_inner(n), back_outer(n));
        // outer skin faces away from the axis
        mesh.add_quad(front_outer(i), back_outer(i), back_outer(n), front_outer(n));
        // inner skin faces the axis
        mesh.add_quad(front_inner(i), front_inner(n), back_inner(n), back_inner(i));
    }

    mesh
}

fn profile(outer: &[DVec2], inner: &[DVec2], y_front: f64, y_back: f64) -> Mesh {
    let outline: Vec<DVec2> = outer.iter().chain(inner).copied().collect();
    let n = outline.len() as u32;
    let mut mesh = Mesh::with_capacity(2 * outline.len(), 2 * outline.len());

    for y in [y_front, y_back] {
        for &p in &outline {
            mesh.add_vertex(lift(p, y));
        }
    }

    // The outline runs counter-clockwise in the x/z plane, so e_y × edge
    // points out of the segment.
    for j in 0..n {
        let next = (j + 1) % n;
        mesh.add_quad(j, n + j, n + next, next);
    }

    mesh
}

//! Ring segment as a closed solid, by cylinder subtraction and plane slicing.
//!
//! The construction runs in a frame whose z axis is the tunnel axis:
//!
//! ```text
//! outer cylinder z ∈ [0, w]
//!   − inner cylinder z ∈ [−δ, w + δ]        (hollow ring)
//!   ∩ {sin θs·x − cos θs·y ≤ 0}             (at or after angle_start)
//!   ∩ {−sin θe·x + cos θe·y ≤ 0}            (at or before angle_end)
//! ```
//!
//! and is then turned onto the tunnel's y axis.

use std::f64::consts::{FRAC_PI_2, PI};

use config::constants::{CSG_CUTTER_OVERLAP, EPSILON_TOLERANCE, MIN_CSG_SEGMENTS};
use glam::{DMat4, DVec3};
use tracing::trace;

use super::MeshBuilder;
use crate::csg::{Plane, Solid};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::segment::RingSegmentSpec;

/// CSG builder for ring segments.
///
/// ## Example
///
/// ```rust
/// use lining_mesh::builders::{CsgRingBuilder, MeshBuilder};
/// use lining_mesh::RingSegmentSpec;
///
/// let segment = RingSegmentSpec {
///     angle_start: 0.0,
///     angle_end: std::f64::consts::FRAC_PI_2,
///     inner_radius: 4.4,
///     outer_radius: 4.7,
///     y_offset: 0.0,
///     width: 2.1,
/// };
/// let mesh = CsgRingBuilder::new(48).build(&segment).unwrap();
/// assert!(mesh.signed_volume() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsgRingBuilder {
    circular_segments: u32,
}

impl CsgRingBuilder {
    /// Builder approximating each cylinder by `circular_segments` facets.
    #[must_use]
    pub fn new(circular_segments: u32) -> Self {
        Self { circular_segments }
    }

    /// Facets per full cylinder.
    #[must_use]
    pub fn circular_segments(&self) -> u32 {
        self.circular_segments
    }

    fn check(&self, segment: &RingSegmentSpec) -> MeshResult<()> {
        if segment.inner_radius <= 0.0 {
            return Err(MeshError::degenerate(
                "difference",
                format!(
                    "inner radius {} leaves no cutter to subtract",
                    segment.inner_radius
                ),
            ));
        }
        segment.validate()?;
        if self.circular_segments < MIN_CSG_SEGMENTS {
            return Err(MeshError::invalid(format!(
                "circular segments must be >= {MIN_CSG_SEGMENTS}: {}",
                self.circular_segments
            )));
        }
        if segment.sweep_angle() > PI + EPSILON_TOLERANCE {
            return Err(MeshError::invalid(format!(
                "CSG segments cannot sweep more than π: {}",
                segment.sweep_angle()
            )));
        }
        Ok(())
    }
}

impl MeshBuilder for CsgRingBuilder {
    fn build(&self, segment: &RingSegmentSpec) -> MeshResult<Mesh> {
        self.check(segment)?;

        let width = segment.width;
        let outer = Solid::cylinder(segment.outer_radius, 0.0, width, self.circular_segments)?;
        let cutter = Solid::cylinder(
            segment.inner_radius,
            -CSG_CUTTER_OVERLAP,
            width + CSG_CUTTER_OVERLAP,
            self.circular_segments,
        )?;
        let ring = outer.difference(&cutter);
        if ring.is_empty() {
            return Err(MeshError::degenerate("difference", "hollow ring is empty"));
        }

        let (sin_s, cos_s) = segment.angle_start.sin_cos();
        let (sin_e, cos_e) = segment.angle_end.sin_cos();
        let mut solid = ring;
        for normal in [DVec3::new(sin_s, -cos_s, 0.0), DVec3::new(-sin_e, cos_e, 0.0)] {
            let plane = Plane::new(normal, 0.0)
                .ok_or_else(|| MeshError::invalid(format!("invalid slice normal {normal}")))?;
            solid = solid.slice(&plane)?;
            if solid.is_empty() {
                return Err(MeshError::degenerate(
                    "slice",
                    format!(
                        "nothing left between angles {} and {}",
                        segment.angle_start, segment.angle_end
                    ),
                ));
            }
        }

        let mut mesh = solid.to_mesh();
        mesh.transform(DMat4::from_rotation_x(FRAC_PI_2));
        mesh.translate(DVec3::new(0.0, segment.y_offset + width, 0.0));
        trace!(
            polygons = solid.polygons().len(),
            triangles = mesh.triangle_count(),
            unpaired_edges = mesh.unpaired_edges(),
            "csg ring segment built"
        );
        Ok(mesh)
    }

    fn name(&self) -> &'static str {
        "csg"
    }

    fn work_per_segment(&self) -> usize {
        self.circular_segments as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, TAU};

    const N: u32 = 48;
    const TOL: f64 = 1e-6;

    fn segment(angle_start: f64, angle_end: f64) -> RingSegmentSpec {
        RingSegmentSpec {
            angle_start,
            angle_end,
            inner_radius: 4.4,
            outer_radius: 4.7,
            y_offset: 4.2,
            width: 2.1,
        }
    }

    /// Every vertex lies within the segment's radial, angular and axial bounds.
    fn assert_within(mesh: &Mesh, seg: &RingSegmentSpec) {
        let (sin_s, cos_s) = seg.angle_start.sin_cos();
        let (sin_e, cos_e) = seg.angle_end.sin_cos();
        let min_radius = seg.inner_radius * (PI / f64::from(N)).cos();
        for v in &mesh.vertices {
            let rho = (v.x * v.x + v.z * v.z).sqrt();
            assert!(rho >= min_radius - TOL && rho <= seg.outer_radius + TOL, "radius {rho}");
            assert!(v.z * cos_s - v.x * sin_s >= -TOL, "{v} before angle_start");
            assert!(v.x * sin_e - v.z * cos_e >= -TOL, "{v} after angle_end");
            assert!(v.y >= seg.y_offset - TOL && v.y <= seg.y_offset + seg.width + TOL);
        }
    }

    fn sector_volume(seg: &RingSegmentSpec) -> f64 {
        0.5 * seg.sweep_angle()
            * (seg.outer_radius.powi(2) - seg.inner_radius.powi(2))
            * seg.width
    }

    #[test]
    fn quarter_segment_bounds_and_volume() {
        let seg = segment(0.0, PI / 2.0);
        let mesh = CsgRingBuilder::new(N).build(&seg).unwrap();
        mesh.validate_indices().unwrap();
        assert_eq!(mesh.unpaired_edges(), 0);
        assert_within(&mesh, &seg);
        assert_relative_eq!(mesh.signed_volume(), sector_volume(&seg), max_relative = 0.03);
        let (min, max) = mesh.bounding_box().unwrap();
        assert_relative_eq!(min.y, seg.y_offset, epsilon = TOL);
        assert_relative_eq!(max.y, seg.y_offset + seg.width, epsilon = TOL);
    }

    #[test]
    fn staggered_and_rotated_segments() {
        for (start, end) in [
            (FRAC_PI_3 / 2.0, FRAC_PI_3 * 1.5),
            (PI, PI + FRAC_PI_4),
            (5.0 * FRAC_PI_3, TAU),
            (TAU - 0.3, TAU + 0.5),
        ] {
            let seg = segment(start, end);
            let mesh = CsgRingBuilder::new(N).build(&seg).unwrap();
            assert_eq!(mesh.unpaired_edges(), 0, "{seg:?}");
            assert_within(&mesh, &seg);
            assert_relative_eq!(mesh.signed_volume(), sector_volume(&seg), max_relative = 0.03);
        }
    }

    #[test]
    fn half_turn_segment() {
        let seg = segment(0.3, 0.3 + PI);
        let mesh = CsgRingBuilder::new(N).build(&seg).unwrap();
        assert_eq!(mesh.unpaired_edges(), 0);
        assert_within(&mesh, &seg);
        assert_relative_eq!(mesh.signed_volume(), sector_volume(&seg), max_relative = 0.03);
    }

    #[test]
    fn cylinder_axis_maps_onto_y() {
        // A segment around angle 0 sits on +x; one around π/2 sits on +z
        let east = CsgRingBuilder::new(N).build(&segment(-0.2, 0.2)).unwrap();
        let (min, _) = east.bounding_box().unwrap();
        assert!(min.x > 4.0);

        let north = CsgRingBuilder::new(N).build(&segment(1.37, 1.77)).unwrap();
        let (min, _) = north.bounding_box().unwrap();
        assert!(min.z > 4.0);
    }

    #[test]
    fn rejects_non_positive_inner_radius() {
        let seg = RingSegmentSpec { inner_radius: 0.0, ..segment(0.0, 1.0) };
        assert!(matches!(
            CsgRingBuilder::new(N).build(&seg),
            Err(MeshError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let builder = CsgRingBuilder::new(N);
        for seg in [
            segment(0.0, PI + 0.1),
            segment(1.0, 1.0),
            RingSegmentSpec { width: 0.0, ..segment(0.0, 1.0) },
            RingSegmentSpec { inner_radius: 4.8, ..segment(0.0, 1.0) },
        ] {
            assert!(
                matches!(builder.build(&seg), Err(MeshError::InvalidParameter(_))),
                "{seg:?} should be rejected"
            );
        }
        assert!(matches!(
            CsgRingBuilder::new(2).build(&segment(0.0, 1.0)),
            Err(MeshError::InvalidParameter(_))
        ));
    }

    #[test]
    fn builder_metadata() {
        let builder = CsgRingBuilder::new(36);
        assert_eq!(builder.circular_segments(), 36);
        assert_eq!(builder.name(), "csg");
        assert_eq!(builder.work_per_segment(), 36);
    }
}

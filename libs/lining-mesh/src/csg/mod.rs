//! # Solid Modeling
//!
//! Constructive solid geometry over convex polygon soups, used by the CSG
//! ring builder.
//!
//! ## Supported Operations
//!
//! | Operation | Result | Example |
//! |-----------|--------|---------|
//! | Difference | Subtracted volume | `A - B` |
//! | Intersection | Common volume | `A ∩ B` |
//! | Slice | Part behind a plane | `A ∩ {p : n·p ≤ w}` |
//!
//! ## Algorithm
//!
//! ```text
//! 1. Build a BSP tree from each operand's polygons
//! 2. Clip each tree against the other
//! 3. Merge the surviving polygons into one tree
//! 4. Weld, close T-junctions and triangulate into a Mesh
//! ```
//!
//! Operands must be closed and outward-wound. Coplanar faces between the two
//! operands are resolved by orientation, but callers avoid them where they
//! can: the ring builder extends its cutter past the caps of the solid it
//! cuts.
//!
//! ## Module Structure
//!
//! - `mod.rs` - `Solid` and its operations (this file)
//! - `bsp.rs` - BSP tree implementation
//! - `polygon.rs` - Planes, polygons and plane splitting

mod bsp;
mod polygon;


use std::f64::consts::TAU;

use config::constants::{CSG_PLANE_EPSILON, VERTEX_WELD_SCALE};
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::weld::VertexWelder;
use crate::mesh::Mesh;

use bsp::BspNode;
pub use polygon::{Plane, Polygon};

// =============================================================================
// SOLID
// =============================================================================

/// Closed solid bounded by convex polygons with outward normals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// Solid bounded by `polygons`.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Boundary polygons.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// True when no boundary is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Largest distance of a boundary vertex from the origin.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.vertices().map(DVec3::length).fold(0.0, f64::max)
    }

    fn vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.polygons.iter().flat_map(|p| p.vertices.iter().copied())
    }

    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Prism of `segments` sides approximating the cylinder of `radius`
    /// around the z axis between `z_min` and `z_max`.
    ///
    /// Each cap is a single convex polygon.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` if `radius ≤ 0`, `z_max ≤ z_min`, or
    /// `segments < 3`.
    pub fn cylinder(radius: f64, z_min: f64, z_max: f64, segments: u32) -> MeshResult<Self> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(MeshError::invalid(format!(
                "cylinder radius must be positive: {radius}"
            )));
        }
        if z_max <= z_min || !z_min.is_finite() || !z_max.is_finite() {
            return Err(MeshError::invalid(format!(
                "cylinder span must be increasing: [{z_min}, {z_max}]"
            )));
        }
        if segments < 3 {
            return Err(MeshError::invalid(format!(
                "cylinder needs at least 3 segments: {segments}"
            )));
        }

        let ring = |z: f64| -> Vec<DVec3> {
            (0..segments)
                .map(|i| {
                    let (sin, cos) = (TAU * f64::from(i) / f64::from(segments)).sin_cos();
                    DVec3::new(radius * cos, radius * sin, z)
                })
                .collect()
        };
        let bottom = ring(z_min);
        let top = ring(z_max);

        let n = segments as usize;
        let mut loops = Vec::with_capacity(n + 2);
        for i in 0..n {
            let j = (i + 1) % n;
            loops.push(vec![bottom[i], bottom[j], top[j], top[i]]);
        }
        loops.push(top);
        loops.push(bottom.into_iter().rev().collect());

        Self::from_loops(loops, "cylinder")
    }

    /// Box standing for the half-space behind `plane`.
    ///
    /// One face lies on `plane`; the box reaches `2 · extent` behind it and
    /// `extent` to each side of the plane's foot point.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` if `extent ≤ 0`.
    pub fn half_space(plane: &Plane, extent: f64) -> MeshResult<Self> {
        if extent <= 0.0 || !extent.is_finite() {
            return Err(MeshError::invalid(format!(
                "half-space extent must be positive: {extent}"
            )));
        }

        let n = plane.normal;
        let u = n.any_orthonormal_vector();
        let v = n.cross(u);
        let origin = n * plane.w;

        let corner =
            |a: f64, b: f64, depth: f64| origin + u * (a * extent) + v * (b * extent) - n * depth;
        let corners: [DVec3; 8] = [
            corner(-1.0, -1.0, 0.0),
            corner(1.0, -1.0, 0.0),
            corner(1.0, 1.0, 0.0),
            corner(-1.0, 1.0, 0.0),
            corner(-1.0, -1.0, 2.0 * extent),
            corner(1.0, -1.0, 2.0 * extent),
            corner(1.0, 1.0, 2.0 * extent),
            corner(-1.0, 1.0, 2.0 * extent),
        ];
        let center = origin - n * extent;

        let faces: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
        ];
        let loops = faces
            .iter()
            .map(|face| {
                let mut quad: Vec<DVec3> = face.iter().map(|&i| corners[i]).collect();
                let face_center = quad.iter().copied().sum::<DVec3>() / 4.0;
                let normal = (quad[1] - quad[0]).cross(quad[2] - quad[0]);
                if normal.dot(face_center - center) < 0.0 {
                    quad.reverse();
                }
                quad
            })
            .collect();

        Self::from_loops(loops, "half-space")
    }

    fn from_loops(loops: Vec<Vec<DVec3>>, what: &str) -> MeshResult<Self> {
        loops
            .into_iter()
            .map(|l| {
                Polygon::new(l)
                    .ok_or_else(|| MeshError::invalid(format!("{what} has a degenerate face")))
            })
            .collect::<MeshResult<Vec<_>>>()
            .map(Self::from_polygons)
    }

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// `self − other`: the volume of `self` outside `other`.
    #[must_use]
    pub fn difference(&self, other: &Solid) -> Solid {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();

        Self::from_polygons(a.all_polygons())
    }

    /// `self ∩ other`: the volume inside both.
    #[must_use]
    pub fn intersection(&self, other: &Solid) -> Solid {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(b.all_polygons());
        a.invert();

        Self::from_polygons(a.all_polygons())
    }

    /// Keep the part of the solid behind `plane` (`n·p ≤ w`).
    ///
    /// A solid with no vertex in front of the plane is returned unchanged, and
    /// one with no vertex behind it vanishes; only a solid the plane actually
    /// crosses goes through the boolean kernel. This keeps a face lying on the
    /// plane (a half-turn wedge sliced twice by the same plane) out of the
    /// kernel.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` if the half-space box cannot be built.
    pub fn slice(&self, plane: &Plane) -> MeshResult<Solid> {
        let (mut ahead, mut behind) = (false, false);
        for v in self.vertices() {
            let d = plane.distance(v);
            ahead |= d > CSG_PLANE_EPSILON;
            behind |= d < -CSG_PLANE_EPSILON;
        }
        match (ahead, behind) {
            (false, _) => Ok(self.clone()),
            (true, false) => Ok(Self::default()),
            (true, true) => {
                let extent = 2.0 * (self.bounding_radius() + plane.w.abs()) + 1.0;
                Ok(self.intersection(&Self::half_space(plane, extent)?))
            }
        }
    }

    // =========================================================================
    // MESH CONVERSION
    // =========================================================================

    /// Weld shared positions and triangulate every polygon into one
    /// edge-closed mesh.
    ///
    /// The BSP clip splits neighbouring polygons at different points, which
    /// leaves T-junctions. Every welded vertex lying strictly inside a
    /// polygon edge is inserted into that polygon's loop first, so each edge
    /// meets exactly one reversed partner. Loops that received a vertex are
    /// fanned from their centroid, since a corner fan would emit zero-area
    /// triangles along the inserted run.
    #[must_use]
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new();
        let mut welder = VertexWelder::new();

        let loops: Vec<Vec<u32>> = self
            .polygons
            .iter()
            .map(|polygon| {
                let mut indices: Vec<u32> = polygon
                    .vertices
                    .iter()
                    .map(|&v| welder.add(&mut mesh, v))
                    .collect();
                indices.dedup();
                while indices.len() > 1 && indices.first() == indices.last() {
                    indices.pop();
                }
                indices
            })
            .collect();
        let welded = mesh.vertices.clone();

        for indices in loops {
            if indices.len() < 3 {
                continue;
            }
            let ring = close_t_junctions(&indices, &welded);
            if ring.len() == indices.len() {
                for i in 1..ring.len() - 1 {
                    let (a, b, c) = (ring[0], ring[i], ring[i + 1]);
                    // Welding can collapse a sliver to a line
                    if a != b && b != c && a != c {
                        mesh.add_triangle(a, b, c);
                    }
                }
                continue;
            }

            let points: Vec<DVec3> = ring.iter().map(|&i| welded[i as usize]).collect();
            if Plane::from_vertices(&points).is_none() {
                continue;
            }
            let center = points.iter().copied().sum::<DVec3>() / points.len() as f64;
            let c = mesh.add_vertex(center);
            for (i, &a) in ring.iter().enumerate() {
                mesh.add_triangle(c, a, ring[(i + 1) % ring.len()]);
            }
        }

        mesh
    }
}

/// `indices` with every welded vertex that lies strictly inside one of its
/// edges spliced in, in order along the edge.
fn close_t_junctions(indices: &[u32], positions: &[DVec3]) -> Vec<u32> {
    let tolerance = 1.0 / VERTEX_WELD_SCALE;
    let mut ring = Vec::with_capacity(indices.len());
    for (i, &a) in indices.iter().enumerate() {
        let b = indices[(i + 1) % indices.len()];
        ring.push(a);

        let (pa, pb) = (positions[a as usize], positions[b as usize]);
        let edge = pb - pa;
        let length = edge.length();
        if length <= 2.0 * tolerance {
            continue;
        }
        let direction = edge / length;

        let mut inside: Vec<(f64, u32)> = positions
            .iter()
            .enumerate()
            .filter_map(|(v, &p)| {
                let along = (p - pa).dot(direction);
                if along <= tolerance || along >= length - tolerance {
                    return None;
                }
                let offset = (pa + direction * along - p).length();
                (offset <= tolerance).then_some((along, v as u32))
            })
            .collect();
        inside.sort_by(|x, y| x.0.total_cmp(&y.0));
        ring.extend(inside.into_iter().map(|(_, v)| v));
    }
    ring
}

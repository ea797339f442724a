//! # Polygon Operations
//!
//! Planes, convex polygons and plane splitting for the BSP boolean kernel.

use config::constants::{CSG_PLANE_EPSILON, EPSILON_TOLERANCE};
use glam::DVec3;

// =============================================================================
// PLANE
// =============================================================================

/// Oriented plane `dot(normal, p) = w`.
///
/// Points with `dot(normal, p) > w` are on the front (positive) side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing to the front side.
    pub normal: DVec3,
    /// Signed distance from the origin.
    pub w: f64,
}

impl Plane {
    /// Plane with the given normal through the point `normal · w`.
    ///
    /// Returns `None` for a zero or non-finite normal.
    #[must_use]
    pub fn new(normal: DVec3, w: f64) -> Option<Self> {
        let length = normal.length();
        if !length.is_finite() || length < EPSILON_TOLERANCE || !w.is_finite() {
            return None;
        }
        Some(Self { normal: normal / length, w: w / length })
    }

    /// Best-fit plane of a closed vertex loop (Newell's method).
    ///
    /// Returns `None` if the loop encloses no area.
    #[must_use]
    pub fn from_vertices(vertices: &[DVec3]) -> Option<Self> {
        let mut normal = DVec3::ZERO;
        let mut centroid = DVec3::ZERO;
        for (i, &a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            normal += a.cross(b);
            centroid += a;
        }
        if vertices.len() < 3 || normal.length() < EPSILON_TOLERANCE {
            return None;
        }
        let normal = normal.normalize();
        Some(Self { normal, w: normal.dot(centroid / vertices.len() as f64) })
    }

    /// Signed distance of `point` from the plane.
    #[inline]
    #[must_use]
    pub fn distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Swap front and back.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }
}

// =============================================================================
// POLYGON
// =============================================================================

/// Convex planar polygon, counter-clockwise seen from the front of `plane`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Boundary loop.
    pub vertices: Vec<DVec3>,
    /// Supporting plane; its normal is the polygon's outward normal.
    pub plane: Plane,
}

impl Polygon {
    /// Polygon from a counter-clockwise loop of at least three vertices.
    ///
    /// Returns `None` when the loop is degenerate.
    #[must_use]
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        let plane = Plane::from_vertices(&vertices)?;
        Some(Self { vertices, plane })
    }

    /// Polygon that keeps its parent's plane (fragments of a split).
    fn fragment(vertices: Vec<DVec3>, plane: Plane) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices, plane })
    }

    /// Reverse vertex order and flip the plane (inside-out conversion).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }
}

// =============================================================================
// POLYGON SPLITTING
// =============================================================================

/// Where a polygon ends up relative to a splitting plane.
#[derive(Debug, Clone, PartialEq)]
pub enum Split {
    /// On the plane, facing the same way.
    CoplanarFront(Polygon),
    /// On the plane, facing the other way.
    CoplanarBack(Polygon),
    /// Entirely on the positive side.
    Front(Polygon),
    /// Entirely on the negative side.
    Back(Polygon),
    /// Crossing the plane; either part may vanish below three vertices.
    Spanning {
        /// Part on the positive side.
        front: Option<Polygon>,
        /// Part on the negative side.
        back: Option<Polygon>,
    },
}

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = FRONT | BACK;

/// Classify `polygon` against `plane`, splitting it when it spans the plane.
///
/// Vertices within [`CSG_PLANE_EPSILON`] of the plane count as on it and are
/// shared by both parts of a split.
#[must_use]
pub fn split_polygon(polygon: Polygon, plane: &Plane) -> Split {
    let types: Vec<u8> = polygon
        .vertices
        .iter()
        .map(|&v| {
            let d = plane.distance(v);
            if d < -CSG_PLANE_EPSILON {
                BACK
            } else if d > CSG_PLANE_EPSILON {
                FRONT
            } else {
                COPLANAR
            }
        })
        .collect();

    match types.iter().fold(COPLANAR, |acc, t| acc | t) {
        COPLANAR if plane.normal.dot(polygon.plane.normal) > 0.0 => Split::CoplanarFront(polygon),
        COPLANAR => Split::CoplanarBack(polygon),
        FRONT => Split::Front(polygon),
        BACK => Split::Back(polygon),
        _ => split_spanning(&polygon, plane, &types),
    }
}

fn split_spanning(polygon: &Polygon, plane: &Plane, types: &[u8]) -> Split {
    let n = polygon.vertices.len();
    let mut front = Vec::with_capacity(n + 1);
    let mut back = Vec::with_capacity(n + 1);

    for i in 0..n {
        let j = (i + 1) % n;
        let (ti, tj) = (types[i], types[j]);
        let (vi, vj) = (polygon.vertices[i], polygon.vertices[j]);

        if ti != BACK {
            front.push(vi);
        }
        if ti != FRONT {
            back.push(vi);
        }
        if ti | tj == SPANNING {
            let edge = vj - vi;
            let t = (plane.w - plane.normal.dot(vi)) / plane.normal.dot(edge);
            let crossing = vi + edge * t;
            front.push(crossing);
            back.push(crossing);
        }
    }

    Split::Spanning {
        front: Polygon::fragment(front, polygon.plane),
        back: Polygon::fragment(back, polygon.plane),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle(z: [f64; 3]) -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, z[0]),
            DVec3::new(1.0, 0.0, z[1]),
            DVec3::new(0.0, 1.0, z[2]),
        ])
        .unwrap()
    }

    fn xy_plane() -> Plane {
        Plane::new(DVec3::Z, 0.0).unwrap()
    }

    #[test]
    fn test_newell_normal_follows_winding() {
        let poly = triangle([0.0; 3]);
        assert_relative_eq!(poly.plane.normal.z, 1.0);
        assert_relative_eq!(poly.plane.w, 0.0);

        let mut flipped = poly.clone();
        flipped.flip();
        assert_relative_eq!(flipped.plane.normal.z, -1.0);
        assert_eq!(flipped.vertices[0], poly.vertices[2]);
    }

    #[test]
    fn test_degenerate_loops_rejected() {
        assert!(Polygon::new(vec![DVec3::ZERO, DVec3::X]).is_none());
        assert!(Polygon::new(vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0]).is_none());
        assert!(Plane::new(DVec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_plane_new_normalizes() {
        let plane = Plane::new(DVec3::new(0.0, 2.0, 0.0), 4.0).unwrap();
        assert_relative_eq!(plane.normal.y, 1.0);
        assert_relative_eq!(plane.w, 2.0);
        assert_relative_eq!(plane.distance(DVec3::new(5.0, 3.0, 1.0)), 1.0);
    }

    #[test]
    fn test_split_front_back() {
        assert!(matches!(split_polygon(triangle([1.0; 3]), &xy_plane()), Split::Front(_)));
        assert!(matches!(split_polygon(triangle([-1.0; 3]), &xy_plane()), Split::Back(_)));
        // touching the plane with one vertex is not spanning
        assert!(matches!(
            split_polygon(triangle([0.0, 1.0, 1.0]), &xy_plane()),
            Split::Front(_)
        ));
    }

    #[test]
    fn test_split_coplanar_by_orientation() {
        assert!(matches!(
            split_polygon(triangle([0.0; 3]), &xy_plane()),
            Split::CoplanarFront(_)
        ));
        let mut down = triangle([0.0; 3]);
        down.flip();
        assert!(matches!(split_polygon(down, &xy_plane()), Split::CoplanarBack(_)));
    }

    #[test]
    fn test_split_spanning() {
        let poly = triangle([-1.0, 1.0, 1.0]);
        let Split::Spanning { front: Some(front), back: Some(back) } =
            split_polygon(poly.clone(), &xy_plane())
        else {
            panic!("expected a two-sided split");
        };
        assert_eq!(front.vertices.len(), 4);
        assert_eq!(back.vertices.len(), 3);
        assert_eq!(front.plane, poly.plane);
        for v in front.vertices.iter().chain(&back.vertices) {
            if v.z.abs() < 1e-12 {
                continue;
            }
            assert!(poly.vertices.contains(v));
        }
        assert!(back.vertices.iter().all(|v| v.z <= 1e-12));
        assert!(front.vertices.iter().all(|v| v.z >= -1e-12));
    }

    #[test]
    fn test_split_through_vertex() {
        // One vertex on the plane: both halves share it, no extra crossing
        let poly = Polygon::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, 1.0),
        ])
        .unwrap();
        let Split::Spanning { front: Some(front), back: Some(back) } =
            split_polygon(poly, &xy_plane())
        else {
            panic!("expected a two-sided split");
        };
        assert_eq!(front.vertices.len(), 3);
        assert_eq!(back.vertices.len(), 3);
    }
}

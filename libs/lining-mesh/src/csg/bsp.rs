//! # BSP Tree
//!
//! Binary space partitioning tree over a polygon soup.
//!
//! Each node stores a splitting plane, the polygons lying on it, and the
//! subtrees on its positive and negative sides. A tree built from a closed
//! solid encodes the solid itself: a missing back child is solid space, a
//! missing front child is empty space.
//!
//! ## References
//!
//! - Naylor, B. (1990). "Binary Space Partitioning Trees"
//! - Thibault, W. C., & Naylor, B. F. (1987). "Set operations on polyhedra using BSP trees"

use super::polygon::{split_polygon, Plane, Polygon, Split};

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
#[derive(Debug, Default)]
pub struct BspNode {
    /// Splitting plane (`None` until the first polygon arrives).
    plane: Option<Plane>,
    /// Polygons lying on `plane`, either orientation.
    polygons: Vec<Polygon>,
    /// Subtree on the positive side of `plane`.
    front: Option<Box<BspNode>>,
    /// Subtree on the negative side of `plane`.
    back: Option<Box<BspNode>>,
}

/// Polygons sorted to either side of a plane.
#[derive(Default)]
struct Sides {
    coplanar: Vec<Polygon>,
    front: Vec<Polygon>,
    back: Vec<Polygon>,
}

impl Sides {
    /// Partition `polygons` by `plane`.
    ///
    /// With `keep_coplanar`, on-plane polygons are collected apart; otherwise
    /// they follow their orientation.
    fn partition(polygons: Vec<Polygon>, plane: &Plane, keep_coplanar: bool) -> Self {
        let mut sides = Self::default();
        for polygon in polygons {
            match split_polygon(polygon, plane) {
                Split::CoplanarFront(p) | Split::CoplanarBack(p) if keep_coplanar => {
                    sides.coplanar.push(p);
                }
                Split::CoplanarFront(p) | Split::Front(p) => sides.front.push(p),
                Split::CoplanarBack(p) | Split::Back(p) => sides.back.push(p),
                Split::Spanning { front, back } => {
                    sides.front.extend(front);
                    sides.back.extend(back);
                }
            }
        }
        sides
    }
}

impl BspNode {
    /// Create empty BSP node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree built from `polygons`.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::new();
        node.build(polygons);
        node
    }

    /// Insert `polygons` into the tree, splitting them where they cross a
    /// node plane.
    ///
    /// The first polygon's plane becomes the splitting plane of an empty
    /// node.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let Some(first) = polygons.first() else {
            return;
        };
        let plane = *self.plane.get_or_insert(first.plane);

        let sides = Sides::partition(polygons, &plane, true);
        self.polygons.extend(sides.coplanar);
        if !sides.front.is_empty() {
            self.front.get_or_insert_with(Box::default).build(sides.front);
        }
        if !sides.back.is_empty() {
            self.back.get_or_insert_with(Box::default).build(sides.back);
        }
    }

    /// Convert solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for polygon in &mut self.polygons {
            polygon.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Remove the parts of `polygons` that lie inside the solid this tree
    /// encodes.
    #[must_use]
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = &self.plane else {
            return polygons;
        };

        let sides = Sides::partition(polygons, plane, false);
        let mut result = match &self.front {
            Some(front) => front.clip_polygons(sides.front),
            None => sides.front,
        };
        // Discard back polygons if no back tree
        if let Some(back) = &self.back {
            result.extend(back.clip_polygons(sides.back));
        }
        result
    }

    /// Remove every polygon of this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Collect all polygons from tree.
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

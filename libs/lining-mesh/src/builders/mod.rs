//! # Builders
//!
//! Pure mesh builders: parameters in, owned mesh out.
//!
//! ## Structure
//!
//! - `wedge`: ring segment as an open shell, by parametric extrusion of arcs
//! - `csg_ring`: ring segment as a closed solid, by cylinder subtraction and
//!   plane slicing
//! - `hoop`: one reinforcement hoop as an extruded circular band
//!
//! Both segment strategies implement [`MeshBuilder`] and are selected through
//! [`BuildStrategy`]; the assembler never sees their sampling resolution.

pub mod csg_ring;
pub mod hoop;
pub mod wedge;

use config::constants::ResolutionConfig;
use serde::{Deserialize, Serialize};

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::segment::RingSegmentSpec;

pub use csg_ring::CsgRingBuilder;
pub use hoop::HoopBuilder;
pub use wedge::{WedgeBuilder, WedgeStyle};

// =============================================================================
// BUILDER CAPABILITY
// =============================================================================

/// Capability shared by every ring segment strategy.
///
/// Implementations are stateless apart from their tessellation settings, so
/// one builder is shared by all worker threads of a generation request.
pub trait MeshBuilder: Send + Sync {
    /// Build the mesh of one ring segment.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` for geometry the strategy cannot represent;
    /// `DegenerateGeometry` when a solid operation leaves nothing behind.
    fn build(&self, segment: &RingSegmentSpec) -> MeshResult<Mesh>;

    /// Short strategy name for logs.
    fn name(&self) -> &'static str;

    /// Relative cost of one `build` call, used for the work bound.
    fn work_per_segment(&self) -> usize;
}

// =============================================================================
// STRATEGY SELECTION
// =============================================================================

/// Which ring segment construction a generation request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildStrategy {
    /// Parametric extrusion into an open shell.
    Extrusion(WedgeStyle),
    /// Boolean construction into a closed solid.
    Csg,
}

impl BuildStrategy {
    /// Instantiate the builder for this strategy.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use config::constants::ResolutionConfig;
    /// use lining_mesh::builders::{BuildStrategy, MeshBuilder};
    ///
    /// let builder = BuildStrategy::Csg.builder(&ResolutionConfig::default());
    /// assert_eq!(builder.name(), "csg");
    /// ```
    #[must_use]
    pub fn builder(&self, resolution: &ResolutionConfig) -> Box<dyn MeshBuilder> {
        match *self {
            Self::Extrusion(style) => {
                Box::new(WedgeBuilder::new(resolution.lining_resolution, style))
            }
            Self::Csg => Box::new(CsgRingBuilder::new(resolution.csg_segments)),
        }
    }
}

impl Default for BuildStrategy {
    fn default() -> Self {
        Self::Extrusion(WedgeStyle::default())
    }
}

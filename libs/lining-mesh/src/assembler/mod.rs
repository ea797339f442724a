//! # Tunnel Assembler
//!
//! Lays out every ring segment and hoop of a [`TunnelConfig`], builds them
//! as independent jobs, and returns the labeled meshes in a fixed order.
//!
//! ## Pipeline
//!
//! ```text
//! validate config + resolution → work bound → layout → build (rayon) → sort by MeshKey
//! ```
//!
//! Generation is all-or-nothing: if any job fails, the error of the first
//! failing job in [`MeshKey`] order is returned and no meshes are.

mod layout;


use std::fmt;

use config::constants::{ResolutionConfig, HOOP_OPACITY, LINING_OPACITY, MAX_GENERATION_WORK};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::builders::{BuildStrategy, HoopBuilder, MeshBuilder};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::segment::{HoopSpec, RingSegmentSpec};
use crate::style::{Color, Palette};
use crate::tunnel::TunnelConfig;

pub use layout::{hoop_layout, segment_layout};

// =============================================================================
// MESH IDENTITY
// =============================================================================

/// What a mesh depicts within its ring.
///
/// Segments order before hoops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeshPart {
    /// Lining segment, 0-based angular position.
    Segment(u32),
    /// Reinforcement hoop, 1-based position along the ring.
    Hoop(u32),
}

/// Identity and output position of one mesh.
///
/// Ordered ring-major, then by part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MeshKey {
    /// 0-based ring index.
    pub ring: u32,
    /// Part within the ring.
    pub part: MeshPart,
}

impl MeshKey {
    /// Key of segment `segment` in ring `ring`.
    #[must_use]
    pub fn segment(ring: u32, segment: u32) -> Self {
        Self { ring, part: MeshPart::Segment(segment) }
    }

    /// Key of hoop `hoop` (1-based) in ring `ring`.
    #[must_use]
    pub fn hoop(ring: u32, hoop: u32) -> Self {
        Self { ring, part: MeshPart::Hoop(hoop) }
    }
}

/// The viewer label: `Ring 1 Segment 3`, `Hoop 2 @ Ring 1`.
impl fmt::Display for MeshKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.part {
            MeshPart::Segment(s) => write!(f, "Ring {} Segment {}", self.ring + 1, s + 1),
            MeshPart::Hoop(h) => write!(f, "Hoop {h} @ Ring {}", self.ring + 1),
        }
    }
}

/// One independently rendered mesh with its display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMesh {
    /// Identity and output position.
    pub key: MeshKey,
    /// Viewer label, the `Display` form of `key`.
    pub label: String,
    /// Fill color.
    pub color: Color,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f32,
    /// Geometry.
    pub mesh: Mesh,
}

// =============================================================================
// OPTIONS
// =============================================================================

/// How a tunnel is turned into meshes.
///
/// ## Example
///
/// ```rust
/// use lining_mesh::{builders::BuildStrategy, GenerateOptions};
///
/// let options = GenerateOptions { strategy: BuildStrategy::Csg, ..GenerateOptions::default() };
/// assert!(options.parallel);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Ring segment construction.
    pub strategy: BuildStrategy,
    /// Tessellation settings.
    pub resolution: ResolutionConfig,
    /// Lining and reinforcement colors.
    pub palette: Palette,
    /// Build jobs on the rayon global pool.
    pub parallel: bool,
    /// Upper bound on the work of one request (see [`estimate_work`]).
    pub max_work: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            strategy: BuildStrategy::default(),
            resolution: ResolutionConfig::default(),
            palette: Palette::default(),
            parallel: true,
            max_work: MAX_GENERATION_WORK,
        }
    }
}

/// Work of one request: the per-segment cost of `builder` over every
/// visible segment, plus the hoop resolution over every visible hoop.
#[must_use]
pub fn estimate_work(
    config: &TunnelConfig,
    builder: &dyn MeshBuilder,
    hoop_resolution: u32,
) -> usize {
    let rings = config.num_rings as usize;
    let lining = if config.show_lining {
        rings * config.segments_per_ring as usize * builder.work_per_segment()
    } else {
        0
    };
    let hoops = if config.show_hoops {
        rings * config.hoops_per_ring as usize * hoop_resolution as usize
    } else {
        0
    };
    lining + hoops
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generate the tunnel with [`GenerateOptions::default`].
///
/// ## Errors
///
/// See [`generate_with`].
///
/// ## Example
///
/// ```rust
/// use lining_mesh::{generate, TunnelConfig};
///
/// let config = TunnelConfig { num_rings: 2, ..TunnelConfig::default() };
/// let meshes = generate(&config).unwrap();
/// // 6 segments and 4 hoops per ring
/// assert_eq!(meshes.len(), 20);
/// assert_eq!(meshes[0].label, "Ring 1 Segment 1");
/// assert_eq!(meshes[6].label, "Hoop 1 @ Ring 1");
/// ```
pub fn generate(config: &TunnelConfig) -> MeshResult<Vec<LabeledMesh>> {
    generate_with(config, &GenerateOptions::default())
}

enum Job {
    Segment(MeshKey, RingSegmentSpec),
    Hoop(MeshKey, HoopSpec),
}

impl Job {
    fn key(&self) -> MeshKey {
        match self {
            Job::Segment(key, _) | Job::Hoop(key, _) => *key,
        }
    }
}

/// Generate every visible mesh of the tunnel.
///
/// Meshes come back ring by ring, segments before hoops within a ring.
///
/// ## Errors
///
/// - `InvalidParameter` if the config or resolution fails validation, the
///   palette is empty while the lining is shown, or the request exceeds
///   `options.max_work`.
/// - Any builder error; the one of the first failing mesh in output order
///   is returned.
#[instrument(
    skip_all,
    fields(
        rings = config.num_rings,
        segments = config.segments_per_ring,
        strategy = ?options.strategy
    )
)]
pub fn generate_with(
    config: &TunnelConfig,
    options: &GenerateOptions,
) -> MeshResult<Vec<LabeledMesh>> {
    config.validate()?;
    let resolution = ResolutionConfig::new(
        options.resolution.lining_resolution,
        options.resolution.hoop_resolution,
        options.resolution.csg_segments,
    )?;
    if config.show_lining {
        options.palette.lining_color(0)?;
    }

    let builder = options.strategy.builder(&resolution);
    let hoop_builder = HoopBuilder::new(resolution.hoop_resolution);

    let work = estimate_work(config, builder.as_ref(), resolution.hoop_resolution);
    debug!(work, max_work = options.max_work, builder = builder.name(), "work estimate");
    if work > options.max_work {
        return Err(MeshError::invalid(format!(
            "request needs {work} units of work, limit is {}",
            options.max_work
        )));
    }

    let mut jobs = Vec::new();
    if config.show_lining {
        jobs.extend(segment_layout(config).into_iter().map(|(k, s)| Job::Segment(k, s)));
    }
    if config.show_hoops {
        jobs.extend(hoop_layout(config).into_iter().map(|(k, h)| Job::Hoop(k, h)));
    }
    jobs.sort_by_key(Job::key);

    let run = |job: &Job| -> MeshResult<LabeledMesh> {
        let (key, mesh) = match job {
            Job::Segment(key, segment) => (*key, builder.build(segment)?),
            Job::Hoop(key, hoop) => (*key, hoop_builder.build(hoop)?),
        };
        let (color, opacity) = match key.part {
            MeshPart::Segment(s) => (options.palette.lining_color(s as usize)?, LINING_OPACITY),
            MeshPart::Hoop(_) => (options.palette.reinforcement, HOOP_OPACITY),
        };
        Ok(LabeledMesh { key, label: key.to_string(), color, opacity, mesh })
    };

    // Results keep job order, so the first error is the first in key order
    let results: Vec<MeshResult<LabeledMesh>> = if options.parallel {
        jobs.par_iter().map(run).collect()
    } else {
        jobs.iter().map(run).collect()
    };
    let meshes = results.into_iter().collect::<MeshResult<Vec<_>>>()?;

    info!(
        meshes = meshes.len(),
        triangles = meshes.iter().map(|m| m.mesh.triangle_count()).sum::<usize>(),
        "tunnel generated"
    );
    Ok(meshes)
}

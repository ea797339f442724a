//! Centralized configuration values shared across the tunnel lining pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing derived geometric quantities
/// (angles, radii, positions) in meters or radians.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Thickness of a CSG splitting plane. Vertices closer than this to a plane
/// are treated as lying on it.
///
/// # Examples
/// ```
/// use config::constants::{CSG_PLANE_EPSILON, EPSILON_TOLERANCE};
/// assert!(CSG_PLANE_EPSILON > EPSILON_TOLERANCE);
/// ```
pub const CSG_PLANE_EPSILON: f64 = 1.0e-5;

/// Distance the inner cutter cylinder extends past both caps of the outer
/// cylinder during ring subtraction, so no cap faces are coplanar.
///
/// # Examples
/// ```
/// use config::constants::{CSG_CUTTER_OVERLAP, CSG_PLANE_EPSILON};
/// assert!(CSG_CUTTER_OVERLAP > CSG_PLANE_EPSILON);
/// ```
pub const CSG_CUTTER_OVERLAP: f64 = 1.0e-3;

/// Quantization factor for welding CSG output vertices (1 µm cells).
///
/// # Examples
/// ```
/// use config::constants::VERTEX_WELD_SCALE;
/// let key = (1.2345678_f64 * VERTEX_WELD_SCALE).round() as i64;
/// assert_eq!(key, 1_234_568);
/// ```
pub const VERTEX_WELD_SCALE: f64 = 1.0e6;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Smallest number of samples an arc can be described with (its two ends).
///
/// # Examples
/// ```
/// use config::constants::MIN_ARC_RESOLUTION;
/// assert_eq!(MIN_ARC_RESOLUTION, 2);
/// ```
pub const MIN_ARC_RESOLUTION: u32 = 2;

/// Default number of arc samples per lining segment.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_LINING_RESOLUTION, MIN_ARC_RESOLUTION};
/// assert!(DEFAULT_LINING_RESOLUTION >= MIN_ARC_RESOLUTION);
/// ```
pub const DEFAULT_LINING_RESOLUTION: u32 = 30;

/// Default number of samples around the full circle of a hoop.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HOOP_RESOLUTION;
/// assert_eq!(DEFAULT_HOOP_RESOLUTION, 30);
/// ```
pub const DEFAULT_HOOP_RESOLUTION: u32 = 30;

/// Default number of sides of the cylinders used by the CSG ring builder.
///
/// A multiple of 24 keeps every staggered segment boundary of the default
/// slider ranges on a cylinder vertex.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CSG_SEGMENTS;
/// assert_eq!(DEFAULT_CSG_SEGMENTS % 24, 0);
/// ```
pub const DEFAULT_CSG_SEGMENTS: u32 = 48;

/// Minimum number of sides for a CSG cylinder.
pub const MIN_CSG_SEGMENTS: u32 = 3;

/// Upper bound on `rings × segments × resolution` (plus hoop work) accepted
/// by one generation request.
///
/// # Examples
/// ```
/// use config::constants::{MAX_GENERATION_WORK, MAX_NUM_RINGS, MAX_SEGMENTS_PER_RING};
/// // The full slider range at default resolution fits comfortably.
/// assert!((MAX_NUM_RINGS * MAX_SEGMENTS_PER_RING * 30) as usize <= MAX_GENERATION_WORK);
/// ```
pub const MAX_GENERATION_WORK: usize = 2_000_000;

// =============================================================================
// TUNNEL PARAMETER DEFAULTS
// =============================================================================

/// Default outer radius of the lining (m).
pub const DEFAULT_OUTER_RADIUS: f64 = 4.7;

/// Default lining thickness (m).
pub const DEFAULT_LINING_THICKNESS: f64 = 0.3;

/// Default ring width along the tunnel axis (m).
pub const DEFAULT_RING_WIDTH: f64 = 2.1;

/// Default number of segments per ring.
pub const DEFAULT_SEGMENTS_PER_RING: u32 = 6;

/// Default number of rings.
pub const DEFAULT_NUM_RINGS: u32 = 10;

/// Default number of hoops per ring.
pub const DEFAULT_HOOPS_PER_RING: u32 = 4;

/// Default hoop bar radius (m).
pub const DEFAULT_REBAR_RADIUS: f64 = 0.03;

/// Default concrete cover measured outward from the inner face (m).
pub const DEFAULT_CONCRETE_COVER: f64 = 0.05;

// =============================================================================
// TUNNEL PARAMETER RANGES
// =============================================================================

/// Fewest segments a ring may be split into.
///
/// # Examples
/// ```
/// use config::constants::{MIN_SEGMENTS_PER_RING, MAX_SEGMENTS_PER_RING};
/// assert!(MIN_SEGMENTS_PER_RING < MAX_SEGMENTS_PER_RING);
/// ```
pub const MIN_SEGMENTS_PER_RING: u32 = 2;

/// Most segments a ring may be split into.
pub const MAX_SEGMENTS_PER_RING: u32 = 12;

/// Fewest rings in a tunnel.
pub const MIN_NUM_RINGS: u32 = 1;

/// Most rings in a tunnel.
pub const MAX_NUM_RINGS: u32 = 20;

/// Fewest hoops per ring.
pub const MIN_HOOPS_PER_RING: u32 = 1;

/// Most hoops per ring.
pub const MAX_HOOPS_PER_RING: u32 = 10;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Qualitative lining palette as `0xRRGGBB` literals. Segment `s` of every
/// ring uses entry `s mod len`.
///
/// # Examples
/// ```
/// use config::constants::LINING_PALETTE;
/// assert_eq!(LINING_PALETTE.len(), 10);
/// assert_eq!(LINING_PALETTE[0], 0x636EFA);
/// ```
pub const LINING_PALETTE: [u32; 10] = [
    0x636EFA, 0xEF553B, 0x00CC96, 0xAB63FA, 0xFFA15A, 0x19D3F3, 0xFF6692, 0xB6E880, 0xFF97FF,
    0xFECB52,
];

/// Color of every reinforcement hoop (`0xRRGGBB`).
///
/// # Examples
/// ```
/// use config::constants::{LINING_PALETTE, REINFORCEMENT_COLOR};
/// assert!(!LINING_PALETTE.contains(&REINFORCEMENT_COLOR));
/// ```
pub const REINFORCEMENT_COLOR: u32 = 0xFF0000;

/// Opacity of lining segments.
pub const LINING_OPACITY: f32 = 0.85;

/// Opacity of hoops.
pub const HOOP_OPACITY: f32 = 1.0;

// =============================================================================
// RESOLUTION CONFIG
// =============================================================================

/// Immutable snapshot of the tessellation settings used by one generation
/// request.
///
/// # Examples
/// ```
/// use config::constants::ResolutionConfig;
/// let config = ResolutionConfig::default();
/// assert!(config.lining_resolution >= 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Arc samples per lining segment.
    pub lining_resolution: u32,
    /// Samples around the full circle of a hoop.
    pub hoop_resolution: u32,
    /// Sides of the cylinders used by the CSG ring builder.
    pub csg_segments: u32,
}

impl ResolutionConfig {
    /// Builds a configuration enforcing strict validation of every sample
    /// count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ResolutionConfig;
    /// let cfg = ResolutionConfig::new(12, 24, 36).expect("valid config");
    /// assert_eq!(cfg.csg_segments, 36);
    /// ```
    pub fn new(
        lining_resolution: u32,
        hoop_resolution: u32,
        csg_segments: u32,
    ) -> Result<Self, ConfigError> {
        if lining_resolution < MIN_ARC_RESOLUTION {
            return Err(ConfigError::InvalidResolution(lining_resolution));
        }
        if hoop_resolution < MIN_ARC_RESOLUTION {
            return Err(ConfigError::InvalidResolution(hoop_resolution));
        }
        if csg_segments < MIN_CSG_SEGMENTS {
            return Err(ConfigError::InvalidSegments(csg_segments));
        }
        Ok(Self {
            lining_resolution,
            hoop_resolution,
            csg_segments,
        })
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            lining_resolution: DEFAULT_LINING_RESOLUTION,
            hoop_resolution: DEFAULT_HOOP_RESOLUTION,
            csg_segments: DEFAULT_CSG_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when an arc is asked for fewer than two samples.
    InvalidResolution(u32),
    /// Raised when a cylinder is asked for fewer than three sides.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(value) => {
                write!(f, "arc resolution must be >= {MIN_ARC_RESOLUTION}: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "csg_segments must be >= {MIN_CSG_SEGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

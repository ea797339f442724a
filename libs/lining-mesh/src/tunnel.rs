//! # Tunnel Parameters
//!
//! The parameter set a host hands over for one preview, with range
//! validation and the derived quantities the assembler needs.

use std::f64::consts::TAU;

use config::constants::{
    DEFAULT_CONCRETE_COVER, DEFAULT_HOOPS_PER_RING, DEFAULT_LINING_THICKNESS, DEFAULT_NUM_RINGS,
    DEFAULT_OUTER_RADIUS, DEFAULT_REBAR_RADIUS, DEFAULT_RING_WIDTH, DEFAULT_SEGMENTS_PER_RING,
    MAX_HOOPS_PER_RING, MAX_NUM_RINGS, MAX_SEGMENTS_PER_RING, MIN_HOOPS_PER_RING, MIN_NUM_RINGS,
    MIN_SEGMENTS_PER_RING,
};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Geometry and display switches of a segmented tunnel lining.
///
/// Lengths are in meters. Unknown fields are rejected and missing fields take
/// their default, so a host can send only what the user changed.
///
/// ## Example
///
/// ```rust
/// use lining_mesh::TunnelConfig;
///
/// let config = TunnelConfig { num_rings: 3, ..TunnelConfig::default() };
/// config.validate().unwrap();
/// assert!((config.inner_radius() - 4.4).abs() < 1e-12);
/// assert!((config.tunnel_length() - 6.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TunnelConfig {
    /// Radius of the outer lining face.
    pub outer_radius: f64,
    /// Radial thickness of the lining.
    pub lining_thickness: f64,
    /// Ring width along the tunnel axis.
    pub ring_width: f64,
    /// Segments per ring, all with the same sweep.
    pub segments_per_ring: u32,
    /// Rings along the tunnel.
    pub num_rings: u32,
    /// Rotate odd rings by half a segment.
    pub stagger_odd_rings: bool,
    /// Emit lining segments.
    pub show_lining: bool,
    /// Emit reinforcement hoops.
    pub show_hoops: bool,
    /// Hoops per ring, evenly spaced inside the ring width.
    pub hoops_per_ring: u32,
    /// Radius of one hoop bar.
    pub rebar_radius: f64,
    /// Distance from the inner lining face to the hoop center line.
    pub concrete_cover: f64,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            lining_thickness: DEFAULT_LINING_THICKNESS,
            ring_width: DEFAULT_RING_WIDTH,
            segments_per_ring: DEFAULT_SEGMENTS_PER_RING,
            num_rings: DEFAULT_NUM_RINGS,
            stagger_odd_rings: true,
            show_lining: true,
            show_hoops: true,
            hoops_per_ring: DEFAULT_HOOPS_PER_RING,
            rebar_radius: DEFAULT_REBAR_RADIUS,
            concrete_cover: DEFAULT_CONCRETE_COVER,
        }
    }
}

impl TunnelConfig {
    /// Check every range the generator relies on.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> MeshResult<()> {
        let lengths = [
            ("outer_radius", self.outer_radius),
            ("lining_thickness", self.lining_thickness),
            ("ring_width", self.ring_width),
            ("rebar_radius", self.rebar_radius),
            ("concrete_cover", self.concrete_cover),
        ];
        if let Some((name, value)) = lengths.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MeshError::invalid(format!("{name} must be finite: {value}")));
        }

        positive("outer_radius", self.outer_radius)?;
        positive("lining_thickness", self.lining_thickness)?;
        if self.lining_thickness >= self.outer_radius {
            return Err(MeshError::invalid(format!(
                "lining_thickness {} must be smaller than outer_radius {}",
                self.lining_thickness, self.outer_radius
            )));
        }
        positive("ring_width", self.ring_width)?;
        in_range(
            "segments_per_ring",
            self.segments_per_ring,
            MIN_SEGMENTS_PER_RING,
            MAX_SEGMENTS_PER_RING,
        )?;
        in_range("num_rings", self.num_rings, MIN_NUM_RINGS, MAX_NUM_RINGS)?;
        in_range(
            "hoops_per_ring",
            self.hoops_per_ring,
            MIN_HOOPS_PER_RING,
            MAX_HOOPS_PER_RING,
        )?;
        positive("rebar_radius", self.rebar_radius)?;
        if self.concrete_cover < 0.0 {
            return Err(MeshError::invalid(format!(
                "concrete_cover must not be negative: {}",
                self.concrete_cover
            )));
        }
        Ok(())
    }

    /// Radius of the inner lining face.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius - self.lining_thickness
    }

    /// Angle covered by one segment.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        TAU / f64::from(self.segments_per_ring)
    }

    /// Overall tunnel length.
    #[must_use]
    pub fn tunnel_length(&self) -> f64 {
        f64::from(self.num_rings) * self.ring_width
    }

    /// Radius of the hoop center lines: the inner face plus the cover.
    #[must_use]
    pub fn hoop_mid_radius(&self) -> f64 {
        self.inner_radius() + self.concrete_cover
    }
}

fn positive(name: &str, value: f64) -> MeshResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid(format!("{name} must be positive: {value}")))
    }
}

fn in_range(name: &str, value: u32, min: u32, max: u32) -> MeshResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(MeshError::invalid(format!(
            "{name} must be in [{min}, {max}]: {value}"
        )))
    }
}

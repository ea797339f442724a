//! Placement of every segment and hoop of a tunnel.

use crate::segment::{HoopSpec, RingSegmentSpec};
use crate::tunnel::TunnelConfig;

use super::MeshKey;

/// Every lining segment, ring-major.
///
/// Segment `s` of ring `r` starts at `s · sweep + offset`, where `offset` is
/// half a sweep on odd rings when staggering is on, and sits at
/// `y_offset = r · ring_width`. Adjacent segments of a ring share their
/// boundary angle exactly.
///
/// ```rust
/// use lining_mesh::{assembler::segment_layout, TunnelConfig};
///
/// let config = TunnelConfig { num_rings: 2, ..TunnelConfig::default() };
/// let layout = segment_layout(&config);
/// assert_eq!(layout.len(), 12);
/// let (_, second_ring_first) = layout[6];
/// assert!((second_ring_first.angle_start - std::f64::consts::PI / 6.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn segment_layout(config: &TunnelConfig) -> Vec<(MeshKey, RingSegmentSpec)> {
    let sweep = config.sweep_angle();
    let inner_radius = config.inner_radius();

    (0..config.num_rings)
        .flat_map(|ring| {
            let offset = if config.stagger_odd_rings && ring % 2 == 1 {
                sweep / 2.0
            } else {
                0.0
            };
            (0..config.segments_per_ring).map(move |s| {
                let segment = RingSegmentSpec {
                    angle_start: f64::from(s) * sweep + offset,
                    // From s + 1 so neighbours share their boundary exactly
                    angle_end: f64::from(s + 1) * sweep + offset,
                    inner_radius,
                    outer_radius: config.outer_radius,
                    y_offset: f64::from(ring) * config.ring_width,
                    width: config.ring_width,
                };
                (MeshKey::segment(ring, s), segment)
            })
        })
        .collect()
}

/// Every hoop, ring-major.
///
/// Hoop `h` (1-based) of ring `r` sits at `r · W + W / (H + 1) · h`, so the
/// `H` hoops divide the ring width into `H + 1` equal gaps.
#[must_use]
pub fn hoop_layout(config: &TunnelConfig) -> Vec<(MeshKey, HoopSpec)> {
    let spacing = config.ring_width / f64::from(config.hoops_per_ring + 1);
    let mid_radius = config.hoop_mid_radius();

    (0..config.num_rings)
        .flat_map(|ring| {
            let y_offset = f64::from(ring) * config.ring_width;
            (1..=config.hoops_per_ring).map(move |h| {
                let hoop = HoopSpec {
                    mid_radius,
                    tube_radius: config.rebar_radius,
                    y_position: y_offset + spacing * f64::from(h),
                };
                (MeshKey::hoop(ring, h), hoop)
            })
        })
        .collect()
}

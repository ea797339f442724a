//! Geometry of one ring segment and one hoop, as consumed by the builders.

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Angular wedge of one ring, spanning `[y_offset, y_offset + width]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSegmentSpec {
    /// First boundary angle (rad).
    pub angle_start: f64,
    /// Second boundary angle (rad), `angle_start + sweep_angle`.
    pub angle_end: f64,
    /// Radius of the inner (intrados) face (m).
    pub inner_radius: f64,
    /// Radius of the outer (extrados) face (m).
    pub outer_radius: f64,
    /// Position of the front ring face along the tunnel axis (m).
    pub y_offset: f64,
    /// Ring width along the tunnel axis (m).
    pub width: f64,
}

impl RingSegmentSpec {
    /// Angle covered by the segment.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.angle_end - self.angle_start
    }

    /// Check the conditions shared by every wedge strategy.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` if `inner_radius ≥ outer_radius`, `width ≤ 0`,
    /// `angle_end ≤ angle_start`, or any field is not finite.
    pub fn validate(&self) -> MeshResult<()> {
        let fields = [
            self.angle_start,
            self.angle_end,
            self.inner_radius,
            self.outer_radius,
            self.y_offset,
            self.width,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(MeshError::invalid(format!(
                "segment fields must be finite: {self:?}"
            )));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(MeshError::invalid(format!(
                "inner radius {} must be smaller than outer radius {}",
                self.inner_radius, self.outer_radius
            )));
        }
        if self.width <= 0.0 {
            return Err(MeshError::invalid(format!(
                "segment width must be positive: {}",
                self.width
            )));
        }
        if self.angle_end <= self.angle_start {
            return Err(MeshError::invalid(format!(
                "angle_end {} must exceed angle_start {}",
                self.angle_end, self.angle_start
            )));
        }
        Ok(())
    }
}

/// One circumferential reinforcement bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoopSpec {
    /// Radius of the bar's center line (m).
    pub mid_radius: f64,
    /// Bar radius (m); the band spans `2 · tube_radius` along the axis.
    pub tube_radius: f64,
    /// Center of the bar along the tunnel axis (m).
    pub y_position: f64,
}

impl HoopSpec {
    /// ## Errors
    ///
    /// `InvalidParameter` if `tube_radius ≤ 0`, `mid_radius ≤ tube_radius`,
    /// or any field is not finite.
    pub fn validate(&self) -> MeshResult<()> {
        if ![self.mid_radius, self.tube_radius, self.y_position]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(MeshError::invalid(format!("hoop fields must be finite: {self:?}")));
        }
        if self.tube_radius <= 0.0 {
            return Err(MeshError::invalid(format!(
                "hoop tube radius must be positive: {}",
                self.tube_radius
            )));
        }
        if self.mid_radius <= self.tube_radius {
            return Err(MeshError::invalid(format!(
                "hoop mid radius {} must exceed tube radius {}",
                self.mid_radius, self.tube_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> RingSegmentSpec {
        RingSegmentSpec {
            angle_start: 0.0,
            angle_end: 1.0,
            inner_radius: 4.4,
            outer_radius: 4.7,
            y_offset: 0.0,
            width: 2.1,
        }
    }

    #[test]
    fn valid_segment_passes() {
        assert!(segment().validate().is_ok());
        assert_eq!(segment().sweep_angle(), 1.0);
    }

    #[test]
    fn segment_rejections() {
        let cases = [
            RingSegmentSpec { inner_radius: 4.7, ..segment() },
            RingSegmentSpec { width: 0.0, ..segment() },
            RingSegmentSpec { angle_end: 0.0, ..segment() },
            RingSegmentSpec { y_offset: f64::NAN, ..segment() },
        ];
        for case in cases {
            assert!(
                matches!(case.validate(), Err(MeshError::InvalidParameter(_))),
                "{case:?} should be rejected"
            );
        }
    }

    #[test]
    fn hoop_rejections() {
        let ok = HoopSpec { mid_radius: 4.45, tube_radius: 0.03, y_position: 0.42 };
        assert!(ok.validate().is_ok());
        assert!(HoopSpec { tube_radius: 0.0, ..ok }.validate().is_err());
        assert!(HoopSpec { mid_radius: 0.03, ..ok }.validate().is_err());
    }
}

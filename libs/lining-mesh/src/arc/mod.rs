//! Arc sampling.
//!
//! Every builder derives its vertices from circular arcs in the
//! cross-sectional plane, sampled at a fixed number of evenly spaced angles.

use config::constants::MIN_ARC_RESOLUTION;
use glam::{DVec2, DVec3};

use crate::error::{MeshError, MeshResult};

/// `resolution` evenly spaced angles over `[angle_start, angle_end]`.
///
/// Both ends are included and the last angle is exactly `angle_end`.
///
/// ## Errors
///
/// `InvalidParameter` if `resolution < 2` or an angle is not finite.
pub fn arc_angles(angle_start: f64, angle_end: f64, resolution: u32) -> MeshResult<Vec<f64>> {
    if resolution < MIN_ARC_RESOLUTION {
        return Err(MeshError::invalid(format!(
            "arc resolution must be >= {MIN_ARC_RESOLUTION}: {resolution}"
        )));
    }
    if !angle_start.is_finite() || !angle_end.is_finite() {
        return Err(MeshError::invalid(format!(
            "arc angles must be finite: [{angle_start}, {angle_end}]"
        )));
    }

    let last = resolution as usize - 1;
    let step = (angle_end - angle_start) / last as f64;
    Ok((0..=last)
        .map(|i| {
            if i == last {
                angle_end
            } else {
                angle_start + step * i as f64
            }
        })
        .collect())
}

/// Sample a circular arc of `radius` centered on the tunnel axis.
///
/// Returns `(r·cos θ, r·sin θ)` for each angle of [`arc_angles`]; the first
/// component maps to `x`, the second to `z`.
///
/// ## Errors
///
/// `InvalidParameter` if `resolution < 2`, `radius < 0`, or any input is not
/// finite.
///
/// ## Example
///
/// ```rust
/// use lining_mesh::arc::sample_arc;
///
/// let points = sample_arc(0.0, std::f64::consts::FRAC_PI_2, 2.0, 3).unwrap();
/// assert_eq!(points.len(), 3);
/// assert!((points[2].y - 2.0).abs() < 1e-12);
/// ```
pub fn sample_arc(
    angle_start: f64,
    angle_end: f64,
    radius: f64,
    resolution: u32,
) -> MeshResult<Vec<DVec2>> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(MeshError::invalid(format!(
            "arc radius must be finite and non-negative: {radius}"
        )));
    }
    let angles = arc_angles(angle_start, angle_end, resolution)?;
    Ok(angles
        .into_iter()
        .map(|theta| {
            let (sin, cos) = theta.sin_cos();
            DVec2::new(radius * cos, radius * sin)
        })
        .collect())
}

/// Place a cross-section point at axial position `y`.
#[inline]
#[must_use]
pub fn lift(point: DVec2, y: f64) -> DVec3 {
    DVec3::new(point.x, y, point.y)
}

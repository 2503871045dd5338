//! Closed-form magnitude/orientation resolution from aggregated coefficients.
//!
//! Per pixel, with `num = 2*gxy` and `den = gxx - gyy`:
//!
//! ```text
//! theta     = if den < 0 { pi/4 } else { 0.5 * atan2(num, den) }
//! magnitude = sqrt(0.5 * ((gxx + gyy) + (gxx - gyy)*cos(2t) + 2*gxy*sin(2t)))
//! ```
//!
//! The `den < 0 -> pi/4` branch is a fixed substitute rather than a
//! continuation of atan2 across its domain; it introduces a discontinuity at
//! that boundary and is kept verbatim for behavioral compatibility.

use crate::gradient::{Coefficients, GradientField};
use crate::image::ImageF32;
use crate::util::EdgeMapResult;

/// Resolves per-pixel magnitude and orientation from the structure tensor.
pub fn resolve_tensor(coeffs: &Coefficients) -> EdgeMapResult<GradientField> {
    let width = coeffs.gxx.width();
    let height = coeffs.gxx.height();
    let mut magnitude = ImageF32::new(width, height)?;
    let mut direction = ImageF32::new(width, height)?;

    for y in 0..height {
        resolve_row(
            coeffs.gxx.row(y),
            coeffs.gyy.row(y),
            coeffs.gxy.row(y),
            magnitude.row_mut(y),
            direction.row_mut(y),
        );
    }

    Ok(GradientField {
        magnitude,
        direction,
    })
}

pub(crate) fn resolve_row(
    gxx_row: &[f32],
    gyy_row: &[f32],
    gxy_row: &[f32],
    mag_row: &mut [f32],
    dir_row: &mut [f32],
) {
    for x in 0..mag_row.len() {
        let gxx = gxx_row[x];
        let gyy = gyy_row[x];
        let gxy = gxy_row[x];

        let num = 2.0 * gxy;
        let den = gxx - gyy;
        let theta = if den < 0.0 {
            std::f32::consts::FRAC_PI_4
        } else {
            0.5 * num.atan2(den)
        };

        let (sin2t, cos2t) = (2.0 * theta).sin_cos();
        // Non-negative analytically; clamp guards f32 rounding near zero.
        let arg = 0.5 * ((gxx + gyy) + den * cos2t + num * sin2t);
        mag_row[x] = arg.max(0.0).sqrt();
        dir_row[x] = theta;
    }
}

//! Coefficient aggregation over one or more channels.
//!
//! For K channels the structure-tensor entries are, per pixel,
//!
//! ```text
//! gxx = sum_k (dC_k/dx)^2
//! gyy = sum_k (dC_k/dy)^2
//! gxy = sum_k (dC_k/dx)(dC_k/dy)
//! ```
//!
//! K = 1 is the grayscale case and K = 3 the color case; there is no separate
//! code path beyond the channel count.

use crate::gradient::{Coefficients, DerivativeField};
use crate::image::ImageF32;
use crate::util::{EdgeMapError, EdgeMapResult};

/// Reduces per-channel derivative fields into aggregated coefficients.
///
/// All fields must share spatial dimensions; a mismatch fails before any
/// accumulation happens.
pub fn aggregate_coefficients(fields: &[DerivativeField]) -> EdgeMapResult<Coefficients> {
    let first = fields.first().ok_or(EdgeMapError::NoChannels)?;
    let width = first.dx.width();
    let height = first.dx.height();
    for field in fields {
        check_dims(&field.dx, width, height)?;
        check_dims(&field.dy, width, height)?;
    }

    let mut gxx = ImageF32::new(width, height)?;
    let mut gyy = ImageF32::new(width, height)?;
    let mut gxy = ImageF32::new(width, height)?;

    for y in 0..height {
        accumulate_row(fields, y, gxx.row_mut(y), gyy.row_mut(y), gxy.row_mut(y));
    }

    Ok(Coefficients { gxx, gyy, gxy })
}

pub(crate) fn accumulate_row(
    fields: &[DerivativeField],
    y: usize,
    gxx_row: &mut [f32],
    gyy_row: &mut [f32],
    gxy_row: &mut [f32],
) {
    for field in fields {
        let dx_row = field.dx.row(y);
        let dy_row = field.dy.row(y);
        for x in 0..gxx_row.len() {
            let dx = dx_row[x];
            let dy = dy_row[x];
            gxx_row[x] += dx * dx;
            gyy_row[x] += dy * dy;
            gxy_row[x] += dx * dy;
        }
    }
}

pub(crate) fn check_dims(image: &ImageF32, width: usize, height: usize) -> EdgeMapResult<()> {
    if image.width() != width || image.height() != height {
        return Err(EdgeMapError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}

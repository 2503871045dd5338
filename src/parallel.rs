//! Rayon-parallel stage variants (feature-gated).
//!
//! Aggregation, tensor resolution, and suppression are per-pixel or
//! fixed-neighborhood transforms, so all three parallelize over rows.
//! Results are bit-identical to the scalar path: every row performs the same
//! operations in the same order.

use crate::gradient::aggregate::{accumulate_row, check_dims};
use crate::gradient::tensor::resolve_row;
use crate::gradient::{Coefficients, DerivativeField, GradientField};
use crate::image::ImageF32;
use crate::suppress::suppress_row;
use crate::util::{EdgeMapError, EdgeMapResult};
use rayon::prelude::*;

/// Row-parallel coefficient aggregation.
pub fn aggregate_coefficients_par(fields: &[DerivativeField]) -> EdgeMapResult<Coefficients> {
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

    gxx.data_mut()
        .par_chunks_mut(width)
        .zip(gyy.data_mut().par_chunks_mut(width))
        .zip(gxy.data_mut().par_chunks_mut(width))
        .enumerate()
        .for_each(|(y, ((gxx_row, gyy_row), gxy_row))| {
            accumulate_row(fields, y, gxx_row, gyy_row, gxy_row);
        });

    Ok(Coefficients { gxx, gyy, gxy })
}

/// Row-parallel tensor resolution.
pub fn resolve_tensor_par(coeffs: &Coefficients) -> EdgeMapResult<GradientField> {
    let width = coeffs.gxx.width();
    let height = coeffs.gxx.height();
    let mut magnitude = ImageF32::new(width, height)?;
    let mut direction = ImageF32::new(width, height)?;

    magnitude
        .data_mut()
        .par_chunks_mut(width)
        .zip(direction.data_mut().par_chunks_mut(width))
        .enumerate()
        .for_each(|(y, (mag_row, dir_row))| {
            resolve_row(
                coeffs.gxx.row(y),
                coeffs.gyy.row(y),
                coeffs.gxy.row(y),
                mag_row,
                dir_row,
            );
        });

    Ok(GradientField {
        magnitude,
        direction,
    })
}

/// Row-parallel non-maximum suppression.
pub fn suppress_non_maxima_par(gradient: &GradientField) -> EdgeMapResult<ImageF32> {
    let width = gradient.magnitude.width();
    let height = gradient.magnitude.height();
    let mut suppressed = ImageF32::new(width, height)?;

    if width < 3 || height < 3 {
        return Ok(suppressed);
    }

    suppressed
        .data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, out_row)| {
            if y == 0 || y == height - 1 {
                return;
            }
            suppress_row(gradient, y, out_row);
        });

    Ok(suppressed)
}

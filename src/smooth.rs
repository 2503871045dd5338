//! Gaussian smoothing collaborator.
//!
//! The kernel extent follows the fixed sizing contract
//! `max(3, oddify(6*sigma + 1))`, so smoothing strength stays consistent
//! relative to sigma. The blur is separable (horizontal then vertical pass)
//! with border handling by clamping sample coordinates into the image.

use crate::image::ImageF32;
use crate::util::math::kernel_size_for_sigma;
use crate::util::EdgeMapResult;

/// Applies a Gaussian blur of standard deviation `sigma`.
///
/// The caller (pipeline boundary) validates `sigma > 0`.
pub fn gaussian_blur(src: &ImageF32, sigma: f32) -> EdgeMapResult<ImageF32> {
    let kernel = gaussian_kernel(sigma);
    let radius = kernel.len() / 2;
    let width = src.width();
    let height = src.height();

    // Horizontal pass.
    let mut horizontal = ImageF32::new(width, height)?;
    for y in 0..height {
        let src_row = src.row(y);
        let out_row = horizontal.row_mut(y);
        for (x, out) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius as isize, width);
                acc += src_row[sx] * weight;
            }
            *out = acc;
        }
    }

    // Vertical pass.
    let mut blurred = ImageF32::new(width, height)?;
    for y in 0..height {
        for (k, &weight) in kernel.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, height);
            let src_row = horizontal.row(sy);
            let out_row = blurred.row_mut(y);
            for (out, &value) in out_row.iter_mut().zip(src_row.iter()) {
                *out += value * weight;
            }
        }
    }

    Ok(blurred)
}

/// Builds a normalized 1D Gaussian kernel for `sigma`.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let size = kernel_size_for_sigma(sigma);
    let radius = (size / 2) as isize;
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);

    let mut kernel = Vec::with_capacity(size);
    let mut sum = 0.0f32;
    for i in -radius..=radius {
        let value = (-(i * i) as f32 * inv_two_sigma_sq).exp();
        kernel.push(value);
        sum += value;
    }
    for value in kernel.iter_mut() {
        *value /= sum;
    }
    kernel
}

#[inline]
fn clamp_index(idx: isize, len: usize) -> usize {
    idx.clamp(0, len as isize - 1) as usize
}

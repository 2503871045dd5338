//! Convenience helpers for loading images and saving masks via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Samples are converted to
//! `f32` in the `[0, 255]` range so the pipeline's thresholds behave the same
//! for decoded files and in-memory test images.

use crate::image::{ImageF32, ImageU8};
use crate::util::{EdgeMapError, EdgeMapResult};
use std::path::Path;

/// Converts a grayscale buffer to a single-channel float image.
pub fn channel_from_gray_image(img: &image::GrayImage) -> EdgeMapResult<ImageF32> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.as_raw().iter().map(|&v| f32::from(v)).collect();
    ImageF32::from_vec(data, width, height)
}

/// Splits an RGB buffer into three float channels.
pub fn channels_from_rgb_image(img: &image::RgbImage) -> EdgeMapResult<Vec<ImageF32>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut planes = vec![Vec::with_capacity(width * height); 3];
    for pixel in img.pixels() {
        for (plane, &sample) in planes.iter_mut().zip(pixel.0.iter()) {
            plane.push(f32::from(sample));
        }
    }
    planes
        .into_iter()
        .map(|plane| ImageF32::from_vec(plane, width, height))
        .collect()
}

/// Loads an image from disk as a single grayscale channel.
pub fn load_gray_channel<P: AsRef<Path>>(path: P) -> EdgeMapResult<ImageF32> {
    let img = open(path)?;
    channel_from_gray_image(&img.to_luma8())
}

/// Loads an image from disk as three RGB channels.
pub fn load_rgb_channels<P: AsRef<Path>>(path: P) -> EdgeMapResult<Vec<ImageF32>> {
    let img = open(path)?;
    channels_from_rgb_image(&img.to_rgb8())
}

/// Saves a binary edge mask as a grayscale PNG.
pub fn save_mask_png<P: AsRef<Path>>(mask: &ImageU8, path: P) -> EdgeMapResult<()> {
    let width = mask.width() as u32;
    let height = mask.height() as u32;
    let buffer = image::GrayImage::from_raw(width, height, mask.data().to_vec()).ok_or(
        EdgeMapError::BufferSizeMismatch {
            needed: (width * height) as usize,
            got: mask.data().len(),
        },
    )?;
    buffer.save(path).map_err(|err| EdgeMapError::ImageIo {
        reason: err.to_string(),
    })
}

fn open<P: AsRef<Path>>(path: P) -> EdgeMapResult<image::DynamicImage> {
    image::open(path).map_err(|err| EdgeMapError::ImageIo {
        reason: err.to_string(),
    })
}

//! Owned 2D pixel containers.
//!
//! Every pipeline stage consumes borrowed input containers and allocates a
//! fresh output, so no stage aliases or mutates a predecessor's buffer. Both
//! containers are contiguous and row-major with `stride == width`.

use crate::util::{EdgeMapError, EdgeMapResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Owned single-channel `f32` image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl ImageF32 {
    /// Creates a zero-filled image.
    pub fn new(width: usize, height: usize) -> EdgeMapResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: vec![0.0; len],
            width,
            height,
        })
    }

    /// Wraps an existing buffer; the length must match the dimensions exactly.
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> EdgeMapResult<Self> {
        let needed = checked_len(width, height)?;
        if data.len() != needed {
            return Err(EdgeMapError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the value at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns row `y` as a contiguous slice.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Returns row `y` as a mutable slice.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Returns the backing buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns true when `other` has the same spatial dimensions.
    pub fn same_dims(&self, other: &ImageF32) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Owned single-channel `u8` image, used for the final binary edge mask.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageU8 {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl ImageU8 {
    /// Creates a zero-filled image.
    pub fn new(width: usize, height: usize) -> EdgeMapResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the value at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }

    /// Returns row `y` as a contiguous slice.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Returns the backing buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns the backing buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

fn checked_len(width: usize, height: usize) -> EdgeMapResult<usize> {
    if width == 0 || height == 0 {
        return Err(EdgeMapError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(EdgeMapError::InvalidDimensions { width, height })
}

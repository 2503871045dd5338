//! Directional derivatives, coefficient aggregation, and tensor resolution.

pub mod aggregate;
pub mod sobel;
pub mod tensor;

use crate::image::ImageF32;

/// Per-channel horizontal/vertical derivative fields.
#[derive(Clone, Debug)]
pub struct DerivativeField {
    /// Horizontal derivative (response to the X kernel).
    pub dx: ImageF32,
    /// Vertical derivative (response to the Y kernel).
    pub dy: ImageF32,
}

/// Aggregated structure-tensor coefficients.
///
/// Per pixel these are the entries of the 2x2 symmetric matrix
/// `[[gxx, gxy], [gxy, gyy]]` summed over channels. `gxx` and `gyy` are sums
/// of squares and therefore non-negative everywhere; `gxy` may take any sign.
#[derive(Clone, Debug)]
pub struct Coefficients {
    pub gxx: ImageF32,
    pub gyy: ImageF32,
    pub gxy: ImageF32,
}

/// Resolved per-pixel gradient magnitude and orientation.
///
/// `direction` is in radians. Because orientations with `gxx - gyy < 0`
/// substitute a fixed pi/4, the effective range is [-pi/4, pi/4] rather than
/// the full half-turn an unconstrained atan2 would give.
#[derive(Clone, Debug)]
pub struct GradientField {
    pub magnitude: ImageF32,
    pub direction: ImageF32,
}

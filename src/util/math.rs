//! Mathematical helpers for orientation handling and kernel sizing.

/// Converts a gradient direction to degrees, folding negatives into [0, 180].
///
/// The suppression stage quantizes orientations over a half-turn, so an
/// angle of -30 degrees and one of 150 degrees select the same neighbors.
pub(crate) fn direction_deg(angle_rad: f32) -> f32 {
    let mut deg = angle_rad.to_degrees();
    if deg < 0.0 {
        deg += 180.0;
    }
    deg
}

/// Gaussian kernel extent for a given sigma: `max(3, oddify(6*sigma + 1))`.
///
/// `oddify` forces the truncated value odd by setting the low bit, matching
/// the sizing rule the smoothing contract fixes.
pub(crate) fn kernel_size_for_sigma(sigma: f32) -> usize {
    let size = (6.0 * sigma + 1.0) as i64 | 1;
    size.max(3) as usize
}

//! Non-maximum suppression along the quantized gradient orientation.
//!
//! Interior pixels only: the one-pixel border is never evaluated and stays 0
//! in the output. This is the stated boundary policy, inherited by the
//! hysteresis stage.
//!
//! A pixel survives when its magnitude is `>=` both neighbors selected by its
//! orientation bucket. Ties are kept on both sides of a plateau, which can
//! leave locally doubled-width ridges; that behavior is kept verbatim.

use crate::gradient::GradientField;
use crate::image::ImageF32;
use crate::util::math::direction_deg;
use crate::util::EdgeMapResult;

/// Neighbor offsets `(dy, dx)` per orientation bucket, two neighbors each.
///
/// Bucket 0: [0, 22.5) u [157.5, 180]   horizontal gradient, vertical edge
/// Bucket 1: [22.5, 67.5)               anti-diagonal
/// Bucket 2: [67.5, 112.5)              vertical gradient, horizontal edge
/// Bucket 3: [112.5, 157.5)             diagonal
const BUCKET_NEIGHBORS: [[(isize, isize); 2]; 4] = [
    [(0, 1), (0, -1)],
    [(1, -1), (-1, 1)],
    [(1, 0), (-1, 0)],
    [(-1, -1), (1, 1)],
];

#[inline]
fn orientation_bucket(angle_deg: f32) -> usize {
    if (22.5..67.5).contains(&angle_deg) {
        1
    } else if (67.5..112.5).contains(&angle_deg) {
        2
    } else if (112.5..157.5).contains(&angle_deg) {
        3
    } else {
        0
    }
}

/// Suppresses non-maxima in interior row `y`, writing into `out_row`.
pub(crate) fn suppress_row(gradient: &GradientField, y: usize, out_row: &mut [f32]) {
    let width = out_row.len();
    let dir_row = gradient.direction.row(y);
    let mag_row = gradient.magnitude.row(y);
    for x in 1..width - 1 {
        let bucket = orientation_bucket(direction_deg(dir_row[x]));
        let magnitude = mag_row[x];

        let mut is_max = true;
        for &(dy, dx) in &BUCKET_NEIGHBORS[bucket] {
            let ny = (y as isize + dy) as usize;
            let nx = (x as isize + dx) as usize;
            if magnitude < gradient.magnitude.row(ny)[nx] {
                is_max = false;
                break;
            }
        }
        if is_max {
            out_row[x] = magnitude;
        }
    }
}

/// Thins a gradient field by suppressing non-maxima along the orientation.
pub fn suppress_non_maxima(gradient: &GradientField) -> EdgeMapResult<ImageF32> {
    let width = gradient.magnitude.width();
    let height = gradient.magnitude.height();
    let mut suppressed = ImageF32::new(width, height)?;

    if width < 3 || height < 3 {
        return Ok(suppressed);
    }

    for y in 1..height - 1 {
        suppress_row(gradient, y, suppressed.row_mut(y));
    }

    Ok(suppressed)
}

#[cfg(test)]
mod tests {
    use super::orientation_bucket;

    #[test]
    fn bucket_boundaries_match_contract() {
        assert_eq!(orientation_bucket(0.0), 0);
        assert_eq!(orientation_bucket(22.4), 0);
        assert_eq!(orientation_bucket(22.5), 1);
        assert_eq!(orientation_bucket(67.4), 1);
        assert_eq!(orientation_bucket(67.5), 2);
        assert_eq!(orientation_bucket(112.4), 2);
        assert_eq!(orientation_bucket(112.5), 3);
        assert_eq!(orientation_bucket(157.4), 3);
        assert_eq!(orientation_bucket(157.5), 0);
        assert_eq!(orientation_bucket(180.0), 0);
    }
}

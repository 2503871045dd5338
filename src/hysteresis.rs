//! Double-threshold classification and connectivity linking.
//!
//! Thresholds are ratios of the global maximum of the suppressed field. A
//! pixel is strong when its value reaches the high threshold and weak when it
//! falls between the two; only interior pixels are classified, so the border
//! can never enter the mask.
//!
//! Propagation is a seed-driven traversal: the queue starts with every strong
//! pixel and weak 8-neighbors are added to the mask as they are first
//! reached. The result is the transitive closure of adjacency from strong
//! seeds, identical to repeated full-image rescans but visiting each pixel at
//! most once, and independent of traversal order.

use crate::image::{ImageF32, ImageU8};
use crate::util::EdgeMapResult;

/// Intensity assigned to mask pixels; non-edges stay 0.
pub const EDGE_VALUE: u8 = 255;

/// 8-connectivity offsets `(dy, dx)`.
const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Classifies the suppressed field and links weak pixels to strong regions.
///
/// `low_threshold >= high_threshold` yields an empty or degenerate weak set;
/// the call still completes and returns a valid mask. Callers treat
/// out-of-order thresholds as a configuration error, not a failure here.
pub fn link_edges(
    suppressed: &ImageF32,
    low_threshold: f32,
    high_threshold: f32,
) -> EdgeMapResult<ImageU8> {
    let width = suppressed.width();
    let height = suppressed.height();
    let mut mask = ImageU8::new(width, height)?;

    if width < 3 || height < 3 {
        return Ok(mask);
    }

    let max_value = suppressed.data().iter().copied().fold(0.0f32, f32::max);
    let high_thr = high_threshold * max_value;
    let low_thr = low_threshold * max_value;

    // Seed the mask and queue with the strong set; remember the weak set.
    let mut weak = vec![false; width * height];
    let mut queue: Vec<(usize, usize)> = Vec::new();
    for y in 1..height - 1 {
        let row = suppressed.row(y);
        for x in 1..width - 1 {
            let value = row[x];
            // Zero magnitude is "neither", even when a threshold ratio of 0
            // drops the absolute threshold to 0.
            if value <= 0.0 {
                continue;
            }
            if value >= high_thr {
                mask.set(x, y, EDGE_VALUE);
                queue.push((x, y));
            } else if value >= low_thr {
                weak[y * width + x] = true;
            }
        }
    }

    while let Some((x, y)) = queue.pop() {
        for &(dy, dx) in &NEIGHBORS_8 {
            let ny = (y as isize + dy) as usize;
            let nx = (x as isize + dx) as usize;
            let idx = ny * width + nx;
            if weak[idx] && mask.get(nx, ny) == Some(0) {
                mask.set(nx, ny, EDGE_VALUE);
                queue.push((nx, ny));
            }
        }
    }

    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::{link_edges, EDGE_VALUE};
    use crate::image::ImageF32;

    #[test]
    fn weak_pixels_need_a_strong_neighbor_chain() {
        // Row 2: strong at x=1, weak chain at x=2..=3, isolated weak at x=5.
        let width = 7;
        let height = 5;
        let mut data = vec![0.0f32; width * height];
        data[2 * width + 1] = 10.0;
        data[2 * width + 2] = 4.0;
        data[2 * width + 3] = 4.0;
        data[2 * width + 5] = 4.0;
        let suppressed = ImageF32::from_vec(data, width, height).unwrap();

        let mask = link_edges(&suppressed, 0.3, 0.8).unwrap();
        assert_eq!(mask.get(1, 2).unwrap(), EDGE_VALUE);
        assert_eq!(mask.get(2, 2).unwrap(), EDGE_VALUE);
        assert_eq!(mask.get(3, 2).unwrap(), EDGE_VALUE);
        assert_eq!(mask.get(5, 2).unwrap(), 0);
    }

    #[test]
    fn linking_crosses_diagonal_neighbors() {
        let width = 5;
        let height = 5;
        let mut data = vec![0.0f32; width * height];
        data[width + 1] = 10.0; // strong at (1, 1)
        data[2 * width + 2] = 4.0; // weak at (2, 2)
        data[3 * width + 3] = 4.0; // weak at (3, 3)
        let suppressed = ImageF32::from_vec(data, width, height).unwrap();

        let mask = link_edges(&suppressed, 0.3, 0.8).unwrap();
        assert_eq!(mask.get(2, 2).unwrap(), EDGE_VALUE);
        assert_eq!(mask.get(3, 3).unwrap(), EDGE_VALUE);
    }

    #[test]
    fn border_pixels_are_never_classified() {
        // Maximal values on the border must not seed the mask.
        let width = 5;
        let height = 4;
        let mut data = vec![0.0f32; width * height];
        data[0] = 100.0;
        data[width - 1] = 100.0;
        data[(height - 1) * width + 2] = 100.0;
        let suppressed = ImageF32::from_vec(data, width, height).unwrap();

        let mask = link_edges(&suppressed, 0.05, 0.15).unwrap();
        assert!(mask.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn all_zero_field_produces_empty_mask() {
        let suppressed = ImageF32::from_vec(vec![0.0; 25], 5, 5).unwrap();
        let mask = link_edges(&suppressed, 0.05, 0.15).unwrap();
        assert!(mask.data().iter().all(|&v| v == 0));
    }
}

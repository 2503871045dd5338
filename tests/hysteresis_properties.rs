use edgemap::{link_edges, ImageF32, ImageU8, EDGE_VALUE};

fn image(data: Vec<f32>, width: usize, height: usize) -> ImageF32 {
    ImageF32::from_vec(data, width, height).unwrap()
}

/// Checks that every mask pixel is reachable from a strong pixel through
/// 8-connected mask pixels.
fn assert_connectivity(suppressed: &ImageF32, mask: &ImageU8, high_thr: f32) {
    let width = mask.width();
    let height = mask.height();

    let mut reachable = vec![false; width * height];
    let mut queue = Vec::new();
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let value = suppressed.get(x, y).unwrap();
            if value > 0.0 && value >= high_thr && mask.get(x, y) == Some(EDGE_VALUE) {
                reachable[y * width + x] = true;
                queue.push((x, y));
            }
        }
    }
    while let Some((x, y)) = queue.pop() {
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                let idx = ny * width + nx;
                if !reachable[idx] && mask.get(nx, ny) == Some(EDGE_VALUE) {
                    reachable[idx] = true;
                    queue.push((nx, ny));
                }
            }
        }
    }

    for y in 0..height {
        for x in 0..width {
            if mask.get(x, y) == Some(EDGE_VALUE) {
                assert!(reachable[y * width + x], "unreachable mask pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn strong_pixels_always_appear_in_the_mask() {
    let width = 9;
    let height = 7;
    let mut data = vec![0.0f32; width * height];
    data[2 * width + 2] = 10.0;
    data[3 * width + 5] = 9.0;
    data[5 * width + 7] = 8.5;
    data[5 * width + 2] = 2.0; // weak, isolated
    let suppressed = image(data, width, height);

    let mask = link_edges(&suppressed, 0.1, 0.5).unwrap();
    assert_eq!(mask.get(2, 2).unwrap(), EDGE_VALUE);
    assert_eq!(mask.get(5, 3).unwrap(), EDGE_VALUE);
    assert_eq!(mask.get(7, 5).unwrap(), EDGE_VALUE);
    assert_eq!(mask.get(2, 5).unwrap(), 0);
}

#[test]
fn weak_chain_is_linked_transitively() {
    // strong - weak - weak - weak chain along a row.
    let width = 8;
    let height = 5;
    let mut data = vec![0.0f32; width * height];
    data[2 * width + 1] = 10.0;
    for x in 2..=5 {
        data[2 * width + x] = 3.0;
    }
    let suppressed = image(data, width, height);

    let mask = link_edges(&suppressed, 0.2, 0.8).unwrap();
    for x in 1..=5 {
        assert_eq!(mask.get(x, 2).unwrap(), EDGE_VALUE, "x={x}");
    }
    assert_connectivity(&suppressed, &mask, 0.8 * 10.0);
}

#[test]
fn weak_region_without_strong_seed_is_dropped() {
    let width = 8;
    let height = 6;
    let mut data = vec![0.0f32; width * height];
    // Strong seed far from the weak blob, separated by zeros.
    data[width + 1] = 10.0;
    data[4 * width + 5] = 3.0;
    data[4 * width + 6] = 3.0;
    let suppressed = image(data, width, height);

    let mask = link_edges(&suppressed, 0.2, 0.8).unwrap();
    assert_eq!(mask.get(1, 1).unwrap(), EDGE_VALUE);
    assert_eq!(mask.get(5, 4).unwrap(), 0);
    assert_eq!(mask.get(6, 4).unwrap(), 0);
}

#[test]
fn zero_thresholds_select_exact_nonzero_support() {
    let width = 9;
    let height = 6;
    let mut data = vec![0.0f32; width * height];
    data[width + 1] = 0.5;
    data[2 * width + 4] = 7.0;
    data[4 * width + 7] = 0.01;
    let suppressed = image(data, width, height);

    let mask = link_edges(&suppressed, 0.0, 0.0).unwrap();
    for y in 0..height {
        for x in 0..width {
            let expected = if suppressed.get(x, y).unwrap() > 0.0 {
                EDGE_VALUE
            } else {
                0
            };
            assert_eq!(mask.get(x, y).unwrap(), expected, "({x}, {y})");
        }
    }
}

#[test]
fn degenerate_thresholds_still_produce_a_valid_mask() {
    let width = 8;
    let height = 6;
    let mut data = vec![0.0f32; width * height];
    data[2 * width + 3] = 10.0;
    data[2 * width + 4] = 4.0;
    let suppressed = image(data, width, height);

    // low >= high: the weak band [low, high) is empty; only pixels at or
    // above the high threshold survive.
    let mask = link_edges(&suppressed, 0.9, 0.3).unwrap();
    assert!(mask.data().iter().all(|&v| v == 0 || v == EDGE_VALUE));
    assert_eq!(mask.get(3, 2).unwrap(), EDGE_VALUE);
    assert_eq!(mask.get(4, 2).unwrap(), EDGE_VALUE);
}

#[test]
fn mask_is_monotone_in_the_low_threshold() {
    // Lowering the low threshold can only grow the mask.
    let width = 10;
    let height = 8;
    let mut data = vec![0.0f32; width * height];
    data[3 * width + 2] = 10.0;
    data[3 * width + 3] = 5.0;
    data[3 * width + 4] = 2.5;
    data[3 * width + 5] = 1.0;
    let suppressed = image(data, width, height);

    let tight = link_edges(&suppressed, 0.4, 0.8).unwrap();
    let loose = link_edges(&suppressed, 0.05, 0.8).unwrap();
    for (t, l) in tight.data().iter().zip(loose.data()) {
        if *t == EDGE_VALUE {
            assert_eq!(*l, EDGE_VALUE);
        }
    }
    let tight_count = tight.data().iter().filter(|&&v| v != 0).count();
    let loose_count = loose.data().iter().filter(|&&v| v != 0).count();
    assert!(loose_count > tight_count);
}

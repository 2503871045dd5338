//! Fixed 3x3 Sobel derivative operator.
//!
//! Convolves the horizontal/vertical Sobel kernel pair over one channel with
//! border clamping, producing derivative fields of the same spatial size.

use crate::gradient::DerivativeField;
use crate::image::ImageF32;
use crate::util::EdgeMapResult;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Computes horizontal and vertical Sobel derivatives for one channel.
pub fn sobel_derivatives(channel: &ImageF32) -> EdgeMapResult<DerivativeField> {
    let width = channel.width();
    let height = channel.height();
    let mut dx = ImageF32::new(width, height)?;
    let mut dy = ImageF32::new(width, height)?;

    for y in 0..height {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(height - 1)];
        let rows = [
            channel.row(y_idx[0]),
            channel.row(y_idx[1]),
            channel.row(y_idx[2]),
        ];
        let out_dx = dx.row_mut(y);
        for x in 0..width {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(width - 1)];
            let mut sum = 0.0f32;
            for (row, kernel_row) in rows.iter().zip(SOBEL_KERNEL_X.iter()) {
                sum += row[x_idx[0]] * kernel_row[0]
                    + row[x_idx[1]] * kernel_row[1]
                    + row[x_idx[2]] * kernel_row[2];
            }
            out_dx[x] = sum;
        }
        let out_dy = dy.row_mut(y);
        for x in 0..width {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(width - 1)];
            let mut sum = 0.0f32;
            for (row, kernel_row) in rows.iter().zip(SOBEL_KERNEL_Y.iter()) {
                sum += row[x_idx[0]] * kernel_row[0]
                    + row[x_idx[1]] * kernel_row[1]
                    + row[x_idx[2]] * kernel_row[2];
            }
            out_dy[x] = sum;
        }
    }

    Ok(DerivativeField { dx, dy })
}

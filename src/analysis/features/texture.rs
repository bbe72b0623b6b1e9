// Texture module - gradient density over adjacent ink pixels
//
// Density approximates stroke texture/energy: the fraction of horizontally
// adjacent ink-to-ink pairs whose grayscale intensities differ sharply.
// Rows are sampled at a stride to keep the scan cheap.

use super::canvas::PixelGrid;
use super::mask::InkMask;

/// Compute gradient density over the masked grid
///
/// Scans rows at `row_stride`, columns left to right. For every ink pixel
/// whose left neighbor is also ink, the pair is compared; pairs whose
/// intensity step exceeds `intensity_threshold` count as sharp.
///
/// # Returns
/// sharp pairs / compared pairs, or 0.0 when no pair was compared
pub fn gradient_density(
    grid: &PixelGrid,
    mask: &InkMask,
    row_stride: usize,
    intensity_threshold: u32,
) -> f64 {
    let stride = row_stride.max(1) as u32;
    let mut sharp = 0u64;
    let mut compared = 0u64;

    let mut y = 0;
    while y < grid.height() {
        for x in 1..grid.width() {
            if mask.is_ink(x, y) && mask.is_ink(x - 1, y) {
                let step = grid.luma(x, y).abs_diff(grid.luma(x - 1, y)) as u32;
                if step > intensity_threshold {
                    sharp += 1;
                }
                compared += 1;
            }
        }
        y += stride;
    }

    if compared == 0 {
        0.0
    } else {
        sharp as f64 / compared as f64
    }
}

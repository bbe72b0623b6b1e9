// Mask module - foreground (ink) segmentation against the canvas color
//
// A pixel is ink when the sum of its channel-wise absolute differences from
// the background estimate exceeds the configured threshold. The mask always
// matches the dimensions of the grid it was built from.

use super::canvas::{BackgroundEstimate, PixelGrid};

/// Boolean ink grid plus the ordered list of ink colors
///
/// Ink colors are collected in row-major scan order (top row first, left to
/// right), the same order the mask cells are filled.
pub struct InkMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    ink_colors: Vec<[u8; 3]>,
}

impl InkMask {
    /// Segment a grid into ink and canvas
    ///
    /// # Arguments
    /// * `grid` - The working pixel grid
    /// * `background` - Corner-averaged canvas color
    /// * `distance_threshold` - Channel-distance sum above which a pixel is ink
    pub fn build(
        grid: &PixelGrid,
        background: &BackgroundEstimate,
        distance_threshold: u32,
    ) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut cells = vec![false; (width * height) as usize];
        let mut ink_colors = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let [r, g, b, _] = grid.get(x, y);
                let dist = (r as i32 - background.r as i32).unsigned_abs()
                    + (g as i32 - background.g as i32).unsigned_abs()
                    + (b as i32 - background.b as i32).unsigned_abs();
                if dist > distance_threshold {
                    cells[(y * width + x) as usize] = true;
                    ink_colors.push([r, g, b]);
                }
            }
        }

        Self {
            width,
            height,
            cells,
            ink_colors,
        }
    }

    #[inline]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.cells[(y * self.width + x) as usize]
    }

    pub fn ink_count(&self) -> usize {
        self.ink_colors.len()
    }

    /// Ink pixel count over total pixel count
    pub fn ink_ratio(&self) -> f64 {
        let total = (self.width * self.height) as usize;
        if total == 0 {
            return 0.0;
        }
        self.ink_colors.len() as f64 / total as f64
    }

    /// RGB colors at ink positions, in scan order
    pub fn ink_colors(&self) -> &[[u8; 3]] {
        &self.ink_colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::canvas::PixelGrid;

    fn png_with_square(size: u32, bg: [u8; 4], ink: [u8; 4], half: u32) -> Vec<u8> {
        let center = size / 2;
        let img = image::RgbaImage::from_fn(size, size, |x, y| {
            let in_square = x.abs_diff(center) < half && y.abs_diff(center) < half;
            image::Rgba(if in_square { ink } else { bg })
        });
        let mut bytes = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut bytes, image::ImageOutputFormat::Png)
            .expect("PNG encoding of test image");
        bytes.into_inner()
    }

    #[test]
    fn test_uniform_image_has_no_ink() {
        let bytes = png_with_square(128, [255, 255, 255, 255], [255, 255, 255, 255], 0);
        let grid = PixelGrid::decode(&bytes, 128).expect("decode");
        let bg = grid.background_estimate();
        let mask = InkMask::build(&grid, &bg, 56);

        assert_eq!(mask.ink_count(), 0, "Uniform canvas should contain no ink");
        assert_eq!(mask.ink_ratio(), 0.0);
    }

    #[test]
    fn test_square_stroke_is_segmented() {
        // Black square on white: channel distance 765, far over threshold
        let bytes = png_with_square(128, [255, 255, 255, 255], [0, 0, 0, 255], 16);
        let grid = PixelGrid::decode(&bytes, 128).expect("decode");
        let bg = grid.background_estimate();
        let mask = InkMask::build(&grid, &bg, 56);

        assert!(mask.ink_count() > 0, "Square stroke should be detected");
        assert!(
            mask.is_ink(64, 64),
            "Center of the drawn square should be ink"
        );
        assert!(!mask.is_ink(0, 0), "Corner should remain canvas");
        assert_eq!(
            mask.ink_colors()[0],
            [0, 0, 0],
            "Ink colors should carry the stroke color"
        );
    }

    #[test]
    fn test_distance_at_threshold_is_canvas() {
        // 199,255,255 on white: channel distance sum is exactly 56
        let bytes = png_with_square(128, [255, 255, 255, 255], [199, 255, 255, 255], 16);
        let grid = PixelGrid::decode(&bytes, 128).expect("decode");
        let bg = grid.background_estimate();
        let mask = InkMask::build(&grid, &bg, 56);

        assert_eq!(
            mask.ink_count(),
            0,
            "Distance equal to the threshold must not count as ink"
        );
    }

    #[test]
    fn test_distance_just_over_threshold_is_ink() {
        let bytes = png_with_square(128, [255, 255, 255, 255], [198, 255, 255, 255], 16);
        let grid = PixelGrid::decode(&bytes, 128).expect("decode");
        let bg = grid.background_estimate();
        let mask = InkMask::build(&grid, &bg, 56);

        assert!(
            mask.ink_count() > 0,
            "Distance 57 should count as ink with threshold 56"
        );
    }
}

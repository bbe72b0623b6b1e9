// Canvas module - decoded pixel grid and background estimation
//
// The input bytes are decoded once and resized once; everything downstream
// works on the resulting read-only grid. No pixel is ever mutated in place.

use crate::error::AnalysisError;
use image::imageops::FilterType;

/// Read-only RGBA grid at the working resolution
///
/// Pixels are stored row-major; `get` addresses them as (x, y) with the
/// origin at the top-left corner.
#[derive(Debug)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

/// Averaged corner color used as the canvas-color reference
///
/// Channel means use integer division, matching the segmentation threshold
/// arithmetic (whole-number channel distances).
#[derive(Debug, Clone, Copy)]
pub struct BackgroundEstimate {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelGrid {
    /// Decode raw image bytes and resize to a square working resolution
    ///
    /// # Arguments
    /// * `image_bytes` - Opaque buffer claimed to encode a raster image
    /// * `working_size` - Side length of the square working grid
    ///
    /// # Returns
    /// A read-only grid, or `AnalysisError` when the bytes do not decode or
    /// the working size is zero.
    pub fn decode(image_bytes: &[u8], working_size: u32) -> Result<Self, AnalysisError> {
        if working_size == 0 {
            return Err(AnalysisError::DegenerateGrid { size: working_size });
        }

        let decoded = image::load_from_memory(image_bytes)?;
        // Nearest resampling: classification must be resize-policy-stable,
        // not bit-exact, and nearest keeps ink colors unmixed.
        let rgba = decoded
            .resize_exact(working_size, working_size, FilterType::Nearest)
            .to_rgba8();

        let pixels = rgba.pixels().map(|p| p.0).collect();

        Ok(Self {
            width: working_size,
            height: working_size,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA channels of the pixel at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Grayscale intensity of the pixel at (x, y)
    ///
    /// Integer ITU-R 601-2 luma: (299 R + 587 G + 114 B) / 1000.
    #[inline]
    pub fn luma(&self, x: u32, y: u32) -> u8 {
        let [r, g, b, _] = self.get(x, y);
        ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
    }

    /// Average the four corner pixels into the canvas-color reference
    pub fn background_estimate(&self) -> BackgroundEstimate {
        let corners = [
            self.get(0, 0),
            self.get(self.width - 1, 0),
            self.get(0, self.height - 1),
            self.get(self.width - 1, self.height - 1),
        ];

        let sum = corners.iter().fold([0u32; 3], |mut acc, px| {
            acc[0] += px[0] as u32;
            acc[1] += px[1] as u32;
            acc[2] += px[2] as u32;
            acc
        });

        BackgroundEstimate {
            r: (sum[0] / 4) as u8,
            g: (sum[1] / 4) as u8,
            b: (sum[2] / 4) as u8,
        }
    }
}

// FeatureExtractor - pixel feature extraction for drawing classification
//
// This module extracts the image features used for inferring style and vibe
// labels from a freehand drawing. Features are computed from a single
// decode/resize of the input bytes; everything downstream reads the grid,
// nothing mutates it.
//
// Module organization:
// - types: Data structures (DrawingFeatures struct)
// - canvas: Decode/resize and background estimation
// - mask: Ink segmentation against the canvas color
// - texture: Gradient density over adjacent ink pairs
// - hue: HSV conversion and the 12-bin hue histogram
// - mod.rs: Coordinator (FeatureExtractor)
//
// Features extracted:
// 1. Ink Ratio: fraction of pixels that differ from the canvas color
// 2. Gradient Density: fraction of adjacent ink pairs with sharp intensity
//    steps (stroke texture/energy measure)
// 3. Dominant Hue/Saturation/Value: summary of the most populous hue bin

pub mod canvas;
pub mod hue;
pub mod mask;
pub mod texture;
mod types;

pub use canvas::{BackgroundEstimate, PixelGrid};
pub use hue::{rgb_to_hsv, DominantHue, HueHistogram};
pub use mask::InkMask;
pub use types::DrawingFeatures;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// FeatureExtractor coordinates the drawing feature pipeline
///
/// Stateless apart from its configuration; each call decodes, segments,
/// and summarizes one drawing independently.
pub struct FeatureExtractor {
    config: AnalysisConfig,
}

impl FeatureExtractor {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Extract all features from raw image bytes
    ///
    /// Pipeline: decode/resize -> background estimate -> ink mask ->
    /// texture scan -> hue histogram.
    ///
    /// # Arguments
    /// * `image_bytes` - Opaque buffer claimed to encode a raster image
    ///
    /// # Returns
    /// `DrawingFeatures`, or `AnalysisError::EmptyCanvas` when no pixel
    /// differs from the background (callers short-circuit to a default
    /// label), or a decode error for malformed bytes.
    pub fn extract(&self, image_bytes: &[u8]) -> Result<DrawingFeatures, AnalysisError> {
        let grid = PixelGrid::decode(image_bytes, self.config.working_size)?;
        let background = grid.background_estimate();
        let mask = InkMask::build(&grid, &background, self.config.ink_distance_threshold);

        if mask.ink_count() == 0 {
            return Err(AnalysisError::EmptyCanvas);
        }

        let gradient_density = texture::gradient_density(
            &grid,
            &mask,
            self.config.texture_row_stride,
            self.config.gradient_intensity_threshold,
        );

        let mut histogram = HueHistogram::new();
        for &rgb in mask.ink_colors() {
            histogram.add(rgb);
        }
        let dominant = histogram.dominant();

        Ok(DrawingFeatures {
            ink_ratio: mask.ink_ratio(),
            gradient_density,
            hue_deg: dominant.hue_deg,
            saturation: dominant.saturation,
            value: dominant.value,
            ink_pixels: mask.ink_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a synthetic drawing: `ink` square of `half * 2` side on `bg`
    fn drawing_png(size: u32, bg: [u8; 4], ink: [u8; 4], half: u32) -> Vec<u8> {
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

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(AnalysisConfig::default())
    }

    #[test]
    fn test_empty_canvas_short_circuits() {
        let bytes = drawing_png(128, [255, 255, 255, 255], [255, 255, 255, 255], 0);
        let err = extractor().extract(&bytes).unwrap_err();
        assert!(
            matches!(err, AnalysisError::EmptyCanvas),
            "Uniform canvas should report EmptyCanvas, got {:?}",
            err
        );
    }

    #[test]
    fn test_square_drawing_features() {
        // 48x48 red square on 128x128 white: ink_ratio = 2304/16384 ~ 0.1406
        let bytes = drawing_png(128, [255, 255, 255, 255], [255, 0, 0, 255], 24);
        let features = extractor().extract(&bytes).expect("extract");

        assert!(
            (features.ink_ratio - 0.1406).abs() < 0.02,
            "Expected ink ratio near 0.14, got {}",
            features.ink_ratio
        );
        assert_eq!(
            features.gradient_density, 0.0,
            "Flat color square has no sharp pairs"
        );
        assert!(
            (features.hue_deg - 15.0).abs() < 1e-9,
            "Red ink should land in the first hue bin, got {}",
            features.hue_deg
        );
        assert!(features.saturation > 0.9);
        assert!(features.value > 0.9);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let bytes = drawing_png(128, [255, 255, 255, 255], [10, 60, 200, 255], 20);
        let a = extractor().extract(&bytes).expect("first extract");
        let b = extractor().extract(&bytes).expect("second extract");

        assert_eq!(a.ink_pixels, b.ink_pixels);
        assert_eq!(a.ink_ratio, b.ink_ratio);
        assert_eq!(a.gradient_density, b.gradient_density);
        assert_eq!(a.hue_deg, b.hue_deg);
    }

    #[test]
    fn test_decode_failure_propagates() {
        let garbage = b"not an image at all";
        assert!(matches!(
            extractor().extract(garbage),
            Err(AnalysisError::DecodeFailed { .. })
        ));
    }
}

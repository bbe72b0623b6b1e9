// Types module - Data structures for drawing feature extraction

/// Features extracted from one drawing
///
/// All values are computed over the 128x128 working grid. `hue_deg`,
/// `saturation`, and `value` describe the dominant hue bin of the ink
/// colors; the ratios are fractions in [0, 1].
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct DrawingFeatures {
    /// Fraction of pixels classified as ink
    pub ink_ratio: f64,
    /// Fraction of adjacent ink pairs with a sharp intensity change
    pub gradient_density: f64,
    /// Center angle of the dominant hue bin, in degrees [0, 360)
    pub hue_deg: f64,
    /// Mean saturation of the dominant hue bin
    pub saturation: f64,
    /// Mean value (brightness) of the dominant hue bin
    pub value: f64,
    /// Absolute ink pixel count (diagnostic)
    pub ink_pixels: usize,
}

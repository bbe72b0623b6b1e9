// Analysis module - drawing-to-label pipeline
//
// This module orchestrates the offline drawing analysis used when the
// external labeling service is unavailable or returns a degenerate result.
//
// Architecture:
// - Pipeline: PixelGrid -> InkMask -> texture/hue features -> LabelClassifier
// - DrawingAnalyzer: total entry point; any fault degrades to the fixed
//   default label for the requested feature type
//
// The pipeline is a single pass with early-exit branches and no state
// machine; each call is independent and bounded by the working grid size.

pub mod classifier;
pub mod features;

pub use classifier::{LabelClassifier, StyleLabel, VibeLabel};
pub use features::{DrawingFeatures, FeatureExtractor};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use std::fmt;

/// Which label family the caller wants for a drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Style,
    Vibe,
}

/// One label from the shared vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Label {
    Style(StyleLabel),
    Vibe(VibeLabel),
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Style(style) => style.as_str(),
            Label::Vibe(vibe) => vibe.as_str(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed default label per feature type (fallback-of-a-fallback)
pub fn default_label(kind: FeatureKind) -> Label {
    match kind {
        FeatureKind::Style => Label::Style(StyleLabel::Melodic),
        FeatureKind::Vibe => Label::Vibe(VibeLabel::Calm),
    }
}

/// DrawingAnalyzer - total image-bytes-to-label function
///
/// Couples the feature extractor and the classifier behind one boundary.
/// `extract` never fails: decode errors, an empty ink mask, and any other
/// internal fault all yield the fixed default for the requested kind. The
/// error is logged exactly once, here.
pub struct DrawingAnalyzer {
    extractor: FeatureExtractor,
    classifier: LabelClassifier,
}

impl DrawingAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(config.clone()),
            classifier: LabelClassifier::new(config),
        }
    }

    /// Create with default thresholds
    pub fn with_defaults() -> Self {
        Self::new(AnalysisConfig::default())
    }

    /// Infer a label from raw image bytes
    ///
    /// Total over its signature: malformed bytes or a blank canvas return
    /// the default (`Melodic` for style, `Calm` for vibe) rather than an
    /// error.
    pub fn extract(&self, image_bytes: &[u8], kind: FeatureKind) -> Label {
        match self.try_extract(image_bytes, kind) {
            Ok(label) => label,
            Err(err) => {
                tracing::warn!(
                    "[Analysis] Falling back to default {:?} label: {}",
                    kind,
                    err
                );
                default_label(kind)
            }
        }
    }

    /// Fallible pipeline behind the total boundary
    fn try_extract(&self, image_bytes: &[u8], kind: FeatureKind) -> Result<Label, AnalysisError> {
        let features = self.extractor.extract(image_bytes)?;
        tracing::debug!(
            "[Analysis] ink_ratio={:.4} density={:.4} hue={:.1} sat={:.2} val={:.2}",
            features.ink_ratio,
            features.gradient_density,
            features.hue_deg,
            features.saturation,
            features.value
        );

        Ok(match kind {
            FeatureKind::Style => Label::Style(self.classifier.classify_style(&features)),
            FeatureKind::Vibe => Label::Vibe(self.classifier.classify_vibe(&features)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_png(color: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(128, 128, image::Rgba(color));
        let mut bytes = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut bytes, image::ImageOutputFormat::Png)
            .expect("PNG encoding of test image");
        bytes.into_inner()
    }

    #[test]
    fn test_blank_canvas_returns_defaults() {
        let analyzer = DrawingAnalyzer::with_defaults();
        let bytes = solid_png([240, 240, 240, 255]);

        assert_eq!(
            analyzer.extract(&bytes, FeatureKind::Style),
            Label::Style(StyleLabel::Melodic)
        );
        assert_eq!(
            analyzer.extract(&bytes, FeatureKind::Vibe),
            Label::Vibe(VibeLabel::Calm)
        );
    }

    #[test]
    fn test_garbage_bytes_return_defaults() {
        let analyzer = DrawingAnalyzer::with_defaults();
        let garbage = vec![0x00u8, 0xFF, 0x13, 0x37];

        assert_eq!(
            analyzer.extract(&garbage, FeatureKind::Style),
            Label::Style(StyleLabel::Melodic),
            "Style extraction must be total over garbage bytes"
        );
        assert_eq!(
            analyzer.extract(&garbage, FeatureKind::Vibe),
            Label::Vibe(VibeLabel::Calm),
            "Vibe extraction must be total over garbage bytes"
        );
    }

    #[test]
    fn test_empty_buffer_returns_defaults() {
        let analyzer = DrawingAnalyzer::with_defaults();
        assert_eq!(
            analyzer.extract(&[], FeatureKind::Style),
            Label::Style(StyleLabel::Melodic)
        );
    }

    #[test]
    fn test_label_serializes_to_bare_string() {
        let label = Label::Vibe(VibeLabel::Futuristic);
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"Futuristic\"");
    }

    /// Writer that collects subscriber output into a shared buffer
    #[derive(Clone, Default)]
    struct CaptureWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_fallback_emits_tracing_warning() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let analyzer = DrawingAnalyzer::with_defaults();
            assert_eq!(
                analyzer.extract(b"not an image", FeatureKind::Style),
                Label::Style(StyleLabel::Melodic)
            );
        });

        let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        assert!(
            output.contains("Falling back to default"),
            "Degrading to the default label should emit a warning event, got: {}",
            output
        );
    }
}

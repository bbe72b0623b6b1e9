// Error types for the sketchsynth fallback core
//
// This module defines custom error types for drawing analysis and audio
// synthesis. Analysis errors never escape the public `extract` boundary
// (the analyzer degrades to a default label instead); synthesis errors do
// escape, because there is no deeper fallback below the synthesizer.

use std::fmt;

/// Drawing analysis errors
///
/// These cover image decoding and the segmentation pipeline. They are
/// internal to the analyzer: the public entry point converts every variant
/// into the fixed default label for the requested feature type.
#[derive(Debug)]
pub enum AnalysisError {
    /// Input bytes could not be decoded as a raster image
    DecodeFailed { source: image::ImageError },

    /// No pixel differed from the estimated background color
    EmptyCanvas,

    /// The configured working resolution was zero
    DegenerateGrid { size: u32 },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::DecodeFailed { source } => {
                write!(f, "failed to decode image bytes: {}", source)
            }
            AnalysisError::EmptyCanvas => {
                write!(f, "no ink found above the background estimate")
            }
            AnalysisError::DegenerateGrid { size } => {
                write!(f, "degenerate working grid ({}x{})", size, size)
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::DecodeFailed { source } => Some(source),
            _ => None,
        }
    }
}

impl From<image::ImageError> for AnalysisError {
    fn from(err: image::ImageError) -> Self {
        AnalysisError::DecodeFailed { source: err }
    }
}

/// Audio synthesis errors
///
/// Synthesis has no fallback below it, so these propagate to the caller,
/// which must report total generation failure upward.
#[derive(Debug)]
pub enum SynthError {
    /// A configured parameter made the render impossible
    InvalidParameters { reason: String },

    /// The WAV container could not be written
    EncodeFailed { source: hound::Error },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidParameters { reason } => {
                write!(f, "invalid synthesis parameters: {}", reason)
            }
            SynthError::EncodeFailed { source } => {
                write!(f, "failed to encode WAV container: {}", source)
            }
        }
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynthError::EncodeFailed { source } => Some(source),
            _ => None,
        }
    }
}

impl From<hound::Error> for SynthError {
    fn from(err: hound::Error) -> Self {
        SynthError::EncodeFailed { source: err }
    }
}

// Fallback module - ordered strategy chains per capability
//
// Each capability ("produce a label", "produce a clip") is an ordered list
// of sources tried in sequence until one succeeds. The HTTP layer pushes
// its cloud clients ahead of the local sources; this crate only ships the
// local ends of the chains. A declined source is a normal outcome, not an
// error, which keeps the cascade out of exception-driven control flow.

use crate::analysis::{default_label, DrawingAnalyzer, FeatureKind, Label};
use crate::synth::ToneSynthesizer;

/// A strategy that may label a drawing
pub trait LabelSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Attempt to produce a label; `None` means "try the next source"
    fn produce_label(&self, image_bytes: &[u8], kind: FeatureKind) -> Option<Label>;
}

/// A strategy that may render an audio clip for a prompt
pub trait ClipSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Attempt to produce an encoded clip; `None` means "try the next source"
    fn produce_clip(&self, prompt: &str) -> Option<Vec<u8>>;
}

/// Ordered label strategies with a guaranteed outcome
///
/// The chain always yields a label: if every source declines (possible only
/// when the local analyzer is not in the chain), the fixed default for the
/// requested kind is returned.
#[derive(Default)]
pub struct LabelPipeline {
    sources: Vec<Box<dyn LabelSource>>,
}

impl LabelPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain ending in the local drawing analyzer
    pub fn with_local_analyzer(analyzer: DrawingAnalyzer) -> Self {
        let mut pipeline = Self::new();
        pipeline.push(Box::new(analyzer));
        pipeline
    }

    /// Append a source; earlier sources are tried first
    pub fn push(&mut self, source: Box<dyn LabelSource>) {
        self.sources.push(source);
    }

    /// Try each source in order and return the first label produced
    pub fn label(&self, image_bytes: &[u8], kind: FeatureKind) -> Label {
        for source in &self.sources {
            if let Some(label) = source.produce_label(image_bytes, kind) {
                log::info!("[Fallback] {:?} label from source '{}'", kind, source.name());
                return label;
            }
            log::debug!("[Fallback] source '{}' declined", source.name());
        }
        log::warn!("[Fallback] all label sources declined, using default");
        default_label(kind)
    }
}

/// Ordered clip strategies
///
/// Exhaustion means total generation failure; there is nothing below the
/// last source, so callers must surface `None` upward.
#[derive(Default)]
pub struct ClipPipeline {
    sources: Vec<Box<dyn ClipSource>>,
}

impl ClipPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain ending in the local procedural synthesizer
    pub fn with_local_synth(synth: ToneSynthesizer) -> Self {
        let mut pipeline = Self::new();
        pipeline.push(Box::new(synth));
        pipeline
    }

    /// Append a source; earlier sources are tried first
    pub fn push(&mut self, source: Box<dyn ClipSource>) {
        self.sources.push(source);
    }

    /// Try each source in order; `None` when every source failed
    pub fn clip(&self, prompt: &str) -> Option<Vec<u8>> {
        for source in &self.sources {
            if let Some(clip) = source.produce_clip(prompt) {
                log::info!("[Fallback] clip from source '{}'", source.name());
                return Some(clip);
            }
            log::debug!("[Fallback] source '{}' declined", source.name());
        }
        log::error!("[Fallback] all clip sources failed for this prompt");
        None
    }
}

impl LabelSource for DrawingAnalyzer {
    fn name(&self) -> &str {
        "local-analyzer"
    }

    // Total by design, so this source never declines
    fn produce_label(&self, image_bytes: &[u8], kind: FeatureKind) -> Option<Label> {
        Some(self.extract(image_bytes, kind))
    }
}

impl ClipSource for ToneSynthesizer {
    fn name(&self) -> &str {
        "local-synth"
    }

    fn produce_clip(&self, prompt: &str) -> Option<Vec<u8>> {
        match self.synthesize(prompt) {
            Ok(clip) => Some(clip),
            Err(err) => {
                log::warn!("[Fallback] local synthesis failed: {}", err);
                None
            }
        }
    }
}

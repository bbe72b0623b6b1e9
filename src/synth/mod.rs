// Synth module - deterministic procedural audio fallback
//
// When the external generative-audio service fails, this synthesizer
// renders a playable clip locally: a three-voice chord selected by the
// prompt text, shaped by an ADSR envelope, encoded as mono 16-bit WAV.
//
// Module organization:
// - chord: prompt hashing, chord quality, partial frequencies
// - envelope: ADSR breakpoints and per-sample gain
// - wav: in-memory RIFF/WAVE encoding
// - mod.rs: ToneSynthesizer (render loop and quantization)
//
// Everything is a pure function of the prompt and the configuration: the
// same prompt always renders byte-identical output.

mod chord;
mod envelope;
mod wav;

pub use chord::{is_minor_leaning, prompt_seed, Chord, FIFTH, MAJOR_THIRD, MINOR_THIRD};
pub use envelope::AdsrEnvelope;
pub use wav::encode_pcm16_mono;

use crate::config::SynthConfig;
use crate::error::SynthError;
use std::f64::consts::TAU;

/// ToneSynthesizer renders a prompt into an encoded WAV clip
///
/// Stateless apart from its configuration; concurrent calls are
/// independent. There is no fallback below this layer: errors propagate to
/// the caller, which must treat them as total generation failure.
pub struct ToneSynthesizer {
    config: SynthConfig,
}

impl ToneSynthesizer {
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Create with default parameters (12.0 s mono at 44100 Hz)
    pub fn with_defaults() -> Self {
        Self::new(SynthConfig::default())
    }

    /// Render a prompt into a WAV byte buffer
    ///
    /// # Arguments
    /// * `prompt` - UTF-8 text prompt, arbitrary length
    ///
    /// # Returns
    /// A complete RIFF/WAVE buffer with exactly
    /// `sample_rate * duration_secs` mono i16 samples, or `SynthError` when
    /// the configuration is unusable or encoding fails.
    pub fn synthesize(&self, prompt: &str) -> Result<Vec<u8>, SynthError> {
        let cfg = &self.config;
        if cfg.sample_rate == 0 || cfg.duration_secs <= 0.0 {
            return Err(SynthError::InvalidParameters {
                reason: format!(
                    "sample_rate={} duration_secs={}",
                    cfg.sample_rate, cfg.duration_secs
                ),
            });
        }

        let total_samples = (cfg.sample_rate as f64 * cfg.duration_secs) as usize;
        let chord = Chord::from_prompt(prompt, cfg);
        let envelope = AdsrEnvelope::new(cfg, total_samples);

        tracing::info!(
            "[Synth] Rendering {} samples, base {:.1} Hz, {}",
            total_samples,
            chord.voices()[0],
            if chord.is_minor() { "minor" } else { "major" }
        );

        let samples = self.render(&chord, &envelope, total_samples);
        wav::encode_pcm16_mono(&samples, cfg.sample_rate)
    }

    /// Sum the chord partials through the envelope and quantize to i16
    ///
    /// Each sample depends only on its index, the chord, and the envelope,
    /// so the loop is a single deterministic pass.
    fn render(&self, chord: &Chord, envelope: &AdsrEnvelope, total_samples: usize) -> Vec<i16> {
        let sr = self.config.sample_rate as f64;
        let headroom = self.config.headroom;
        let [f1, f2, f3] = chord.voices();

        let mut samples = Vec::with_capacity(total_samples);
        for i in 0..total_samples {
            let t = i as f64 / sr;
            let partials =
                ((TAU * f1 * t).sin() + (TAU * f2 * t).sin() + (TAU * f3 * t).sin()) / 3.0;
            let value = (headroom * envelope.gain(i) * partials).clamp(-1.0, 1.0);
            samples.push((value * 32767.0) as i16);
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesizer() -> ToneSynthesizer {
        ToneSynthesizer::with_defaults()
    }

    #[test]
    fn test_output_is_deterministic() {
        let a = synthesizer().synthesize("dark techno").expect("first render");
        let b = synthesizer()
            .synthesize("dark techno")
            .expect("second render");
        assert_eq!(a, b, "Same prompt must render byte-identical output");
    }

    #[test]
    fn test_different_prompts_differ() {
        let a = synthesizer().synthesize("dark techno").expect("render");
        let b = synthesizer().synthesize("calm ambient").expect("render");
        assert_ne!(a, b, "Different prompts should select different chords");
    }

    #[test]
    fn test_sample_count_is_exact() {
        let bytes = synthesizer().synthesize("anything").expect("render");
        let reader = hound::WavReader::new(std::io::Cursor::new(bytes)).expect("reread");
        assert_eq!(
            reader.len(),
            44100 * 12,
            "Clip must contain exactly sample_rate * duration samples"
        );
    }

    #[test]
    fn test_amplitude_stays_under_headroom() {
        let bytes = synthesizer().synthesize("loud gritty neuro").expect("render");
        let mut reader = hound::WavReader::new(std::io::Cursor::new(bytes)).expect("reread");
        let bound = (0.28_f64 * 32767.0).ceil() as i32;

        for sample in reader.samples::<i16>() {
            let s = sample.expect("sample").abs() as i32;
            assert!(s <= bound, "Sample magnitude {} exceeds headroom {}", s, bound);
        }
    }

    #[test]
    fn test_empty_prompt_renders() {
        // Totality over arbitrary prompts, including empty
        let bytes = synthesizer().synthesize("").expect("render");
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SynthConfig {
            duration_secs: 0.0,
            ..SynthConfig::default()
        };
        let result = ToneSynthesizer::new(config).synthesize("prompt");
        assert!(
            matches!(result, Err(SynthError::InvalidParameters { .. })),
            "Zero duration must be rejected, not rendered"
        );
    }
}

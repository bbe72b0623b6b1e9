//! Configuration management for classifier and synthesizer tuning
//!
//! This module provides runtime configuration loading from JSON files,
//! enabling threshold experiments without recompilation. Every cutoff used
//! by the drawing classifier (ink distance, ratio/density thresholds, hue
//! wheel partition) and every synthesis parameter (ADSR, headroom, keyword
//! list) lives here rather than in scattered constants.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub synth: SynthConfig,
}

/// Drawing analysis parameters
///
/// The ratio/density cutoffs are dimensionless fractions in [0, 1]; hue
/// boundaries are degrees on the color wheel in [0, 360).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Square working resolution the decoded image is resized to
    pub working_size: u32,
    /// Channel-wise absolute-difference sum above which a pixel counts as ink
    pub ink_distance_threshold: u32,
    /// Grayscale intensity step above which an adjacent ink pair is "sharp"
    pub gradient_intensity_threshold: u32,
    /// Row stride for the texture scan (every Nth row is examined)
    pub texture_row_stride: usize,

    /// Below this ink ratio a drawing is too sparse to classify (-> Melodic)
    pub sparse_ink_ratio: f64,
    /// Above this ink ratio the style is at least Deep
    pub deep_ink_ratio: f64,
    /// Above this ink ratio the style is at least Funky
    pub funky_ink_ratio: f64,
    /// Above this ink ratio (with heavy texture) the style is Progressive
    pub heavy_ink_ratio: f64,
    /// Gradient density above which the style is at least Funky
    pub funky_density: f64,
    /// Gradient density above which (with heavy ink) the style is Progressive
    pub heavy_density: f64,

    /// Saturation below which the vibe comes from the value tiers
    pub low_saturation: f64,
    /// Value below which a desaturated drawing reads as Dark
    pub dark_value: f64,
    /// Value below which a desaturated drawing reads as Mysterious
    pub muted_value: f64,
    /// Ink ratio below which a Dark vibe softens to Mysterious
    pub faint_dark_ink_ratio: f64,
    /// Gradient density above which a warm vibe hardens to Energetic
    pub energetic_density: f64,
    /// Gradient density above which a Calm vibe shifts to Futuristic
    pub futuristic_density: f64,

    /// Hue wheel partition (upper bounds in degrees)
    pub hue_wheel: HueWheelConfig,
}

/// Upper bounds of the hue arcs, in degrees
///
/// Arcs are left-closed: `[wrap_start, 360) ∪ [0, warm_end)` and
/// `[warm_end, amber_end)` are Energetic, `[amber_end, lime_end)` Euphoric,
/// `[lime_end, green_end)` Funky, `[green_end, cyan_end)` Futuristic,
/// `[cyan_end, blue_end)` Calm, `[blue_end, violet_end)` Mysterious, and the
/// remainder up to `wrap_start` Euphoric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HueWheelConfig {
    pub warm_end: f64,
    pub amber_end: f64,
    pub lime_end: f64,
    pub green_end: f64,
    pub cyan_end: f64,
    pub blue_end: f64,
    pub violet_end: f64,
    pub wrap_start: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            working_size: 128,
            ink_distance_threshold: 56,
            gradient_intensity_threshold: 32,
            texture_row_stride: 2,
            sparse_ink_ratio: 0.02,
            deep_ink_ratio: 0.05,
            funky_ink_ratio: 0.10,
            heavy_ink_ratio: 0.18,
            funky_density: 0.12,
            heavy_density: 0.18,
            low_saturation: 0.15,
            dark_value: 0.35,
            muted_value: 0.7,
            faint_dark_ink_ratio: 0.06,
            energetic_density: 0.09,
            futuristic_density: 0.08,
            hue_wheel: HueWheelConfig::default(),
        }
    }
}

impl Default for HueWheelConfig {
    fn default() -> Self {
        Self {
            warm_end: 20.0,
            amber_end: 55.0,
            lime_end: 85.0,
            green_end: 165.0,
            cyan_end: 205.0,
            blue_end: 240.0,
            violet_end: 300.0,
            wrap_start: 345.0,
        }
    }
}

/// Procedural synthesizer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Clip duration in seconds
    pub duration_secs: f64,
    /// Lowest base frequency the prompt hash can select, in Hz
    pub base_freq_min_hz: f64,
    /// Width of the base frequency range, in Hz
    pub base_freq_span_hz: u64,
    /// ADSR attack time in seconds
    pub attack_secs: f64,
    /// ADSR decay time in seconds
    pub decay_secs: f64,
    /// ADSR sustain gain in [0, 1]
    pub sustain_level: f64,
    /// ADSR release time in seconds
    pub release_secs: f64,
    /// Fixed output gain applied after partial summing
    pub headroom: f64,
    /// Prompt substrings that select the minor third
    pub minor_keywords: Vec<String>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration_secs: 12.0,
            // 180-360 Hz keeps the chord root roughly in the A3-F#4 range
            base_freq_min_hz: 180.0,
            base_freq_span_hz: 180,
            attack_secs: 0.02,
            decay_secs: 0.30,
            sustain_level: 0.7,
            release_secs: 0.6,
            headroom: 0.28,
            minor_keywords: vec![
                "dark".to_string(),
                "gritty".to_string(),
                "industrial".to_string(),
                "neuro".to_string(),
            ],
        }
    }
}

impl Default for AppConfig {
    /// Default configuration values (fallback if config file not found)
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            synth: SynthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// Loaded configuration, or the defaults if the file is missing or the
    /// JSON is invalid (both cases are logged).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.working_size, 128);
        assert_eq!(config.analysis.ink_distance_threshold, 56);
        assert_eq!(config.synth.sample_rate, 44100);
        assert_eq!(config.synth.duration_secs, 12.0);
        assert_eq!(config.synth.headroom, 0.28);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.analysis.sparse_ink_ratio,
            config.analysis.sparse_ink_ratio
        );
        assert_eq!(parsed.synth.minor_keywords, config.synth.minor_keywords);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from_file("does/not/exist.json");
        assert_eq!(config.analysis.working_size, 128);
    }
}

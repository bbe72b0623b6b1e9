// Classifier - heuristic rule-based drawing classification
//
// This module maps extracted drawing features onto the shared musical label
// vocabulary. Two independent classifications are supported:
//
// Style: how busy the drawing is (ink coverage and stroke texture)
// Vibe: what the drawing's dominant color suggests (hue wheel partition
//       with value tiers for desaturated drawings, plus texture overrides)
//
// Classification uses thresholds from AnalysisConfig and features extracted
// by FeatureExtractor (ink_ratio, gradient_density, hue/saturation/value).

use crate::analysis::features::DrawingFeatures;
use crate::config::AnalysisConfig;
use std::fmt;

/// Style labels shared with the external labeling collaborator
///
/// `Afro` is part of the shared vocabulary but only the external service
/// produces it; the local rules never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StyleLabel {
    /// Sparse, gentle drawing (also the fixed default)
    Melodic,
    /// Moderate coverage, smooth strokes
    Deep,
    /// Textured or fairly dense strokes
    Funky,
    /// Dense and highly textured scribble
    Progressive,
    /// Straight-line dominant drawing (external service only)
    Afro,
}

/// Vibe labels shared with the external labeling collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VibeLabel {
    /// Cool blue or bright desaturated drawing (also the fixed default)
    Calm,
    /// Violet or mid-value desaturated drawing
    Mysterious,
    /// Very dark desaturated drawing with real coverage
    Dark,
    /// Warm hues, especially with busy texture
    Energetic,
    /// Cyan hues or textured calm drawing
    Futuristic,
    /// Lime or magenta hues
    Euphoric,
    /// Green hues
    Funky,
}

impl StyleLabel {
    /// Label string as sent to the prompt builder
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleLabel::Melodic => "Melodic",
            StyleLabel::Deep => "Deep",
            StyleLabel::Funky => "Funky",
            StyleLabel::Progressive => "Progressive",
            StyleLabel::Afro => "Afro",
        }
    }
}

impl VibeLabel {
    /// Label string as sent to the prompt builder
    pub fn as_str(&self) -> &'static str {
        match self {
            VibeLabel::Calm => "Calm",
            VibeLabel::Mysterious => "Mysterious",
            VibeLabel::Dark => "Dark",
            VibeLabel::Energetic => "Energetic",
            VibeLabel::Futuristic => "Futuristic",
            VibeLabel::Euphoric => "Euphoric",
            VibeLabel::Funky => "Funky",
        }
    }
}

impl fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VibeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LabelClassifier applies heuristic rules to drawing features
///
/// All cutoffs come from the immutable AnalysisConfig handed in at
/// construction, so boundary values can be probed precisely in tests.
pub struct LabelClassifier {
    config: AnalysisConfig,
}

impl LabelClassifier {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Classify drawing style from coverage and texture
    ///
    /// Decision order:
    /// 1. IF ink_ratio < sparse THEN Melodic
    /// 2. ELSE IF ink_ratio > heavy AND density > heavy THEN Progressive
    /// 3. ELSE IF density > funky OR ink_ratio > funky THEN Funky
    /// 4. ELSE IF ink_ratio > deep THEN Deep
    /// 5. ELSE Melodic
    pub fn classify_style(&self, features: &DrawingFeatures) -> StyleLabel {
        let cfg = &self.config;

        if features.ink_ratio < cfg.sparse_ink_ratio {
            return StyleLabel::Melodic;
        }
        if features.ink_ratio > cfg.heavy_ink_ratio && features.gradient_density > cfg.heavy_density
        {
            return StyleLabel::Progressive;
        }
        if features.gradient_density > cfg.funky_density
            || features.ink_ratio > cfg.funky_ink_ratio
        {
            return StyleLabel::Funky;
        }
        if features.ink_ratio > cfg.deep_ink_ratio {
            return StyleLabel::Deep;
        }
        StyleLabel::Melodic
    }

    /// Classify drawing vibe from dominant color, with texture overrides
    ///
    /// The base vibe comes from the hue wheel (`base_vibe`); two override
    /// rules apply in order:
    /// (a) Dark with little ink softens to Mysterious
    /// (b) a busy warm drawing hardens to Energetic; a busy Calm drawing
    ///     shifts to Futuristic
    pub fn classify_vibe(&self, features: &DrawingFeatures) -> VibeLabel {
        let cfg = &self.config;

        let mut vibe = self.base_vibe(features.hue_deg, features.saturation, features.value);

        if vibe == VibeLabel::Dark && features.ink_ratio < cfg.faint_dark_ink_ratio {
            vibe = VibeLabel::Mysterious;
        }

        if matches!(vibe, VibeLabel::Energetic | VibeLabel::Euphoric)
            && features.gradient_density > cfg.energetic_density
        {
            return VibeLabel::Energetic;
        }
        if vibe == VibeLabel::Calm && features.gradient_density > cfg.futuristic_density {
            return VibeLabel::Futuristic;
        }
        vibe
    }

    /// Map a dominant HSV color to its base vibe
    ///
    /// Desaturated colors use value tiers (Dark / Mysterious / Calm);
    /// saturated colors use the configured hue arcs, wrapping at 360.
    fn base_vibe(&self, hue_deg: f64, saturation: f64, value: f64) -> VibeLabel {
        let cfg = &self.config;
        let wheel = &cfg.hue_wheel;

        if saturation < cfg.low_saturation {
            if value < cfg.dark_value {
                return VibeLabel::Dark;
            }
            if value < cfg.muted_value {
                return VibeLabel::Mysterious;
            }
            return VibeLabel::Calm;
        }

        if hue_deg < wheel.warm_end || hue_deg >= wheel.wrap_start {
            return VibeLabel::Energetic;
        }
        if hue_deg < wheel.amber_end {
            return VibeLabel::Energetic;
        }
        if hue_deg < wheel.lime_end {
            return VibeLabel::Euphoric;
        }
        if hue_deg < wheel.green_end {
            return VibeLabel::Funky;
        }
        if hue_deg < wheel.cyan_end {
            return VibeLabel::Futuristic;
        }
        if hue_deg < wheel.blue_end {
            return VibeLabel::Calm;
        }
        if hue_deg < wheel.violet_end {
            return VibeLabel::Mysterious;
        }
        VibeLabel::Euphoric
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;

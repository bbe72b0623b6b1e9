// Chord module - prompt-seeded chord selection
//
// The prompt text deterministically selects a base frequency, a chord
// quality, and a small detune for the middle voice. The hash is an explicit
// FNV-1a over the UTF-8 bytes so the same prompt yields the same chord in
// every process and on every platform.

use crate::config::SynthConfig;

/// Minor third interval ratio (6/5)
pub const MINOR_THIRD: f64 = 6.0 / 5.0;
/// Major third interval ratio (5/4)
pub const MAJOR_THIRD: f64 = 5.0 / 4.0;
/// Perfect fifth interval ratio (3/2)
pub const FIFTH: f64 = 3.0 / 2.0;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit FNV-1a hash of the prompt's UTF-8 bytes
///
/// # Examples
/// ```
/// use sketchsynth::synth::prompt_seed;
/// assert_eq!(prompt_seed("dark techno"), prompt_seed("dark techno"));
/// assert_ne!(prompt_seed("dark techno"), prompt_seed("calm ambient"));
/// ```
pub fn prompt_seed(prompt: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in prompt.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Whether the prompt leans minor (selects the 6/5 third)
pub fn is_minor_leaning(prompt: &str, keywords: &[String]) -> bool {
    let lowered = prompt.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}

/// Three sine partial frequencies derived from a prompt
///
/// Voices are `[base, base * third * detune, base * fifth]`; the detune is
/// a seed-derived multiplier near 1.0 applied to the middle voice only, for
/// chorus-like richness.
#[derive(Debug, Clone, Copy)]
pub struct Chord {
    voices: [f64; 3],
    minor: bool,
}

impl Chord {
    /// Build the chord for a prompt
    ///
    /// Base frequency is `base_freq_min_hz + seed % base_freq_span_hz`;
    /// with the default range that is [180, 360) Hz, roughly A3-F#4.
    pub fn from_prompt(prompt: &str, config: &SynthConfig) -> Self {
        let seed = prompt_seed(prompt);
        let base = config.base_freq_min_hz + (seed % config.base_freq_span_hz.max(1)) as f64;

        let minor = is_minor_leaning(prompt, &config.minor_keywords);
        let third = if minor { MINOR_THIRD } else { MAJOR_THIRD };

        // Detune in [0.995, ~1.0046): seven discrete steps off the seed
        let detune = 0.995 + 0.01 * ((seed % 7) as f64 / 7.0);

        Self {
            voices: [base, base * third * detune, base * FIFTH],
            minor,
        }
    }

    /// Partial frequencies in Hz, low to high
    pub fn voices(&self) -> [f64; 3] {
        self.voices
    }

    pub fn is_minor(&self) -> bool {
        self.minor
    }
}

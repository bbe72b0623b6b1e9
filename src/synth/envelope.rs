// Envelope module - ADSR amplitude shaping
//
// Breakpoints are precomputed as sample indices; the per-sample gain is a
// linear interpolation within the current phase. Breakpoints are clamped so
// they stay monotonically non-decreasing and never exceed the total sample
// count, whatever the configured durations.

use crate::config::SynthConfig;

/// Attack/decay/sustain/release gain curve over a fixed sample count
#[derive(Debug, Clone, Copy)]
pub struct AdsrEnvelope {
    attack_end: usize,
    decay_end: usize,
    release_start: usize,
    total_samples: usize,
    sustain_level: f64,
}

impl AdsrEnvelope {
    /// Precompute breakpoints for a clip of `total_samples`
    pub fn new(config: &SynthConfig, total_samples: usize) -> Self {
        let sr = config.sample_rate as f64;
        let attack_end = ((config.attack_secs * sr) as usize).min(total_samples);
        let decay_end =
            (attack_end + (config.decay_secs * sr) as usize).clamp(attack_end, total_samples);
        let release_start = total_samples
            .saturating_sub((config.release_secs * sr) as usize)
            .max(decay_end);

        Self {
            attack_end,
            decay_end,
            release_start,
            total_samples,
            sustain_level: config.sustain_level,
        }
    }

    /// Gain in [0, 1] at sample index `i`
    ///
    /// Attack ramps 0 to 1, decay ramps 1 to the sustain level, sustain is
    /// flat, release ramps the sustain level to 0.
    pub fn gain(&self, i: usize) -> f64 {
        if i < self.attack_end {
            i as f64 / self.attack_end.max(1) as f64
        } else if i < self.decay_end {
            let progress =
                (i - self.attack_end) as f64 / (self.decay_end - self.attack_end).max(1) as f64;
            1.0 - (1.0 - self.sustain_level) * progress
        } else if i < self.release_start {
            self.sustain_level
        } else {
            let progress = (i - self.release_start) as f64
                / (self.total_samples - self.release_start).max(1) as f64;
            (self.sustain_level * (1.0 - progress)).max(0.0)
        }
    }

    pub fn attack_end(&self) -> usize {
        self.attack_end
    }

    pub fn release_start(&self) -> usize {
        self.release_start
    }
}

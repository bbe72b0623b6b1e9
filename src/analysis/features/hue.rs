// Hue module - HSV conversion and the 12-bin hue histogram
//
// Ink colors are histogrammed into twelve 30-degree hue bins, accumulating
// per-bin counts plus saturation and value sums. The dominant bin drives
// the vibe classification; ties break toward the lowest bin index.

/// Number of hue bins (30 degrees each)
pub const HUE_BINS: usize = 12;

/// Convert an RGB color to (hue degrees, saturation, value)
///
/// Hue is in [0, 360), saturation and value in [0, 1]. Achromatic colors
/// (zero chroma) report hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let rf = r as f64 / 255.0;
    let gf = g as f64 / 255.0;
    let bf = b as f64 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let chroma = max - min;

    let value = max;
    let saturation = if max == 0.0 { 0.0 } else { chroma / max };

    let hue = if chroma == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (((gf - bf) / chroma).rem_euclid(6.0))
    } else if max == gf {
        60.0 * ((bf - rf) / chroma + 2.0)
    } else {
        60.0 * ((rf - gf) / chroma + 4.0)
    };

    (hue.rem_euclid(360.0), saturation, value)
}

/// Dominant hue bin summary
#[derive(Debug, Clone, Copy)]
pub struct DominantHue {
    /// Bin-center angle in degrees
    pub hue_deg: f64,
    /// Mean saturation over the bin
    pub saturation: f64,
    /// Mean value over the bin
    pub value: f64,
}

/// Accumulating hue histogram over ink colors
#[derive(Debug, Default)]
pub struct HueHistogram {
    counts: [u32; HUE_BINS],
    sat_sum: [f64; HUE_BINS],
    val_sum: [f64; HUE_BINS],
}

impl HueHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one ink color
    pub fn add(&mut self, rgb: [u8; 3]) {
        let (hue, sat, val) = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
        let idx = ((hue / 30.0) as usize) % HUE_BINS;
        self.counts[idx] += 1;
        self.sat_sum[idx] += sat;
        self.val_sum[idx] += val;
    }

    /// Pick the dominant bin: highest count, ties to the lowest index
    pub fn dominant(&self) -> DominantHue {
        let mut dom_idx = 0;
        for (idx, &count) in self.counts.iter().enumerate() {
            if count > self.counts[dom_idx] {
                dom_idx = idx;
            }
        }

        let count = self.counts[dom_idx].max(1) as f64;
        DominantHue {
            hue_deg: (dom_idx as f64 + 0.5) * 30.0,
            saturation: self.sat_sum[dom_idx] / count,
            value: self.val_sum[dom_idx] / count,
        }
    }
}

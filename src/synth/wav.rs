// WAV module - in-memory PCM container encoding
//
// The synthesizer returns a complete RIFF/WAVE byte buffer rather than a
// file, since the calling layer ships it over the wire. hound handles the
// header and chunk bookkeeping; samples are mono little-endian i16.

use crate::error::SynthError;
use std::io::Cursor;

/// Encode mono 16-bit PCM samples into a WAV byte buffer
///
/// # Arguments
/// * `samples` - Signed 16-bit samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// The complete container: RIFF header, PCM format chunk, and a data chunk
/// of exactly `samples.len() * 2` bytes.
pub fn encode_pcm16_mono(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, SynthError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}

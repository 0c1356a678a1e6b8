//! Decoding WAV data into the environment's waveform format.

use crate::Result;
use hound::{SampleFormat, WavReader};
use std::io::Read;

/// Decode `reader` to a mono waveform in [-1, 1].
///
/// Integer samples are scaled by `2^-(bits - 1)`; float samples are taken
/// as stored. Interleaved channels are averaged per frame, and a trailing
/// partial frame is dropped.
pub(crate) fn decode_mono<R: Read>(reader: WavReader<R>) -> Result<Vec<f32>> {
    let spec = reader.spec();
    let interleaved = match spec.sample_format {
        SampleFormat::Float => collect_samples(reader.into_samples::<f32>(), |x: f32| x)?,
        SampleFormat::Int => {
            let scale = int_scale(spec.bits_per_sample);
            collect_samples(reader.into_samples::<i32>(), |x: i32| x as f32 * scale)?
        }
    };
    Ok(average_channels(interleaved, usize::from(spec.channels)))
}

/// Reciprocal of the full-scale magnitude of a signed `bits`-wide sample.
fn int_scale(bits: u16) -> f32 {
    ((1u64 << (bits - 1)) as f32).recip()
}

fn collect_samples<S, I>(samples: I, convert: impl Fn(S) -> f32) -> Result<Vec<f32>>
where
    I: Iterator<Item = hound::Result<S>>,
{
    let mut out = Vec::with_capacity(samples.size_hint().0);
    for sample in samples {
        out.push(convert(sample?));
    }
    Ok(out)
}

fn average_channels(interleaved: Vec<f32>, channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved;
    }
    let scale = (channels as f32).recip();
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() * scale)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{Sample, WavSpec, WavWriter};
    use std::io::Cursor;

    fn encode<S: Sample + Copy>(
        channels: u16,
        bits_per_sample: u16,
        sample_format: SampleFormat,
        samples: &[S],
    ) -> Vec<u8> {
        let spec = WavSpec {
            channels,
            sample_rate: 16000,
            bits_per_sample,
            sample_format,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    fn decode(bytes: Vec<u8>) -> Vec<f32> {
        decode_mono(WavReader::new(Cursor::new(bytes)).unwrap()).unwrap()
    }

    #[test]
    fn test_int16_scaled_by_half_range() {
        let bytes = encode(1, 16, SampleFormat::Int, &[0i16, 16384, -32768, 32767]);
        assert_eq!(decode(bytes), vec![0.0, 0.5, -1.0, 32767.0 / 32768.0]);
    }

    #[test]
    fn test_other_int_depths() {
        let bytes = encode(1, 8, SampleFormat::Int, &[-128i8, 64]);
        assert_eq!(decode(bytes), vec![-1.0, 0.5]);

        let bytes = encode(1, 24, SampleFormat::Int, &[1i32 << 22, -(1i32 << 23)]);
        assert_eq!(decode(bytes), vec![0.5, -1.0]);
    }

    #[test]
    fn test_float_samples_pass_through() {
        let bytes = encode(1, 32, SampleFormat::Float, &[0.25f32, -0.75]);
        assert_eq!(decode(bytes), vec![0.25, -0.75]);
    }

    #[test]
    fn test_channels_averaged_per_frame() {
        let bytes = encode(2, 32, SampleFormat::Float, &[1.0f32, 0.0, 0.5, 0.5, -1.0, 0.0]);
        assert_eq!(decode(bytes), vec![0.5, 0.5, -0.5]);

        let bytes = encode(3, 16, SampleFormat::Int, &[16384i16, 16384, -16384]);
        assert!((decode(bytes)[0] - 0.5 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_average_channels_drops_partial_frame() {
        assert_eq!(average_channels(vec![1.0, 3.0, 5.0], 2), vec![2.0]);
        assert_eq!(average_channels(vec![1.0, 3.0, 5.0], 1), vec![1.0, 3.0, 5.0]);
    }
}

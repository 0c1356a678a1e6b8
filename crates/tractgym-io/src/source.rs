//! The waveform source contract.

use crate::wav::decode_mono;
use crate::{Error, Result};
use hound::WavReader;
use std::path::{Path, PathBuf};

/// Supplies a mono waveform in [-1, 1] at a requested sample rate.
pub trait WaveSource {
    /// Load the waveform at `sample_rate` Hz.
    fn load(&self, sample_rate: u32) -> Result<Vec<f32>>;
}

/// A WAV file on disk.
///
/// Any channel count, integer depths up to 32 bits, and 32-bit float data
/// are accepted. The file must already be at the requested rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    path: PathBuf,
}

impl WavFile {
    /// Create a source for the file at `path`. The file is read on [`WaveSource::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WaveSource for WavFile {
    fn load(&self, sample_rate: u32) -> Result<Vec<f32>> {
        let reader = WavReader::open(&self.path)?;
        let spec = reader.spec();
        if spec.sample_rate != sample_rate {
            return Err(Error::SampleRateMismatch {
                path: self.path.clone(),
                expected: sample_rate,
                found: spec.sample_rate,
            });
        }

        let wave = decode_mono(reader)?;
        tracing::debug!(
            path = %self.path.display(),
            samples = wave.len(),
            channels = spec.channels,
            bits = spec.bits_per_sample,
            "wave loaded"
        );
        Ok(wave)
    }
}

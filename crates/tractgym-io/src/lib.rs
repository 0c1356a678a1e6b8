//! Waveform sources for the tractgym environment.
//!
//! The environment consumes mono waveforms normalized to [-1, 1] at a fixed
//! sample rate. This crate provides:
//!
//! - **[`WaveSource`]**: the contract a target-sound provider satisfies
//! - **[`WavFile`]**: a WAV-backed source that scales integer samples to
//!   [-1, 1] and averages channels down to mono
//!
//! Resampling is not performed; a file at the wrong rate is an error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tractgym_io::{WavFile, WaveSource};
//!
//! let target = WavFile::new("vowel_a.wav").load(44100)?;
//! ```

mod source;
mod wav;

pub use source::{WavFile, WaveSource};

use std::path::PathBuf;

/// Error types for waveform loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened or decoded as WAV.
    #[error("failed to read WAV data: {0}")]
    Wav(#[from] hound::Error),

    /// The file's sample rate differs from the requested one.
    #[error(
        "sample rate mismatch for '{}': expected {expected} Hz, found {found} Hz",
        path.display()
    )]
    SampleRateMismatch {
        /// File that was loaded.
        path: PathBuf,
        /// Rate the caller asked for.
        expected: u32,
        /// Rate stored in the file.
        found: u32,
    },
}

/// Result type for waveform operations.
pub type Result<T> = std::result::Result<T, Error>;

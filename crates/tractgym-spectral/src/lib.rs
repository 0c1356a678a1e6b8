//! Tractgym Spectral - shape-exact spectrograms for vocal-tract control
//!
//! This crate turns raw waveforms into the time-frequency matrices an agent
//! observes each control step:
//!
//! - [`frame`] - Frame arithmetic predicting spectrogram shapes from lengths
//! - [`padding`] - Tail and two-sided boundary extension of sample buffers
//! - [`fft`] - Real-input FFT wrapper with windowing functions
//! - [`stft`] - Centered short-time Fourier transform
//! - [`config`] - TOML-loadable transform configuration
//!
//! ## Shape Contract
//!
//! For a buffer of `n` samples, window `w` and hop `h`, the transform yields
//! `ceil(n / h) + 1` frames of `w / 2 + 1` complex bins. Downstream buffer
//! sizes can be computed from lengths alone:
//!
//! ```rust
//! use tractgym_spectral::{rfft_channel_count, target_time_steps};
//!
//! assert_eq!(rfft_channel_count(1024), 513);
//! assert_eq!(target_time_steps(1024, 1024, 256), 5);
//! ```
//!
//! ## Spectrogram
//!
//! ```rust
//! use tractgym_spectral::{PadMode, stft};
//!
//! let wave: Vec<f32> = (0..1024).map(|i| (i as f32 * 0.01).sin()).collect();
//! let spec = stft(&wave, 1024, 256, PadMode::Reflect).unwrap();
//! assert_eq!(spec.shape(), (5, 513));
//! ```
//!
//! ## Aligning Buffers
//!
//! ```rust
//! use tractgym_spectral::{PadMode, PadOptions, pad_tail};
//!
//! let padded = pad_tail(&[0.1, 0.2, 0.3], 5, PadMode::Edge, &PadOptions::default()).unwrap();
//! assert_eq!(padded, vec![0.1, 0.2, 0.3, 0.3, 0.3]);
//! ```

pub mod config;
pub mod error;
pub mod fft;
pub mod frame;
pub mod padding;
pub mod stft;

// Re-export main types
pub use config::StftConfig;
pub use error::{PaddingError, SpectralError};
pub use fft::{Fft, Window};
pub use frame::{center_pad_length, rfft_channel_count, target_time_steps};
pub use padding::{PadMode, PadOptions, ReflectType, pad_both, pad_tail};
pub use stft::{ComplexSpectrogram, StftAnalyzer, stft};

/// Complex sample type produced by the transform.
pub use rustfft::num_complex::Complex;

//! Centered short-time Fourier transform
//!
//! The waveform is extended by `window_size / 2` samples at both ends before
//! framing, so frame 0 is centered on sample 0. Exactly
//! [`target_time_steps`] frames are produced; a final frame that runs past
//! the extended buffer is completed with zeros. Each frame is windowed,
//! transformed with a real-input FFT and truncated to
//! [`rfft_channel_count`] bins.
//!
//! With the default periodic Hann window and even window sizes whose hop
//! divides the buffer length, the output matches librosa's centered `stft`
//! transposed to time-major layout.

use crate::config::StftConfig;
use crate::error::SpectralError;
use crate::fft::{self, Fft, Window};
use crate::frame::{center_pad_length, rfft_channel_count, target_time_steps};
use crate::padding::{PadMode, PadOptions, pad_both};
use rustfft::num_complex::Complex;

/// Complex time-frequency matrix, time-major.
///
/// `frames()[t][k]` is bin `k` (DC first, Nyquist last) of frame `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSpectrogram {
    frames: Vec<Vec<Complex<f32>>>,
    window_size: usize,
    hop_len: usize,
}

impl ComplexSpectrogram {
    /// `(time_steps, bins)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_frames(), self.num_bins())
    }

    /// Number of time frames
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of frequency bins per frame (`window_size / 2 + 1`)
    pub fn num_bins(&self) -> usize {
        rfft_channel_count(self.window_size)
    }

    /// Window size the matrix was computed with
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Hop length the matrix was computed with
    pub fn hop_len(&self) -> usize {
        self.hop_len
    }

    /// All frames, time ascending
    pub fn frames(&self) -> &[Vec<Complex<f32>>] {
        &self.frames
    }

    /// Consume the spectrogram, returning its frames
    pub fn into_frames(self) -> Vec<Vec<Complex<f32>>> {
        self.frames
    }

    /// Get the spectrum for a specific time frame
    pub fn frame(&self, frame: usize) -> Option<&[Complex<f32>]> {
        self.frames.get(frame).map(|v| v.as_slice())
    }

    /// Get the value at a specific time and frequency
    ///
    /// Returns None if out of bounds
    pub fn get(&self, frame: usize, bin: usize) -> Option<Complex<f32>> {
        self.frames.get(frame).and_then(|f| f.get(bin)).copied()
    }

    /// Magnitude matrix `|z|`, same layout
    pub fn magnitude(&self) -> Vec<Vec<f32>> {
        self.frames
            .iter()
            .map(|frame| frame.iter().map(|c| c.norm()).collect())
            .collect()
    }

    /// Magnitude matrix in dB, floored at -200 dB
    pub fn magnitude_db(&self) -> Vec<Vec<f32>> {
        self.frames.iter().map(|frame| fft::magnitude_db(frame)).collect()
    }

    /// Bin with the largest magnitude in a frame
    pub fn peak_bin(&self, frame: usize) -> Option<usize> {
        let spectrum = self.frame(frame)?;
        spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
            .map(|(bin, _)| bin)
    }

    /// Get frequency in Hz for a given bin index
    pub fn bin_to_freq(&self, bin: usize, sample_rate: f32) -> f32 {
        bin as f32 * sample_rate / self.window_size as f32
    }

    /// Get the center time in seconds of a given frame
    pub fn frame_to_time(&self, frame: usize, sample_rate: f32) -> f32 {
        frame as f32 * self.hop_len as f32 / sample_rate
    }
}

/// Reusable STFT planner.
///
/// Holds the window coefficients and FFT plan for one [`StftConfig`], so
/// per-step analysis does no planning. The analyzer is `Send + Sync` and
/// can serve several environments concurrently.
#[derive(Debug, Clone)]
pub struct StftAnalyzer {
    config: StftConfig,
    fft: Fft,
    window_coeffs: Vec<f32>,
}

impl StftAnalyzer {
    /// Create a new STFT analyzer
    ///
    /// # Errors
    ///
    /// [`SpectralError::InvalidConfig`] if the window size or hop length is zero.
    pub fn new(config: StftConfig) -> Result<Self, SpectralError> {
        config.validate()?;
        let fft = Fft::new(config.window_size);
        let window_coeffs = config.window.coefficients(config.window_size);

        Ok(Self {
            config,
            fft,
            window_coeffs,
        })
    }

    /// Configuration this analyzer was built from
    pub fn config(&self) -> &StftConfig {
        &self.config
    }

    /// Compute the complex spectrogram of a waveform
    ///
    /// # Errors
    ///
    /// [`SpectralError::Padding`] if `wave` is empty and the centering mode
    /// needs samples to extend from.
    pub fn analyze(&self, wave: &[f32]) -> Result<ComplexSpectrogram, SpectralError> {
        let StftConfig {
            window_size,
            hop_len,
            padding_mode,
            ..
        } = self.config;

        let pad = center_pad_length(window_size);
        let extended = pad_both(wave, pad, pad, padding_mode, &PadOptions::default())?;
        let num_frames = target_time_steps(wave.len(), window_size, hop_len);

        let mut frames = Vec::with_capacity(num_frames);
        let mut frame = vec![0.0; window_size];

        for frame_idx in 0..num_frames {
            let start = (frame_idx * hop_len).min(extended.len());
            let end = (start + window_size).min(extended.len());
            let available = end - start;

            // Extract frame, zero-completing past the extended buffer
            frame[..available].copy_from_slice(&extended[start..end]);
            frame[available..].fill(0.0);

            for (sample, &coeff) in frame.iter_mut().zip(self.window_coeffs.iter()) {
                *sample *= coeff;
            }

            frames.push(self.fft.forward(&frame));
        }

        tracing::debug!(
            samples = wave.len(),
            frames = num_frames,
            bins = self.fft.num_bins(),
            padding = %padding_mode,
            "stft computed"
        );

        Ok(ComplexSpectrogram {
            frames,
            window_size,
            hop_len,
        })
    }
}

/// Compute the centered STFT of `wave` with a periodic Hann window.
///
/// Returns a `(target_time_steps(len, window_size, hop_len),
/// rfft_channel_count(window_size))` complex matrix, time-major.
///
/// # Errors
///
/// - [`SpectralError::InvalidConfig`] if `window_size` or `hop_len` is zero
/// - [`SpectralError::Padding`] if `wave` is empty and `padding_mode` needs samples
pub fn stft(
    wave: &[f32],
    window_size: usize,
    hop_len: usize,
    padding_mode: PadMode,
) -> Result<ComplexSpectrogram, SpectralError> {
    let config = StftConfig {
        window_size,
        hop_len,
        padding_mode,
        window: Window::Hann,
    };
    StftAnalyzer::new(config)?.analyze(wave)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * i as f32 / (len - 1) as f32).sin())
            .collect()
    }

    #[test]
    fn test_shape_matches_frame_math() {
        let wave = sine(1024);
        let spec = stft(&wave, 1024, 256, PadMode::Reflect).unwrap();
        assert_eq!(
            spec.shape(),
            (target_time_steps(1024, 1024, 256), rfft_channel_count(1024))
        );
        assert!(spec.frames().iter().all(|f| f.len() == 513));
    }

    #[test]
    fn test_shape_when_hop_does_not_divide_length() {
        let wave = sine(1000);
        let spec = stft(&wave, 512, 256, PadMode::Reflect).unwrap();
        assert_eq!(spec.shape(), (5, 257));
    }

    #[test]
    fn test_odd_window_shape() {
        let wave = sine(600);
        let spec = stft(&wave, 501, 100, PadMode::Constant).unwrap();
        assert_eq!(spec.shape(), (7, 251));
    }

    #[test]
    fn test_window_longer_than_wave() {
        let wave = sine(100);
        let spec = stft(&wave, 1024, 256, PadMode::Reflect).unwrap();
        assert_eq!(spec.shape(), (2, 513));
    }

    #[test]
    fn test_dc_signal_concentrates_in_bin_zero() {
        let wave = vec![0.5; 2048];
        let spec = stft(&wave, 256, 64, PadMode::Edge).unwrap();
        for frame in 0..spec.num_frames() {
            assert_eq!(spec.peak_bin(frame), Some(0));
        }
        // Hann-weighted DC: 0.5 * sum(window) = 0.5 * 128
        let dc = spec.get(4, 0).unwrap();
        assert!((dc.re - 64.0).abs() < 1e-2, "dc = {dc}");
        assert!(dc.im.abs() < 1e-3);
    }

    #[test]
    fn test_sine_peak_frequency() {
        let sr = 8000.0;
        let wave: Vec<f32> = (0..4096)
            .map(|i| (2.0 * PI * 1000.0 * i as f32 / sr).sin())
            .collect();
        let spec = stft(&wave, 512, 128, PadMode::Reflect).unwrap();
        let peak = spec.peak_bin(10).unwrap();
        assert!((spec.bin_to_freq(peak, sr) - 1000.0).abs() < sr / 512.0);
    }

    #[test]
    fn test_empty_wave() {
        let spec = stft(&[], 256, 64, PadMode::Constant).unwrap();
        assert_eq!(spec.shape(), (1, 129));
        assert!(spec.frames()[0].iter().all(|c| c.norm() == 0.0));

        assert!(matches!(
            stft(&[], 256, 64, PadMode::Reflect),
            Err(SpectralError::Padding(_))
        ));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(matches!(
            stft(&[0.0; 16], 0, 4, PadMode::Reflect),
            Err(SpectralError::InvalidConfig(_))
        ));
        assert!(matches!(
            stft(&[0.0; 16], 8, 0, PadMode::Reflect),
            Err(SpectralError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_analyzer_is_reusable() {
        let analyzer = StftAnalyzer::new(StftConfig::new(256, 128)).unwrap();
        let a = analyzer.analyze(&sine(512)).unwrap();
        let b = analyzer.analyze(&sine(512)).unwrap();
        assert_eq!(a, b);
        assert_eq!(analyzer.analyze(&sine(300)).unwrap().shape(), (4, 129));
    }

    #[test]
    fn test_magnitude_layout() {
        let spec = stft(&sine(256), 64, 32, PadMode::Reflect).unwrap();
        let mag = spec.magnitude();
        assert_eq!(mag.len(), spec.num_frames());
        assert!(mag.iter().all(|f| f.len() == 33));
        assert!(mag.iter().flatten().all(|m| *m >= 0.0));
    }

    #[test]
    fn test_time_axis() {
        let spec = stft(&sine(256), 64, 32, PadMode::Reflect).unwrap();
        assert_eq!(spec.frame_to_time(2, 16000.0), 64.0 / 16000.0);
    }
}

//! Real-input FFT and periodic analysis windows

use rustfft::{FftPlanner, num_complex::Complex};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::sync::Arc;

/// Window function types
///
/// All windows are periodic (DFT-even), which is the convention spectral
/// analysis libraries use for STFT framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// Rectangular (no windowing)
    Rectangular,
    /// Hann window (raised cosine)
    #[default]
    Hann,
    /// Hamming window
    Hamming,
    /// Blackman window
    Blackman,
    /// Blackman-Harris window (better sidelobe suppression)
    BlackmanHarris,
}

impl Window {
    /// Cosine-sum coefficients `a_k` with `w[i] = sum_k (-1)^k a_k cos(2 pi k i / n)`.
    const fn cosine_terms(self) -> &'static [f32] {
        match self {
            Window::Rectangular => &[1.0],
            Window::Hann => &[0.5, 0.5],
            Window::Hamming => &[0.54, 0.46],
            Window::Blackman => &[0.42, 0.5, 0.08],
            Window::BlackmanHarris => &[0.35875, 0.48829, 0.14128, 0.01168],
        }
    }

    /// Coefficient `i` of a periodic window of length `n`.
    pub fn coefficient(self, i: usize, n: usize) -> f32 {
        let x = 2.0 * PI * i as f32 / n as f32;
        self.cosine_terms()
            .iter()
            .enumerate()
            .map(|(k, &a)| {
                let term = a * (k as f32 * x).cos();
                if k % 2 == 0 { term } else { -term }
            })
            .sum()
    }

    /// Multiply `buffer` in place by the window of its length.
    pub fn apply(self, buffer: &mut [f32]) {
        if self == Window::Rectangular {
            return;
        }
        let n = buffer.len();
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample *= self.coefficient(i, n);
        }
    }

    /// Window of `size` coefficients.
    pub fn coefficients(self, size: usize) -> Vec<f32> {
        (0..size).map(|i| self.coefficient(i, size)).collect()
    }
}

/// Forward FFT processor for real frames of a fixed size
///
/// The plan is shared behind an `Arc`, so a processor can be used from
/// several threads at once.
#[derive(Clone)]
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f32>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of bins returned by [`Fft::forward`] (`size / 2 + 1`)
    pub fn num_bins(&self) -> usize {
        crate::frame::rfft_channel_count(self.size)
    }

    /// Perform forward FFT on real input
    ///
    /// Input shorter than the FFT size is zero-padded, longer input is
    /// truncated. Returns the positive-frequency half of the spectrum, DC to
    /// Nyquist inclusive.
    pub fn forward(&self, input: &[f32]) -> Vec<Complex<f32>> {
        let mut buffer: Vec<Complex<f32>> = input
            .iter()
            .take(self.size)
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.truncate(self.num_bins());
        buffer
    }
}

impl std::fmt::Debug for Fft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fft").field("size", &self.size).finish()
    }
}

/// Compute magnitude spectrum in dB
pub fn magnitude_db(spectrum: &[Complex<f32>]) -> Vec<f32> {
    spectrum
        .iter()
        .map(|c| 20.0 * c.norm().max(1e-10).log10())
        .collect()
}

//! Transform configuration.
//!
//! A [`StftConfig`] bundles the framing parameters an environment fixes once
//! and reuses every step. It can be written inline or loaded from TOML:
//!
//! ```toml
//! window_size = 1024
//! hop_len = 256
//! padding_mode = "reflect"
//! window = "hann"
//! ```

use crate::error::SpectralError;
use crate::fft::Window;
use crate::frame::{rfft_channel_count, target_time_steps};
use crate::padding::PadMode;
use serde::{Deserialize, Serialize};

/// Framing parameters for the centered STFT.
///
/// Missing TOML keys take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StftConfig {
    /// Samples per analysis frame.
    pub window_size: usize,
    /// Samples the window advances between frames.
    pub hop_len: usize,
    /// Boundary extension used to center the first and last frames.
    pub padding_mode: PadMode,
    /// Window applied to each frame before the FFT.
    pub window: Window,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            window_size: 1024,
            hop_len: 256,
            padding_mode: PadMode::Reflect,
            window: Window::Hann,
        }
    }
}

impl StftConfig {
    /// Create a configuration with a Hann window and reflect centering.
    pub fn new(window_size: usize, hop_len: usize) -> Self {
        Self {
            window_size,
            hop_len,
            ..Self::default()
        }
    }

    /// Set the centering mode.
    pub fn with_padding_mode(mut self, mode: PadMode) -> Self {
        self.padding_mode = mode;
        self
    }

    /// Set the window function.
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Parse a configuration from a TOML string and validate it.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, SpectralError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce frames.
    ///
    /// Frame math itself never validates; this check runs when an analyzer
    /// is built so a zero window or hop fails before any audio is framed.
    pub fn validate(&self) -> Result<(), SpectralError> {
        if self.window_size == 0 {
            return Err(SpectralError::invalid_config("window_size must be positive"));
        }
        if self.hop_len == 0 {
            return Err(SpectralError::invalid_config("hop_len must be positive"));
        }
        Ok(())
    }

    /// Number of frequency bins per frame.
    pub fn num_bins(&self) -> usize {
        rfft_channel_count(self.window_size)
    }

    /// `(time_steps, bins)` of the spectrogram for `chunk_length` samples.
    pub fn output_shape(&self, chunk_length: usize) -> (usize, usize) {
        (
            target_time_steps(chunk_length, self.window_size, self.hop_len),
            self.num_bins(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StftConfig::default();
        assert_eq!(config.window_size, 1024);
        assert_eq!(config.hop_len, 256);
        assert_eq!(config.padding_mode, PadMode::Reflect);
        assert_eq!(config.window, Window::Hann);
    }

    #[test]
    fn test_output_shape() {
        assert_eq!(StftConfig::new(1024, 256).output_shape(1024), (5, 513));
        assert_eq!(StftConfig::new(512, 128).output_shape(1024), (9, 257));
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        assert!(StftConfig::new(0, 256).validate().is_err());
        assert!(StftConfig::new(1024, 0).validate().is_err());
        assert!(StftConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = StftConfig::from_toml_str(
            r#"
            window_size = 512
            hop_len = 128
            padding_mode = "linear_ramp"
            window = "blackman_harris"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            StftConfig::new(512, 128)
                .with_padding_mode(PadMode::LinearRamp)
                .with_window(Window::BlackmanHarris)
        );
    }

    #[test]
    fn test_from_toml_fills_defaults() {
        let config = StftConfig::from_toml_str("hop_len = 64").unwrap();
        assert_eq!(config.window_size, 1024);
        assert_eq!(config.hop_len, 64);
        assert_eq!(config.padding_mode, PadMode::Reflect);
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            StftConfig::from_toml_str("padding_mode = \"mirror\""),
            Err(SpectralError::ConfigParse(_))
        ));
        assert!(matches!(
            StftConfig::from_toml_str("hop_len = 0"),
            Err(SpectralError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StftConfig::new(256, 64).with_padding_mode(PadMode::Wrap);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(StftConfig::from_toml_str(&text).unwrap(), config);
    }
}

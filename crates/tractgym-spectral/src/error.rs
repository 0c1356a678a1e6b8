//! Error types for padding and spectral operations.

use crate::padding::PadMode;
use thiserror::Error;

/// Errors raised while extending a sample buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// The requested length is shorter than the buffer
    #[error(
        "target length must be same or larger than wave length (wave length: {wave_length}, target length: {target_length})"
    )]
    Length {
        /// Length of the buffer that was passed in.
        wave_length: usize,
        /// Requested output length.
        target_length: usize,
    },

    /// The mode derives pad values from the buffer, which has none
    #[error("cannot extend an empty buffer with mode '{mode}'")]
    EmptyBuffer {
        /// Mode that needed at least one sample.
        mode: PadMode,
    },

    /// A statistic mode was given an empty window to summarize
    #[error("stat_length of 0 yields no value for mode '{mode}'")]
    ZeroStatLength {
        /// Statistic mode that was requested.
        mode: PadMode,
    },

    /// A mode name did not match any supported mode
    #[error("unknown padding mode: {0}")]
    UnknownMode(String),
}

/// Errors that can occur while configuring or running the transform.
#[derive(Debug, Error)]
pub enum SpectralError {
    /// Window or hop configuration cannot produce frames
    #[error("invalid transform configuration: {0}")]
    InvalidConfig(String),

    /// Boundary extension failed
    #[error("padding failed: {0}")]
    Padding(#[from] PaddingError),

    /// Failed to parse a TOML configuration
    #[error("failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl SpectralError {
    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        SpectralError::InvalidConfig(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn length_display_carries_both_lengths() {
        let err = PaddingError::Length {
            wave_length: 10,
            target_length: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("wave length: 10"), "got: {msg}");
        assert!(msg.contains("target length: 4"), "got: {msg}");
    }

    #[test]
    fn empty_buffer_display_names_mode() {
        let err = PaddingError::EmptyBuffer {
            mode: PadMode::Reflect,
        };
        assert_eq!(err.to_string(), "cannot extend an empty buffer with mode 'reflect'");
    }

    #[test]
    fn zero_stat_length_display_names_mode() {
        let err = PaddingError::ZeroStatLength {
            mode: PadMode::Median,
        };
        assert_eq!(err.to_string(), "stat_length of 0 yields no value for mode 'median'");
    }

    #[test]
    fn invalid_config_display() {
        let err = SpectralError::invalid_config("hop_len must be positive");
        assert_eq!(
            err.to_string(),
            "invalid transform configuration: hop_len must be positive"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn padding_error_converts_and_chains() {
        let err: SpectralError = PaddingError::EmptyBuffer {
            mode: PadMode::Edge,
        }
        .into();
        assert!(matches!(err, SpectralError::Padding(_)));
        assert!(err.source().is_some());
    }
}

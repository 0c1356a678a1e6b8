//! Boundary extension of 1-D sample buffers.
//!
//! [`pad_tail`] aligns a variable-length buffer to a fixed length by
//! appending samples after its end. [`pad_both`] extends both ends and is
//! what the STFT uses to center its first frame on sample 0.
//!
//! Every mode is a variant of the closed [`PadMode`] enum, and the values it
//! synthesizes follow the numpy `pad` conventions:
//!
//! | Mode | Tail of `[1, 2, 3]` padded by 4 |
//! |------|---------------------------------|
//! | `Constant` | `0, 0, 0, 0` |
//! | `Edge` | `3, 3, 3, 3` |
//! | `LinearRamp` | `2.25, 1.5, 0.75, 0` |
//! | `Maximum` / `Minimum` | `3, 3, 3, 3` / `1, 1, 1, 1` |
//! | `Mean` / `Median` | `2, 2, 2, 2` |
//! | `Reflect` | `2, 1, 2, 3` |
//! | `Symmetric` | `3, 2, 1, 1` |
//! | `Wrap` | `1, 2, 3, 1` |

use crate::error::PaddingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boundary-extension mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadMode {
    /// Fill with a fixed value ([`PadOptions::constant_value`], default 0)
    #[default]
    Constant,
    /// Repeat the edge sample
    Edge,
    /// Ramp linearly from the edge sample to [`PadOptions::end_value`]
    LinearRamp,
    /// Fill with the maximum of the buffer
    Maximum,
    /// Fill with the mean of the buffer
    Mean,
    /// Fill with the median of the buffer
    Median,
    /// Fill with the minimum of the buffer
    Minimum,
    /// Mirror the buffer, excluding the edge sample
    Reflect,
    /// Mirror the buffer, including the edge sample
    Symmetric,
    /// Continue from the opposite end of the buffer
    Wrap,
    /// Caller overwrites the padded region; contents are unspecified
    ///
    /// The region is zero-filled, but callers must not rely on that.
    Empty,
}

impl PadMode {
    /// Every mode, in declaration order.
    pub const ALL: [PadMode; 11] = [
        PadMode::Constant,
        PadMode::Edge,
        PadMode::LinearRamp,
        PadMode::Maximum,
        PadMode::Mean,
        PadMode::Median,
        PadMode::Minimum,
        PadMode::Reflect,
        PadMode::Symmetric,
        PadMode::Wrap,
        PadMode::Empty,
    ];

    /// Snake-case name of the mode, as used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            PadMode::Constant => "constant",
            PadMode::Edge => "edge",
            PadMode::LinearRamp => "linear_ramp",
            PadMode::Maximum => "maximum",
            PadMode::Mean => "mean",
            PadMode::Median => "median",
            PadMode::Minimum => "minimum",
            PadMode::Reflect => "reflect",
            PadMode::Symmetric => "symmetric",
            PadMode::Wrap => "wrap",
            PadMode::Empty => "empty",
        }
    }

    /// Whether the mode derives pad values from existing samples.
    pub const fn reads_buffer(self) -> bool {
        !matches!(self, PadMode::Constant | PadMode::Empty)
    }
}

impl fmt::Display for PadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PadMode {
    type Err = PaddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PadMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| PaddingError::UnknownMode(s.to_string()))
    }
}

/// Mirror flavor for [`PadMode::Reflect`] and [`PadMode::Symmetric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectType {
    /// Plain mirror image
    #[default]
    Even,
    /// Mirror image negated around the edge sample (`2 * edge - x`)
    Odd,
}

/// Mode-specific options for padding.
///
/// Fields a mode does not use are ignored.
///
/// # Example
///
/// ```rust
/// use tractgym_spectral::{PadMode, PadOptions, pad_tail};
///
/// let options = PadOptions::default().with_constant_value(-1.0);
/// let padded = pad_tail(&[0.5, 0.5], 4, PadMode::Constant, &options).unwrap();
/// assert_eq!(padded, vec![0.5, 0.5, -1.0, -1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PadOptions {
    /// Fill value for [`PadMode::Constant`].
    pub constant_value: f32,
    /// Final value reached by [`PadMode::LinearRamp`].
    pub end_value: f32,
    /// Number of samples nearest the padded edge that the statistic modes
    /// look at. `None` uses the whole buffer, larger values are capped at
    /// it, and `Some(0)` is rejected.
    pub stat_length: Option<usize>,
    /// Mirror flavor for the reflecting modes.
    pub reflect_type: ReflectType,
}

impl PadOptions {
    /// Set the constant fill value.
    pub fn with_constant_value(mut self, value: f32) -> Self {
        self.constant_value = value;
        self
    }

    /// Set the linear ramp end value.
    pub fn with_end_value(mut self, value: f32) -> Self {
        self.end_value = value;
        self
    }

    /// Restrict statistic modes to the samples nearest the edge.
    pub fn with_stat_length(mut self, length: usize) -> Self {
        self.stat_length = Some(length);
        self
    }

    /// Set the reflection flavor.
    pub fn with_reflect_type(mut self, reflect_type: ReflectType) -> Self {
        self.reflect_type = reflect_type;
        self
    }
}

/// Pad `wave` at its tail so the result is exactly `target_length` long.
///
/// The first `wave.len()` samples of the output are the input verbatim.
///
/// # Errors
///
/// - [`PaddingError::Length`] if `target_length < wave.len()`
/// - [`PaddingError::EmptyBuffer`] if `wave` is empty, padding is needed, and
///   `mode` derives values from existing samples
/// - [`PaddingError::ZeroStatLength`] if a statistic mode is asked to pad
///   with `stat_length` of zero
pub fn pad_tail(
    wave: &[f32],
    target_length: usize,
    mode: PadMode,
    options: &PadOptions,
) -> Result<Vec<f32>, PaddingError> {
    let Some(pad_length) = target_length.checked_sub(wave.len()) else {
        return Err(PaddingError::Length {
            wave_length: wave.len(),
            target_length,
        });
    };

    let mut padded = Vec::with_capacity(target_length);
    padded.extend_from_slice(wave);
    extend_tail(&mut padded, pad_length, mode, options)?;

    tracing::trace!(wave_length = wave.len(), pad_length, %mode, "tail padded");
    Ok(padded)
}

/// Extend `wave` by `left` samples before its start and `right` after its end.
///
/// The head extension is the mirror image of the tail extension of the
/// reversed buffer, so e.g. statistic modes look at the first
/// `stat_length` samples for the head.
///
/// ```rust
/// use tractgym_spectral::{PadMode, PadOptions, pad_both};
///
/// let padded = pad_both(&[1.0, 2.0, 3.0, 4.0], 2, 2, PadMode::Reflect, &PadOptions::default()).unwrap();
/// assert_eq!(padded, vec![3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0]);
/// ```
pub fn pad_both(
    wave: &[f32],
    left: usize,
    right: usize,
    mode: PadMode,
    options: &PadOptions,
) -> Result<Vec<f32>, PaddingError> {
    let mut head: Vec<f32> = wave.iter().rev().copied().collect();
    extend_tail(&mut head, left, mode, options)?;

    let mut tail = wave.to_vec();
    extend_tail(&mut tail, right, mode, options)?;

    let mut padded = Vec::with_capacity(wave.len() + left + right);
    padded.extend(head[wave.len()..].iter().rev());
    padded.extend_from_slice(&tail);
    Ok(padded)
}

/// Append `pad` samples to `buf` according to `mode`.
fn extend_tail(
    buf: &mut Vec<f32>,
    pad: usize,
    mode: PadMode,
    options: &PadOptions,
) -> Result<(), PaddingError> {
    if pad == 0 {
        return Ok(());
    }
    let len = buf.len();
    if len == 0 && mode.reads_buffer() {
        return Err(PaddingError::EmptyBuffer { mode });
    }

    match mode {
        PadMode::Constant => buf.resize(len + pad, options.constant_value),
        PadMode::Empty => buf.resize(len + pad, 0.0),
        PadMode::Edge => {
            let edge = buf[len - 1];
            buf.resize(len + pad, edge);
        }
        PadMode::LinearRamp => {
            let edge = buf[len - 1];
            let span = options.end_value - edge;
            buf.extend((1..=pad).map(|k| edge + span * (k as f32 / pad as f32)));
        }
        PadMode::Maximum => fill_statistic(buf, pad, mode, options, maximum)?,
        PadMode::Mean => fill_statistic(buf, pad, mode, options, mean)?,
        PadMode::Median => fill_statistic(buf, pad, mode, options, median)?,
        PadMode::Minimum => fill_statistic(buf, pad, mode, options, minimum)?,
        PadMode::Reflect | PadMode::Symmetric => {
            reflect_tail(
                buf,
                pad,
                mode == PadMode::Symmetric,
                options.reflect_type,
            );
        }
        PadMode::Wrap => {
            for k in 0..pad {
                let value = buf[k % len];
                buf.push(value);
            }
        }
    }
    Ok(())
}

/// Fill the tail with a statistic of the samples nearest the edge.
///
/// A NaN among those samples makes the fill value NaN for every statistic.
fn fill_statistic(
    buf: &mut Vec<f32>,
    pad: usize,
    mode: PadMode,
    options: &PadOptions,
    stat: fn(&[f32]) -> f32,
) -> Result<(), PaddingError> {
    let len = buf.len();
    let n = match options.stat_length {
        Some(0) => return Err(PaddingError::ZeroStatLength { mode }),
        Some(n) => n.min(len),
        None => len,
    };
    let window = &buf[len - n..];
    let value = if window.iter().any(|x| x.is_nan()) {
        f32::NAN
    } else {
        stat(window)
    };
    buf.resize(len + pad, value);
    Ok(())
}

fn maximum(window: &[f32]) -> f32 {
    window.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}

fn minimum(window: &[f32]) -> f32 {
    window.iter().copied().fold(f32::INFINITY, f32::min)
}

fn mean(window: &[f32]) -> f32 {
    let sum: f64 = window.iter().map(|&x| x as f64).sum();
    (sum / window.len() as f64) as f32
}

fn median(window: &[f32]) -> f32 {
    let mut sorted = window.to_vec();
    sorted.sort_by(f32::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Mirror the buffer into its tail, one chunk at a time.
///
/// Each chunk mirrors at most a whole number of periods of the original
/// buffer, so pads longer than the buffer keep bouncing between its ends.
fn reflect_tail(buf: &mut Vec<f32>, pad: usize, include_edge: bool, reflect_type: ReflectType) {
    let original_len = buf.len();
    if original_len == 1 {
        let edge = buf[0];
        buf.resize(1 + pad, edge);
        return;
    }

    let mut remaining = pad;
    while remaining > 0 {
        let n = buf.len();
        let (period, start) = if include_edge {
            (n / original_len * original_len, n - 1)
        } else {
            ((n - 1) / (original_len - 1) * (original_len - 1), n - 2)
        };
        let chunk = period.min(remaining);
        let edge = buf[n - 1];

        for k in 0..chunk {
            let mirrored = buf[start - k];
            buf.push(match reflect_type {
                ReflectType::Even => mirrored,
                ReflectType::Odd => 2.0 * edge - mirrored,
            });
        }
        remaining -= chunk;
    }
}

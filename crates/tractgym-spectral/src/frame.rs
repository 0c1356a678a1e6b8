//! Frame arithmetic for the centered STFT.
//!
//! These functions only look at lengths, never at samples, so buffer and
//! tensor sizes can be fixed before any audio exists.

/// Number of non-redundant rfft bins for a window of `window_size` samples.
///
/// Bins run from DC to Nyquist inclusive. `window_size` must be positive;
/// this is not checked.
///
/// # Example
///
/// ```rust
/// use tractgym_spectral::rfft_channel_count;
///
/// assert_eq!(rfft_channel_count(256), 129);
/// assert_eq!(rfft_channel_count(501), 251);
/// ```
#[inline]
pub const fn rfft_channel_count(window_size: usize) -> usize {
    window_size / 2 + 1
}

/// Number of STFT frames produced for `chunk_length` samples.
///
/// Equals `ceil(chunk_length / hop_len) + 1`. The extra frame comes from the
/// half-window extension at each boundary, which centers frame 0 on sample 0.
/// The window size argument is unused: the count does not depend on it. It
/// is kept so call sites read the same as the transform's own signature.
///
/// `hop_len` must be positive; this is not checked.
#[inline]
pub const fn target_time_steps(chunk_length: usize, _window_size: usize, hop_len: usize) -> usize {
    chunk_length.div_ceil(hop_len) + 1
}

/// Samples of boundary extension added at each end before framing.
#[inline]
pub const fn center_pad_length(window_size: usize) -> usize {
    window_size / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfft_channel_count() {
        assert_eq!(rfft_channel_count(1024), 513);
        assert_eq!(rfft_channel_count(256), 129);
        assert_eq!(rfft_channel_count(400), 201);
        assert_eq!(rfft_channel_count(501), 251);
    }

    #[test]
    fn test_target_time_steps() {
        assert_eq!(target_time_steps(512, 1024, 256), 3);
        assert_eq!(target_time_steps(1024, 1024, 256), 5);
        assert_eq!(target_time_steps(1024, 512, 128), 9);
    }

    #[test]
    fn test_target_time_steps_rounds_up() {
        // 1000 / 256 = 3.9 -> 4 frames + 1
        assert_eq!(target_time_steps(1000, 1024, 256), 5);
        assert_eq!(target_time_steps(1, 1024, 256), 2);
    }

    #[test]
    fn test_target_time_steps_ignores_window_size() {
        for window in [1, 256, 1024, 4096] {
            assert_eq!(target_time_steps(1024, window, 256), 5);
        }
    }

    #[test]
    fn test_empty_chunk_has_single_frame() {
        assert_eq!(target_time_steps(0, 1024, 256), 1);
    }

    #[test]
    fn test_center_pad_length() {
        assert_eq!(center_pad_length(1024), 512);
        assert_eq!(center_pad_length(501), 250);
    }
}

//! Integration tests for tractgym-spectral.
//!
//! Exercises the shape contract between frame math, padding and the
//! transform through the public API.

use std::f32::consts::PI;

use tracing_subscriber::EnvFilter;
use tractgym_spectral::{
    PadMode, PadOptions, PaddingError, SpectralError, StftAnalyzer, StftConfig, Window,
    pad_tail, rfft_channel_count, stft, target_time_steps,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Route library events to the test writer; `RUST_LOG=debug` shows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `sin(linspace(0, 2pi, n))`
fn one_period(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| (2.0 * PI * i as f32 / (n - 1) as f32).sin())
        .collect()
}

// ===========================================================================
// 1. Shape contract
// ===========================================================================

#[test]
fn stft_matches_frame_math() {
    let wave = one_period(1024);
    let out = stft(&wave, 1024, 256, PadMode::Reflect).unwrap();
    assert_eq!(
        out.shape(),
        (target_time_steps(wave.len(), 1024, 256), rfft_channel_count(1024))
    );
    assert_eq!(out.shape(), (5, 513));
}

#[test]
fn stft_shape_holds_for_every_padding_mode() {
    let wave = one_period(777);
    for mode in PadMode::ALL {
        let out = stft(&wave, 256, 100, mode).unwrap();
        assert_eq!(out.shape(), (9, 129), "mode {mode}");
    }
}

#[test]
fn stft_shape_holds_for_every_window() {
    let wave = one_period(512);
    for window in [
        Window::Rectangular,
        Window::Hann,
        Window::Hamming,
        Window::Blackman,
        Window::BlackmanHarris,
    ] {
        let config = StftConfig::new(128, 32).with_window(window);
        let out = StftAnalyzer::new(config).unwrap().analyze(&wave).unwrap();
        assert_eq!(out.shape(), config.output_shape(512));
    }
}

// ===========================================================================
// 2. Padding then transform
// ===========================================================================

#[test]
fn padded_chunks_share_one_shape() {
    init_tracing();
    // Variable-length audio aligned to a fixed chunk yields a fixed shape
    let chunk = 1024;
    let analyzer = StftAnalyzer::new(StftConfig::new(512, 128)).unwrap();
    for len in [10, 500, 1023, 1024] {
        let wave = one_period(len.max(2));
        let padded = pad_tail(&wave, chunk, PadMode::Constant, &PadOptions::default()).unwrap();
        assert_eq!(padded.len(), chunk);
        assert_eq!(analyzer.analyze(&padded).unwrap().shape(), (9, 257));
    }
}

#[test]
fn oversized_chunk_is_a_length_error() {
    let wave = one_period(2048);
    let err = pad_tail(&wave, 1024, PadMode::Constant, &PadOptions::default()).unwrap_err();
    assert_eq!(
        err,
        PaddingError::Length {
            wave_length: 2048,
            target_length: 1024
        }
    );
}

// ===========================================================================
// 3. Centering
// ===========================================================================

#[test]
fn frame_zero_is_centered_on_sample_zero() {
    // An impulse at sample 0 lands in the middle of frame 0. With a
    // rectangular window and constant centering, its spectrum is flat.
    let mut wave = vec![0.0; 64];
    wave[0] = 1.0;
    let config = StftConfig::new(16, 16)
        .with_window(Window::Rectangular)
        .with_padding_mode(PadMode::Constant);
    let out = StftAnalyzer::new(config).unwrap().analyze(&wave).unwrap();

    for bin in out.frame(0).unwrap() {
        assert!((bin.norm() - 1.0).abs() < 1e-5);
    }
    for bin in out.frame(1).unwrap() {
        assert!(bin.norm() < 1e-6);
    }
}

#[test]
fn config_from_toml_drives_analyzer() {
    init_tracing();
    let config = StftConfig::from_toml_str(
        r#"
        window_size = 400
        hop_len = 160
        padding_mode = "symmetric"
        "#,
    )
    .unwrap();
    let analyzer = StftAnalyzer::new(config).unwrap();
    let out = analyzer.analyze(&one_period(16000)).unwrap();
    assert_eq!(out.shape(), (101, 201));
}

#[test]
fn invalid_config_fails_fast() {
    let err = StftAnalyzer::new(StftConfig::new(1024, 0)).unwrap_err();
    assert!(matches!(err, SpectralError::InvalidConfig(_)));
}

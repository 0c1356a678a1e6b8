use crate::define_space;
use crate::error::SpaceError;

define_space! {
    /// What the agent observes after one synthesis step.
    ///
    /// Spectrogram fields hold a real matrix (typically magnitudes) in
    /// time-major layout; their shape is fixed by the transform's window and
    /// hop, see [`ObservationSpace::check_spectrogram_shapes`].
    #[derive(Default)]
    pub struct ObservationSpace {
        /// Target audio for this step, in [-1, 1].
        pub target_sound_wave: Vec<f32>,
        /// Audio the synthesizer produced this step, in [-1, 1].
        pub generated_sound_wave: Vec<f32>,
        /// Spectrogram of the target audio, `[time][bin]`.
        pub target_sound_spectrogram: Vec<Vec<f32>>,
        /// Spectrogram of the generated audio, `[time][bin]`.
        pub generated_sound_spectrogram: Vec<Vec<f32>>,
        /// Glottal source frequency in Hz.
        pub frequency: f32,
        /// Current pitch shift.
        pub pitch_shift: f32,
        /// Current glottal tenseness.
        pub tenseness: f32,
        /// Oral tract diameters, one per tract segment.
        pub current_tract_diameters: Vec<f32>,
        /// Nasal tract diameters, one per nose segment.
        pub nose_diameters: Vec<f32>,
    }
}

impl ObservationSpace {
    /// Check both spectrogram fields against a `(time_steps, bins)` shape.
    ///
    /// The expected shape usually comes from the transform configuration for
    /// the step's chunk length.
    pub fn check_spectrogram_shapes(&self, expected: (usize, usize)) -> Result<(), SpaceError> {
        check_matrix_shape("target_sound_spectrogram", &self.target_sound_spectrogram, expected)?;
        check_matrix_shape(
            "generated_sound_spectrogram",
            &self.generated_sound_spectrogram,
            expected,
        )
    }
}

fn check_matrix_shape(
    field: &'static str,
    matrix: &[Vec<f32>],
    expected: (usize, usize),
) -> Result<(), SpaceError> {
    let (rows, cols) = expected;
    let found = match matrix.iter().find(|row| row.len() != cols) {
        Some(row) => (matrix.len(), row.len()),
        None if matrix.len() != rows => (matrix.len(), cols),
        None => return Ok(()),
    };
    Err(SpaceError::ShapeMismatch {
        field,
        expected,
        found,
    })
}

use crate::define_space;

define_space! {
    /// Articulator controls applied by the synthesizer in one step.
    ///
    /// Each field drives one articulator; whether it is read as an increment
    /// or a target is up to the synthesizer. Ranges are not validated here.
    #[derive(Default)]
    pub struct ActionSpace {
        /// Pitch shift of the glottal source.
        pub pitch_shift: f32,
        /// Glottal tenseness.
        pub tenseness: f32,
        /// Trachea constriction.
        pub trachea: f32,
        /// Epiglottis constriction.
        pub epiglottis: f32,
        /// Velum opening.
        pub velum: f32,
        /// Tongue position along the tract, in segment units.
        pub tongue_index: f32,
        /// Tongue constriction diameter.
        pub tongue_diameter: f32,
        /// Lip opening.
        pub lips: f32,
    }
}

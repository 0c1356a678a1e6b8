//! Observation and action records for the vocal-tract control environment.
//!
//! Every record implements [`Space`]: it converts losslessly to an ordered
//! [`SpaceMap`] of field name to [`SpaceValue`], and back. The map is what
//! crosses the system boundary (policy network, serialization layer), so the
//! conversion is strict: [`Space::from_map`] accepts exactly the declared
//! field set and nothing else.
//!
//! # Records
//!
//! - [`ObservationSpace`]: target and generated audio, their spectrograms,
//!   and the synthesizer state
//! - [`ActionSpace`]: one control value per articulator
//! - [`BaseSpace`]: the zero-field record, accepting only the empty map
//!
//! New records are declared with [`define_space!`].
//!
//! # Example
//!
//! ```rust
//! use tractgym_spaces::{ActionSpace, Space};
//!
//! let action = ActionSpace {
//!     pitch_shift: 0.0,
//!     tenseness: 0.1,
//!     trachea: 0.2,
//!     epiglottis: 0.3,
//!     velum: 0.4,
//!     tongue_index: 5.0,
//!     tongue_diameter: 0.6,
//!     lips: 0.7,
//! };
//!
//! let map = action.to_map();
//! assert_eq!(map.keys().next(), Some("pitch_shift"));
//! assert_eq!(ActionSpace::from_map(map).unwrap(), action);
//! ```

mod action;
mod error;
mod map;
mod observation;
mod value;

/// The [`Space`] capability and its key validation.
pub mod space;

pub use action::ActionSpace;
pub use error::SpaceError;
pub use map::SpaceMap;
pub use observation::ObservationSpace;
pub use space::{BaseSpace, Space, validate_keys};
pub use value::{ComplexRows, SpaceField, SpaceValue};

/// Complex element type of [`SpaceValue::ComplexMatrix`].
pub use rustfft::num_complex::Complex;

//! Field values carried by a [`SpaceMap`](crate::SpaceMap).

use rustfft::num_complex::Complex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single field value.
///
/// Serializes adjacently tagged, e.g. `{"kind": "scalar", "data": 0.5}`.
/// Complex entries serialize as `[re, im]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SpaceValue {
    /// Scalar-like single-element value
    Scalar(f32),
    /// 1-D sequence
    Vector(Vec<f32>),
    /// 2-D real matrix, row-major
    Matrix(Vec<Vec<f32>>),
    /// 2-D complex matrix, row-major
    ComplexMatrix(ComplexRows),
}

impl SpaceValue {
    /// Name of the value's kind, as used in serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            SpaceValue::Scalar(_) => "scalar",
            SpaceValue::Vector(_) => "vector",
            SpaceValue::Matrix(_) => "matrix",
            SpaceValue::ComplexMatrix(_) => "complex_matrix",
        }
    }
}

/// Conversion between a record's field type and [`SpaceValue`].
pub trait SpaceField: Sized {
    /// Kind of [`SpaceValue`] this type maps to.
    const KIND: &'static str;

    /// Copy the field into a value.
    fn to_value(&self) -> SpaceValue;

    /// Take the field back out of a value, or `None` if the kind differs.
    fn from_value(value: SpaceValue) -> Option<Self>;
}

/// Row-major complex matrix, serialized as rows of `[re, im]` pairs.
///
/// `Complex` has no serde support of its own, so the matrix is wrapped
/// rather than stored bare in [`SpaceValue::ComplexMatrix`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexRows(pub Vec<Vec<Complex<f32>>>);

impl From<Vec<Vec<Complex<f32>>>> for ComplexRows {
    fn from(rows: Vec<Vec<Complex<f32>>>) -> Self {
        ComplexRows(rows)
    }
}

impl From<ComplexRows> for Vec<Vec<Complex<f32>>> {
    fn from(rows: ComplexRows) -> Self {
        rows.0
    }
}

impl Serialize for ComplexRows {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.0
                .iter()
                .map(|row| row.iter().map(|c| [c.re, c.im]).collect::<Vec<_>>()),
        )
    }
}

impl<'de> Deserialize<'de> for ComplexRows {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<Vec<[f32; 2]>>::deserialize(deserializer)?;
        Ok(ComplexRows(
            pairs
                .into_iter()
                .map(|row| row.into_iter().map(|[re, im]| Complex::new(re, im)).collect())
                .collect(),
        ))
    }
}

// `$ty` converts into the variant's payload; for every kind but the complex
// matrix that conversion is the identity.
macro_rules! impl_space_field {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl SpaceField for $ty {
            const KIND: &'static str = $kind;

            #[allow(clippy::clone_on_copy, clippy::useless_conversion)]
            fn to_value(&self) -> SpaceValue {
                SpaceValue::$variant(self.clone().into())
            }

            #[allow(clippy::useless_conversion)]
            fn from_value(value: SpaceValue) -> Option<Self> {
                match value {
                    SpaceValue::$variant(inner) => Some(inner.into()),
                    _ => None,
                }
            }
        }

        impl From<$ty> for SpaceValue {
            #[allow(clippy::useless_conversion)]
            fn from(value: $ty) -> Self {
                SpaceValue::$variant(value.into())
            }
        }
    };
}

impl_space_field!(f32, Scalar, "scalar");
impl_space_field!(Vec<f32>, Vector, "vector");
impl_space_field!(Vec<Vec<f32>>, Matrix, "matrix");
impl_space_field!(Vec<Vec<Complex<f32>>>, ComplexMatrix, "complex_matrix");

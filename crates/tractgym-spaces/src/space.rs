use crate::error::SpaceError;
use crate::map::SpaceMap;
use crate::value::SpaceField;

/// A record with a fixed, ordered set of named fields that converts
/// losslessly to and from a [`SpaceMap`].
///
/// Implementations are usually generated with [`define_space!`](crate::define_space).
pub trait Space: Sized {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Declared field names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Convert to a map holding exactly [`Self::FIELDS`], in order.
    fn to_map(&self) -> SpaceMap;

    /// Rebuild from a map whose key set equals [`Self::FIELDS`].
    ///
    /// # Errors
    ///
    /// - [`SpaceError::UnknownFields`] if the map has undeclared keys
    /// - [`SpaceError::MissingFields`] if declared fields are absent
    /// - [`SpaceError::KindMismatch`] if a value has the wrong kind
    fn from_map(map: SpaceMap) -> Result<Self, SpaceError>;
}

/// Check that `map`'s key set is exactly `S::FIELDS`.
///
/// Unknown keys are reported before missing ones.
pub fn validate_keys<S: Space>(map: &SpaceMap) -> Result<(), SpaceError> {
    let unknown: Vec<String> = map
        .keys()
        .filter(|key| !S::FIELDS.iter().any(|field| field == key))
        .map(String::from)
        .collect();
    if !unknown.is_empty() {
        tracing::debug!(space = S::NAME, fields = ?unknown, "unknown fields");
        return Err(SpaceError::UnknownFields {
            space: S::NAME,
            fields: unknown,
        });
    }

    let missing: Vec<String> = S::FIELDS
        .iter()
        .filter(|field| !map.contains_key(field))
        .map(|field| (*field).to_string())
        .collect();
    if !missing.is_empty() {
        tracing::debug!(space = S::NAME, fields = ?missing, "missing fields");
        return Err(SpaceError::MissingFields {
            space: S::NAME,
            fields: missing,
        });
    }

    Ok(())
}

/// Remove `field` from `map` and convert it to the field's type.
///
/// Used by [`define_space!`](crate::define_space) expansions.
#[doc(hidden)]
pub fn take_field<T: SpaceField>(
    space: &'static str,
    map: &mut SpaceMap,
    field: &'static str,
) -> Result<T, SpaceError> {
    let value = map.remove(field).ok_or_else(|| SpaceError::MissingFields {
        space,
        fields: vec![field.to_string()],
    })?;
    let found = value.kind();
    T::from_value(value).ok_or(SpaceError::KindMismatch {
        space,
        field,
        expected: T::KIND,
        found,
    })
}

/// Declare a record type and implement [`Space`] for it.
///
/// Every field must be `pub` and its type must implement
/// [`SpaceField`](crate::SpaceField). The struct derives `Debug`, `Clone`
/// and `PartialEq`; further attributes are passed through.
///
/// # Example
///
/// ```rust
/// use tractgym_spaces::{Space, define_space};
///
/// define_space! {
///     /// Glottal source state.
///     #[derive(Default)]
///     pub struct GlottisState {
///         pub frequency: f32,
///         pub tenseness: f32,
///     }
/// }
///
/// assert_eq!(GlottisState::FIELDS, ["frequency", "tenseness"]);
/// let state = GlottisState { frequency: 140.0, tenseness: 0.6 };
/// assert_eq!(GlottisState::from_map(state.to_map()).unwrap(), state);
/// ```
#[macro_export]
macro_rules! define_space {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        impl $crate::Space for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn to_map(&self) -> $crate::SpaceMap {
                let mut map = $crate::SpaceMap::with_capacity(Self::FIELDS.len());
                $(
                    map.insert(stringify!($field), $crate::SpaceField::to_value(&self.$field));
                )+
                map
            }

            fn from_map(
                mut map: $crate::SpaceMap,
            ) -> ::core::result::Result<Self, $crate::SpaceError> {
                $crate::validate_keys::<Self>(&map)?;
                ::core::result::Result::Ok(Self {
                    $(
                        $field: $crate::space::take_field(Self::NAME, &mut map, stringify!($field))?,
                    )+
                })
            }
        }
    };
}

/// The zero-field space.
///
/// Converts to the empty map and accepts only the empty map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseSpace;

impl Space for BaseSpace {
    const NAME: &'static str = "BaseSpace";
    const FIELDS: &'static [&'static str] = &[];

    fn to_map(&self) -> SpaceMap {
        SpaceMap::new()
    }

    fn from_map(map: SpaceMap) -> Result<Self, SpaceError> {
        validate_keys::<Self>(&map)?;
        Ok(BaseSpace)
    }
}

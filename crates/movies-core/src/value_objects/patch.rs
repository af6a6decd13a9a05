//! Tri-state field wrapper for partial updates
//!
//! A JSON field can be missing, `null`, or carry a value. `Option<T>` only
//! tells the last two apart, so updates use `Patch<T>`:
//!
//! | JSON            | `Patch<T>`          |
//! |-----------------|---------------------|
//! | key missing     | `Unchanged`         |
//! | `"key": null`   | `Set(None)`         |
//! | `"key": value`  | `Set(Some(value))`  |
//!
//! Deserializing a missing key relies on `#[serde(default)]` at the field.

use serde::{Deserialize, Deserializer};

/// Field of a partial update
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// Field was not supplied; keep the stored value
    Unchanged,
    /// Field was supplied; `None` clears the stored value
    Set(Option<T>),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> Patch<T> {
    /// Whether the field was supplied at all (an explicit `null` counts)
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Transform the inner value, keeping presence
    pub fn map<U, F>(self, f: F) -> Patch<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Unchanged => Patch::Unchanged,
            Self::Set(value) => Patch::Set(value.map(f)),
        }
    }

    /// Overwrite `target` if the field was supplied
    pub fn apply_to(&self, target: &mut Option<T>)
    where
        T: Clone,
    {
        if let Self::Set(value) = self {
            target.clone_from(value);
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        Self::Set(value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::Set)
    }
}

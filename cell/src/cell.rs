//! The mutation-tracking value cell.
//!
//! A [`MutationCell`] pairs a value with a dirty flag so that "never assigned"
//! and "assigned the default value" stay distinguishable across a serde
//! round-trip. The flag is set by every write path and by every successful
//! decode, including a decode from `null`.

use std::any::Any;
use std::mem;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that remembers whether it was ever explicitly set.
///
/// Serializes as the bare inner value. Whether a clean cell is omitted from
/// its parent's output is the parent's decision:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tracked_cell::MutationCell;
///
/// #[derive(Default, Serialize, Deserialize)]
/// struct Patch {
///     #[serde(default, skip_serializing_if = "MutationCell::is_clean")]
///     title: MutationCell<String>,
/// }
///
/// let mut patch = Patch::default();
/// assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
///
/// patch.title.set(String::new());
/// assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":""}"#);
/// ```
///
/// Decoding requires `#[serde(default)]` on the field (or on the container)
/// so that an absent key leaves the cell untouched. Without it serde's derive
/// feeds a missing key through `Option` deserialization, which this type
/// cannot tell apart from an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MutationCell<T> {
    value: T,
    dirty: bool,
}

impl<T: Default> MutationCell<T> {
    /// An empty, clean cell holding `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the value out, leaving `T::default()` behind.
    ///
    /// This counts as an assignment: the cell ends dirty.
    pub fn take(&mut self) -> T {
        self.dirty = true;
        mem::take(&mut self.value)
    }

    /// Restores the freshly-constructed state: default value, not dirty.
    pub fn reset(&mut self) {
        self.value = T::default();
        self.dirty = false;
    }
}

impl<T> MutationCell<T> {
    /// A populated cell. Pre-populated cells are dirty.
    #[must_use]
    pub const fn with_value(value: T) -> Self {
        Self { value, dirty: true }
    }

    /// Overwrites the value and marks the cell dirty, even when `value`
    /// equals what was already stored.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.dirty = true;
    }

    /// Reads the value whether or not the cell is dirty.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Mutable access. Handing out `&mut T` counts as an assignment.
    pub fn get_mut(&mut self) -> &mut T {
        self.dirty = true;
        &mut self.value
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Negation of [`is_dirty`](Self::is_dirty), shaped for
    /// `#[serde(skip_serializing_if = "MutationCell::is_clean")]`.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !self.dirty
    }

    /// Clears the dirty flag, keeping the value.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Any> MutationCell<T> {
    /// Type-erased read for code that cannot name `T`.
    #[must_use]
    pub fn get_as_untyped(&self) -> &dyn Any {
        &self.value
    }
}

impl<T> From<T> for MutationCell<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T> Deref for MutationCell<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: Serialize> Serialize for MutationCell<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for MutationCell<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Reaching this point means the key was present. `null` still counts.
        let value = Option::<T>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::with_value(value))
    }
}

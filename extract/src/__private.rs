//! Support code for [`carrier!`](crate::carrier) expansions. Not public API.
//!
//! Cell detection uses autoref method resolution: for a field of type `F`,
//! the expansion calls `(&Probe(&field)).probe()`. When `F` is a serializable
//! `MutationCell<T>`, [`CellProbe`] matches the receiver `&Probe<F>` directly.
//! Otherwise the compiler autorefs once more and lands on [`PlainProbe`],
//! implemented for `&Probe<F>`, which reports "not a cell".

use serde::Serialize;
use tracked_cell::MutationCell;

use crate::shape::ErasedCell;

pub struct Probe<'a, T: ?Sized>(pub &'a T);

pub trait CellProbe<'a> {
    fn probe(&self) -> Option<&'a dyn ErasedCell>;
}

impl<'a, T: Serialize + 'a> CellProbe<'a> for Probe<'a, MutationCell<T>> {
    fn probe(&self) -> Option<&'a dyn ErasedCell> {
        Some(self.0)
    }
}

pub trait PlainProbe<'a> {
    fn probe(&self) -> Option<&'a dyn ErasedCell>;
}

impl<'a, T: ?Sized> PlainProbe<'a> for &Probe<'a, T> {
    fn probe(&self) -> Option<&'a dyn ErasedCell> {
        None
    }
}

/// The annotation written after a field, if any.
#[must_use]
pub const fn tag(annotation: &[&'static str]) -> Option<&'static str> {
    match annotation {
        [tag] => Some(*tag),
        _ => None,
    }
}

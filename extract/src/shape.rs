//! The reflection surface the extractor walks.
//!
//! Rust has no runtime struct reflection, so carriers describe themselves:
//! [`carrier!`](crate::carrier) generates [`Extract`] and [`Fields`] for the
//! struct it defines. Everything else implements [`Extract`] here, either as
//! one level of indirection (references, boxes, `Option`) or as a shape the
//! extractor does not look into.

use std::any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracked_cell::{MutationCell, resolve_name};

/// A [`MutationCell`] with its payload type erased.
pub trait ErasedCell {
    fn is_dirty(&self) -> bool;

    /// The unwrapped value as JSON.
    fn to_value(&self) -> Result<Value, serde_json::Error>;

    /// Name of the payload type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Serialize> ErasedCell for MutationCell<T> {
    fn is_dirty(&self) -> bool {
        MutationCell::is_dirty(self)
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.get())
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// One declared field of a carrier.
#[derive(Clone, Copy)]
pub struct FieldEntry<'a> {
    declared: &'static str,
    tag: Option<&'static str>,
    cell: Option<&'a dyn ErasedCell>,
}

impl<'a> FieldEntry<'a> {
    #[must_use]
    pub const fn new(
        declared: &'static str,
        tag: Option<&'static str>,
        cell: Option<&'a dyn ErasedCell>,
    ) -> Self {
        Self {
            declared,
            tag,
            cell,
        }
    }

    /// The identifier as written in the struct definition.
    #[must_use]
    pub const fn declared(&self) -> &'static str {
        self.declared
    }

    /// The raw external-name annotation, if the field has one.
    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// The field as a cell, or `None` when its type is not a `MutationCell`.
    #[must_use]
    pub const fn cell(&self) -> Option<&'a dyn ErasedCell> {
        self.cell
    }

    /// External name: annotation name token first, declared name otherwise.
    #[must_use]
    pub fn name(&self) -> &'static str {
        resolve_name(self.declared, self.tag)
    }
}

impl fmt::Debug for FieldEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("declared", &self.declared)
            .field("tag", &self.tag)
            .field("dirty", &self.cell.map(|cell| cell.is_dirty()))
            .finish()
    }
}

/// Field metadata for a struct, in declaration order.
pub trait Fields {
    fn fields(&self) -> Vec<FieldEntry<'_>>;
}

/// What a value looks like to the extractor.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// A carrier struct.
    Struct(&'a dyn Fields),
    /// One level of indirection. Holds the pointee only when the pointee is
    /// itself a struct; a pointer to anything else (including another
    /// pointer) carries `None`.
    Pointer(Option<&'a dyn Fields>),
    /// An empty indirection such as `None`.
    Null,
    /// Scalars, strings, collections.
    Other,
}

impl<'a> Shape<'a> {
    /// The shape of a single indirection to `target`.
    #[must_use]
    pub fn pointer_to(target: Shape<'a>) -> Self {
        match target {
            Shape::Struct(fields) => Shape::Pointer(Some(fields)),
            Shape::Pointer(_) | Shape::Null | Shape::Other => Shape::Pointer(None),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Shape::Struct(_) => "struct",
            Shape::Pointer(Some(_)) => "pointer",
            Shape::Pointer(None) => "nested pointer",
            Shape::Null => "null",
            Shape::Other => "other",
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Anything the extractor can be pointed at.
pub trait Extract {
    fn shape(&self) -> Shape<'_>;
}

impl<T: Extract + ?Sized> Extract for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::pointer_to((**self).shape())
    }
}

impl<T: Extract + ?Sized> Extract for &mut T {
    fn shape(&self) -> Shape<'_> {
        Shape::pointer_to((**self).shape())
    }
}

impl<T: Extract + ?Sized> Extract for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::pointer_to((**self).shape())
    }
}

impl<T: Extract + ?Sized> Extract for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::pointer_to((**self).shape())
    }
}

impl<T: Extract + ?Sized> Extract for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::pointer_to((**self).shape())
    }
}

impl<T: Extract> Extract for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::pointer_to(value.shape()),
            None => Shape::Null,
        }
    }
}

macro_rules! impl_other {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Extract for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Other
                }
            }
        )*
    };
}

impl_other!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    Value,
);

impl<T> Extract for MutationCell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

impl<T> Extract for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

impl<T, const N: usize> Extract for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

impl<T> Extract for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

impl<T, S> Extract for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

impl<T> Extract for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

impl<K, V, S> Extract for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

impl<K, V> Extract for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }
}

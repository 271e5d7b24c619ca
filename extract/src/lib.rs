//! Sparse extraction of explicitly-assigned fields.
//!
//! Declare a struct with [`carrier!`], type the fields you want tracked as
//! [`MutationCell`], and [`to_map`] returns only the cells that were set,
//! keyed by their external names. The result is the shape a PATCH request
//! or an audit record needs: unset fields are absent, not `null`.
//!
//! Extraction is total. Anything that is not a carrier (or a single
//! reference, box or `Some` around one) yields an empty map.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod error;
mod extract;
pub mod json;
mod macros;
mod shape;

#[doc(hidden)]
pub mod __private;

pub use error::DecodeError;
pub use extract::{FieldMap, dirty_fields, resolve, to_map};
pub use shape::{ErasedCell, Extract, FieldEntry, Fields, Shape};
pub use tracked_cell::{MutationCell, Tag, resolve_name, tag};

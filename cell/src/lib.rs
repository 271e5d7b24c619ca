//! Mutation-tracking value cells.
//!
//! This crate contains pure types with no IO and a single dependency (serde).
//! [`MutationCell`] records whether a field was ever explicitly assigned, and
//! [`tag`] holds the naming policy shared by everything that maps a field to
//! an external key.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod cell;
pub mod tag;

pub use cell::MutationCell;
pub use tag::{Tag, resolve_name};

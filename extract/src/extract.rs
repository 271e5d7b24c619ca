//! Sparse extraction of dirty cells.

use serde_json::{Map, Value};

use crate::shape::{Extract, Fields, Shape};

/// Output of [`to_map`]: resolved external name to unwrapped cell value.
pub type FieldMap = Map<String, Value>;

/// Normalises an input to the struct it denotes.
///
/// A struct resolves to itself and a single indirection resolves to its
/// pointee, provided the pointee is a struct. Null, nested indirection and
/// non-struct shapes resolve to nothing.
pub fn resolve<T: Extract + ?Sized>(input: &T) -> Option<&dyn Fields> {
    match input.shape() {
        Shape::Struct(fields) | Shape::Pointer(Some(fields)) => Some(fields),
        rejected @ (Shape::Pointer(None) | Shape::Null | Shape::Other) => {
            tracing::debug!(shape = rejected.kind(), "input is not a struct; nothing to extract");
            None
        }
    }
}

/// Collects every dirty `MutationCell` field of `input` under its external
/// name.
///
/// Never fails: inputs that are not a struct (or a single indirection to
/// one) yield an empty map, and a dirty value that cannot be represented as
/// JSON is skipped with a warning. The input is only read.
pub fn to_map<T: Extract + ?Sized>(input: &T) -> FieldMap {
    let mut map = FieldMap::new();
    let Some(fields) = resolve(input) else {
        return map;
    };

    for entry in fields.fields() {
        let Some(cell) = entry.cell() else {
            continue;
        };
        if !cell.is_dirty() {
            continue;
        }

        let name = entry.name();
        match cell.to_value() {
            Ok(value) => {
                tracing::trace!(field = name, declared = entry.declared(), "extracted dirty field");
                if map.insert(name.to_string(), value).is_some() {
                    tracing::warn!(
                        field = name,
                        declared = entry.declared(),
                        "external name used by more than one field; keeping the later one"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    field = name,
                    type_name = cell.type_name(),
                    "skipping dirty field that cannot be represented as JSON ({e})"
                );
            }
        }
    }

    map
}

/// Declared names of the dirty `MutationCell` fields of `input`, in
/// declaration order. Uses the same normalisation as [`to_map`].
pub fn dirty_fields<T: Extract + ?Sized>(input: &T) -> Vec<&'static str> {
    resolve(input).map_or_else(Vec::new, |fields| {
        fields
            .fields()
            .into_iter()
            .filter(|entry| entry.cell().is_some_and(|cell| cell.is_dirty()))
            .map(|entry| entry.declared())
            .collect()
    })
}

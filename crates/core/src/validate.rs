//! Request-body validation helpers.
//!
//! The per-resource required-field sets and error message texts live
//! next to each resource's handler configuration; this module holds the
//! shared mechanics.

use crate::types::DbId;

/// Return the first field in `fields` (declared order) whose value was
/// null or absent in the request body.
///
/// Each entry is `(field name, present)`. The declared order decides
/// which message the client sees when several fields are missing.
pub fn first_missing<'a>(fields: &[(&'a str, bool)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, present)| !present)
        .map(|(name, _)| *name)
}

/// Truthiness of an optional text field: present and non-empty.
///
/// An explicitly supplied empty string counts the same as an absent
/// field. This reproduces the service's historical partial-update
/// semantics; see DESIGN.md before changing it.
pub fn truthy_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Truthiness of an optional id field: present and non-zero.
pub fn truthy_id(value: &Option<DbId>) -> bool {
    value.is_some_and(|id| id != 0)
}

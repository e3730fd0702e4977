//! Row models and request DTOs, one module per table.

pub mod folder;
pub mod note;

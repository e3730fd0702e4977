//! Folder model.

use noteful_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `folders` table.
#[derive(Debug, Clone, FromRow)]
pub struct Folder {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a folder.
///
/// The required field is `Option` so the handler can report a missing
/// or null value with the contractual message instead of a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateFolder {
    pub name: Option<String>,
}

/// DTO for partially updating a folder.
#[derive(Debug, Deserialize)]
pub struct UpdateFolder {
    pub name: Option<String>,
}

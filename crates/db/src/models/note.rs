//! Note model.

use noteful_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: DbId,
    pub name: String,
    pub content: String,
    pub date_created: Timestamp,
    pub folder_id: DbId,
}

/// DTO for creating a note.
///
/// All fields are `Option` so validation can distinguish each missing
/// required field and report it in declared order.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<DbId>,
}

/// DTO for partially updating a note.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<DbId>,
}

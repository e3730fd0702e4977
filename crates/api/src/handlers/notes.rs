//! Resource configuration for notes.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;

use noteful_core::error::CoreError;
use noteful_core::sanitize::sanitize;
use noteful_core::types::{DbId, Timestamp};
use noteful_core::validate;
use noteful_db::models::note::{CreateNote, Note, UpdateNote};
use noteful_db::repositories::NoteRepo;

use crate::resource::Resource;

/// Message for a note update with no truthy field. The double space
/// before 'folder_id' is contractual; clients have matched on it.
const UPDATE_MESSAGE: &str = "Request body must contain 'name', 'content' and  'folder_id'";

/// The notes resource.
pub struct Notes;

/// External representation of a note. `name` and `content` are
/// sanitized; `id`, `date_created` and `folder_id` pass through.
#[derive(Debug, Serialize)]
pub struct PublicNote {
    pub id: DbId,
    pub name: String,
    pub content: String,
    pub date_created: Timestamp,
    pub folder_id: DbId,
}

#[async_trait]
impl Resource for Notes {
    const NAME: &'static str = "Note";

    type Row = Note;
    type Public = PublicNote;
    type Create = CreateNote;
    type Update = UpdateNote;

    fn validate_create(input: &CreateNote) -> Result<(), CoreError> {
        // Unlike folders, these messages carry no quotes around the
        // field name. Inherited inconsistency, kept as-is.
        let fields = [
            ("name", input.name.is_some()),
            ("content", input.content.is_some()),
            ("folder_id", input.folder_id.is_some()),
        ];
        if let Some(field) = validate::first_missing(&fields) {
            return Err(CoreError::Validation(format!(
                "Missing {field} in request body"
            )));
        }
        Ok(())
    }

    fn validate_update(input: &UpdateNote) -> Result<(), CoreError> {
        let any_truthy = validate::truthy_text(&input.name)
            || validate::truthy_text(&input.content)
            || validate::truthy_id(&input.folder_id);
        if !any_truthy {
            return Err(CoreError::Validation(UPDATE_MESSAGE.to_string()));
        }
        Ok(())
    }

    fn to_public(row: Note) -> PublicNote {
        PublicNote {
            id: row.id,
            name: sanitize(&row.name),
            content: sanitize(&row.content),
            date_created: row.date_created,
            folder_id: row.folder_id,
        }
    }

    fn id(row: &Note) -> DbId {
        row.id
    }

    async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        NoteRepo::list(pool).await
    }

    async fn find(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        NoteRepo::find_by_id(pool, id).await
    }

    async fn insert(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        NoteRepo::create(pool, input).await
    }

    async fn apply_update(pool: &PgPool, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error> {
        NoteRepo::update(pool, id, input).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        NoteRepo::delete(pool, id).await
    }
}

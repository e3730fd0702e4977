//! Repository for the `notes` table.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, name, content, date_created, folder_id";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes. No ORDER BY; callers must not assume insertion
    /// order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new note, returning the created row. `id` and
    /// `date_created` are assigned by the database; `folder_id` must
    /// reference an existing folder or the insert fails on the foreign
    /// key constraint.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (name, content, folder_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.name)
            .bind(&input.content)
            .bind(input.folder_id)
            .fetch_one(pool)
            .await
    }

    /// Apply the supplied fields to a note, returning the affected row
    /// count. Absent fields are left untouched.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET
                name = COALESCE($2, name),
                content = COALESCE($3, content),
                folder_id = COALESCE($4, folder_id)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.content)
        .bind(input.folder_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a note by ID, returning the affected row count. Zero is
    /// not an error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

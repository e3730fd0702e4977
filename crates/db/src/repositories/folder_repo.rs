//! Repository for the `folders` table.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::{CreateFolder, Folder, UpdateFolder};

/// Column list for folders queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// List all folders. No ORDER BY; callers must not assume insertion
    /// order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders");
        sqlx::query_as::<_, Folder>(&query).fetch_all(pool).await
    }

    /// Find a folder by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new folder, returning the created row.
    ///
    /// The caller validates presence first; `name` is bound as-is and a
    /// missing value surfaces as a NOT NULL violation.
    pub async fn create(pool: &PgPool, input: &CreateFolder) -> Result<Folder, sqlx::Error> {
        let query = format!("INSERT INTO folders (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Folder>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Apply the supplied fields to a folder, returning the affected
    /// row count. Absent fields are left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFolder,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE folders SET name = COALESCE($2, name) WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a folder by ID, returning the affected row count. Zero is
    /// not an error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

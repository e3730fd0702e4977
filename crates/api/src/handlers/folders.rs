//! Resource configuration for folders.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;

use noteful_core::error::CoreError;
use noteful_core::sanitize::sanitize;
use noteful_core::types::DbId;
use noteful_core::validate;
use noteful_db::models::folder::{CreateFolder, Folder, UpdateFolder};
use noteful_db::repositories::FolderRepo;

use crate::resource::Resource;

/// The folders resource.
pub struct Folders;

/// External representation of a folder: `id` and sanitized `name` only.
#[derive(Debug, Serialize)]
pub struct PublicFolder {
    pub id: DbId,
    pub name: String,
}

#[async_trait]
impl Resource for Folders {
    const NAME: &'static str = "Folder";

    type Row = Folder;
    type Public = PublicFolder;
    type Create = CreateFolder;
    type Update = UpdateFolder;

    fn validate_create(input: &CreateFolder) -> Result<(), CoreError> {
        if let Some(field) = validate::first_missing(&[("name", input.name.is_some())]) {
            return Err(CoreError::Validation(format!(
                "Missing '{field}' in request body"
            )));
        }
        Ok(())
    }

    fn validate_update(input: &UpdateFolder) -> Result<(), CoreError> {
        if !validate::truthy_text(&input.name) {
            return Err(CoreError::Validation(
                "Request body must contain 'name'".to_string(),
            ));
        }
        Ok(())
    }

    fn to_public(row: Folder) -> PublicFolder {
        PublicFolder {
            id: row.id,
            name: sanitize(&row.name),
        }
    }

    fn id(row: &Folder) -> DbId {
        row.id
    }

    async fn list(pool: &PgPool) -> Result<Vec<Folder>, sqlx::Error> {
        FolderRepo::list(pool).await
    }

    async fn find(pool: &PgPool, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        FolderRepo::find_by_id(pool, id).await
    }

    async fn insert(pool: &PgPool, input: &CreateFolder) -> Result<Folder, sqlx::Error> {
        FolderRepo::create(pool, input).await
    }

    async fn apply_update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFolder,
    ) -> Result<u64, sqlx::Error> {
        FolderRepo::update(pool, id, input).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        FolderRepo::delete(pool, id).await
    }
}

//! The generic resource handler.
//!
//! Folders and notes share the exact same request flow: validate,
//! persist, serialize. Rather than duplicating that flow per resource,
//! [`Resource`] captures the per-resource configuration (display name,
//! row/DTO types, validation, repository calls, public representation)
//! and [`router`] mounts the five HTTP operations for any implementor.

use async_trait::async_trait;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;

use noteful_core::error::CoreError;
use noteful_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

/// Per-resource configuration consumed by the generic handlers.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Display name used in 404 bodies: `"<NAME> does not exist"`.
    const NAME: &'static str;

    /// Internal row as stored.
    type Row: Send + 'static;
    /// External representation: allow-listed fields, free text sanitized.
    type Public: Serialize + Send;
    /// Create request body.
    type Create: DeserializeOwned + Send + Sync + 'static;
    /// Partial-update request body.
    type Update: DeserializeOwned + Send + Sync + 'static;

    /// Reject a create body whose required fields are null or absent.
    fn validate_create(input: &Self::Create) -> Result<(), CoreError>;

    /// Reject a partial-update body with no truthy field.
    fn validate_update(input: &Self::Update) -> Result<(), CoreError>;

    /// Map a row to its public representation.
    fn to_public(row: Self::Row) -> Self::Public;

    /// Primary key of a row, for `Location` headers.
    fn id(row: &Self::Row) -> DbId;

    async fn list(pool: &PgPool) -> Result<Vec<Self::Row>, sqlx::Error>;
    async fn find(pool: &PgPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error>;
    async fn insert(pool: &PgPool, input: &Self::Create) -> Result<Self::Row, sqlx::Error>;
    async fn apply_update(
        pool: &PgPool,
        id: DbId,
        input: &Self::Update,
    ) -> Result<u64, sqlx::Error>;
    async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error>;
}

/// Mount the five operations for a resource:
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> fetch
/// DELETE /{id}    -> remove
/// PATCH  /{id}    -> patch
/// ```
pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(fetch::<R>).delete(remove::<R>).patch(patch::<R>),
        )
}

/// Existence gate shared by the id-scoped handlers: 404 on miss.
async fn require_exists<R: Resource>(pool: &PgPool, id: DbId) -> AppResult<R::Row> {
    R::find(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: R::NAME }.into())
}

async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R::Public>>> {
    let rows = R::list(&state.pool).await?;
    Ok(Json(rows.into_iter().map(R::to_public).collect()))
}

async fn create<R: Resource>(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(input): Json<R::Create>,
) -> AppResult<impl IntoResponse> {
    R::validate_create(&input)?;

    let row = R::insert(&state.pool, &input).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), R::id(&row));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(R::to_public(row)),
    ))
}

async fn fetch<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<R::Public>> {
    let row = require_exists::<R>(&state.pool, id).await?;
    Ok(Json(R::to_public(row)))
}

async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_exists::<R>(&state.pool, id).await?;

    // The row may vanish between the gate and the delete; zero affected
    // rows still answers 204.
    R::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn patch<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<R::Update>,
) -> AppResult<StatusCode> {
    require_exists::<R>(&state.pool, id).await?;
    R::validate_update(&input)?;

    // Single atomic UPDATE; the affected count is not re-checked
    // against the gate.
    R::apply_update(&state.pool, id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

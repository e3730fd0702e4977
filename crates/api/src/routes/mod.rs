//! Route tree assembly.

pub mod health;

use axum::Router;

use crate::handlers::{Folders, Notes};
use crate::resource;
use crate::state::AppState;

/// Build the resource route tree, mounted at the application root so
/// the paths (and `Location` headers) match the published contract:
///
/// ```text
/// /folders          GET list, POST create
/// /folders/{id}     GET fetch, DELETE remove, PATCH update
/// /notes            GET list, POST create
/// /notes/{id}       GET fetch, DELETE remove, PATCH update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/folders", resource::router::<Folders>())
        .nest("/notes", resource::router::<Notes>())
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noteful_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a database variant.
/// Implements [`IntoResponse`] to produce the service's
/// `{"error": {"message": ...}}` JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `noteful_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, core.to_string())
            }
            AppError::Core(core @ CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, core.to_string())
            }
            // Store failures are logged server-side and surfaced as an
            // opaque 500; constraint violations included.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": { "message": message },
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn core_errors_convert_via_from() {
        let err: AppError = CoreError::NotFound { entity: "Folder" }.into();
        assert_eq!(err.to_string(), "Folder does not exist");
        assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Folder" }));
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::from(CoreError::NotFound { entity: "Note" }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            AppError::from(CoreError::Validation("Missing 'name' in request body".into()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_map_to_opaque_500() {
        let response = AppError::from(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

/// Domain-level errors surfaced to HTTP clients.
///
/// The `Display` strings are part of the API contract: they are sent
/// verbatim as the `error.message` field of error responses, so do not
/// reword them without checking the integration tests.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup by id found nothing.
    #[error("{entity} does not exist")]
    NotFound { entity: &'static str },

    /// Client input failed validation.
    #[error("{0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_message_names_the_entity() {
        let err = CoreError::NotFound { entity: "Folder" };
        assert_eq!(err.to_string(), "Folder does not exist");
        assert_matches!(err, CoreError::NotFound { entity: "Folder" });
    }

    #[test]
    fn validation_message_passes_through_verbatim() {
        let err = CoreError::Validation("Missing 'name' in request body".into());
        assert_eq!(err.to_string(), "Missing 'name' in request body");
        assert_matches!(err, CoreError::Validation(_));
    }
}

use thiserror::Error;

/// Failures surfaced by the model layer. Messages are carried verbatim:
/// the HTTP layer puts them straight into the `{"error": ...}` envelope.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Db(String),
}

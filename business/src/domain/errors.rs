/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility;
/// `Database` keeps the driver message so the edge can surface it as-is.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("{0}")]
    Database(String),
}

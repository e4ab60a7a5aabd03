#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

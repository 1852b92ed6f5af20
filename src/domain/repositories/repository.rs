use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

/// Storage failures the service layer reacts to.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique index rejected the write; the field tells which one.
    #[error("duplicate value for unique field `{0}`")]
    Duplicate(&'static str),
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
}

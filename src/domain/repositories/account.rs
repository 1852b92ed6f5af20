use async_trait::async_trait;

use crate::domain::models::account::{Account, CreateAccount};

use super::repository::RepositoryResult;

#[derive(Debug, Clone)]
pub enum FindByCol {
    Email(String),
    Name(String),
    Id(String),
}

impl FindByCol {
    pub fn value(self) -> String {
        match self {
            Self::Email(email) => email,
            Self::Name(name) => name,
            Self::Id(id) => id,
        }
    }
}

impl std::fmt::Display for FindByCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email(_) => write!(f, "email"),
            Self::Name(_) => write!(f, "name"),
            Self::Id(_) => write!(f, "id"),
        }
    }
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account. Uniqueness of `name` is enforced by the
    /// storage layer; violations surface as `RepositoryError::Duplicate`.
    async fn create(&self, new_account: CreateAccount) -> RepositoryResult<Account>;
    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<Account>>;
    /// Replaces the password hash and clears any pending reset code.
    async fn update_password(&self, id: &str, password: String) -> RepositoryResult<()>;
    async fn set_reset_code(&self, id: &str, code: String) -> RepositoryResult<()>;
    /// Marks the email verified and clears the verify code.
    async fn mark_email_verified(&self, id: &str) -> RepositoryResult<()>;
}

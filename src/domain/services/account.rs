use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, LoginOutcome, LoginRegister, ResetPassword};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    /// Signs in the account matching the identifier, or provisions a new one
    /// when no account exists.
    async fn login_or_register(&self, submission: LoginRegister) -> AppResult<LoginOutcome>;

    /// Issues a reset code for the address. Reveals nothing about whether an
    /// account exists.
    async fn forgot_password(&self, email: &str) -> AppResult<()>;

    /// Replaces the password when the code matches. An unknown identifier and
    /// a wrong code are indistinguishable from success.
    async fn reset_password(&self, submission: ResetPassword) -> AppResult<()>;

    async fn confirm_email(&self, user_id: &str, code: &str) -> AppResult<()>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;
}

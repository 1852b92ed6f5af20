use crate::api::dto::validation::{is_code, is_email, is_identifier, is_password};
use crate::domain::models::account::{Account, LoginRegister, ResetPassword};
use serde::Deserialize;
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: String,
    name: String,
    email: String,
    email_verified: bool,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct LoginRegisterDTO {
    /// Email address or login name; which one decides the dispatch.
    #[validate(custom(function = "is_identifier"))]
    #[schema(examples("alice@example.com"))]
    pub identifier: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("Secret123"))]
    pub password: String,

    #[schema(examples("/dashboard"))]
    pub return_url: Option<String>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct ForgotPasswordDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("alice@example.com"))]
    pub email: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct ResetPasswordDTO {
    #[validate(custom(function = "is_identifier"))]
    #[schema(examples("alice@example.com"))]
    pub identifier: String,

    #[validate(custom(function = "is_code"))]
    #[schema(examples("7ee2dd1a-78a4-4a4c-b16b-17dbcbb09f7e"))]
    pub code: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("N3wSecret"))]
    pub password: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConfirmEmailQuery {
    pub user_id: String,
    pub code: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            email_verified: val.email_verified,
        }
    }
}

impl From<LoginRegisterDTO> for LoginRegister {
    fn from(submission: LoginRegisterDTO) -> Self {
        LoginRegister {
            identifier: submission.identifier,
            password: submission.password,
        }
    }
}

impl From<ResetPasswordDTO> for ResetPassword {
    fn from(submission: ResetPasswordDTO) -> Self {
        ResetPassword {
            identifier: submission.identifier,
            code: submission.code,
            password: submission.password,
        }
    }
}

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::account::{Account, CreateAccount};

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    password: String,
    email_verified: bool,
    verify_code: Option<String>,
    reset_code: Option<String>,
}

#[derive(Serialize)]
pub struct SurrealAccountCreate {
    name: String,
    email: String,
    password: String,
    email_verified: bool,
    verify_code: Option<String>,
}

impl From<CreateAccount> for SurrealAccountCreate {
    fn from(acc: CreateAccount) -> Self {
        SurrealAccountCreate {
            name: acc.name,
            email: acc.email,
            password: acc.password,
            email_verified: false,
            verify_code: acc.verify_code,
        }
    }
}

impl From<SurrealAccount> for Account {
    fn from(acc: SurrealAccount) -> Self {
        Account {
            id: acc.id.id.to_string(),
            name: acc.name,
            email: acc.email,
            password: acc.password,
            email_verified: acc.email_verified,
            verify_code: acc.verify_code,
            reset_code: acc.reset_code,
        }
    }
}

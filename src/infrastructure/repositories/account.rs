use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::{AccountRepository, FindByCol};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

/// Must match the index name in `migration/schemas/account.surql`.
const UNIQUE_NAME_INDEX: &str = "unique_account_name";

// The WS client reports index violations as textual query errors, so the
// index name appearing in the message is the contract.
fn map_write_error(error: surrealdb::Error) -> RepositoryError {
    if error.to_string().contains(UNIQUE_NAME_INDEX) {
        RepositoryError::Duplicate("name")
    } else {
        RepositoryError::Database(error)
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
        let account: SurrealAccount = self
            .db
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(new_account))
            .await
            .map_err(map_write_error)?
            .unwrap();

        Ok(account.into())
    }

    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<Account>> {
        match column {
            FindByCol::Id(id) => {
                let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;

                Ok(account.map(Into::into))
            }
            column => {
                let account: Option<SurrealAccount> = self
                    .db
                    .query(format!(
                        "SELECT * FROM type::table($table) WHERE {column} = type::string($value)"
                    ))
                    .bind(("table", ACCOUNT))
                    .bind(("value", column.value()))
                    .await?
                    .take(0)?;

                Ok(account.map(Into::into))
            }
        }
    }

    async fn update_password(&self, id: &str, password: String) -> RepositoryResult<()> {
        self.db
            .query("UPDATE type::thing($table, $id) SET password = $password, reset_code = NONE")
            .bind(("table", ACCOUNT))
            .bind(("id", id.to_owned()))
            .bind(("password", password))
            .await?
            .check()?;

        Ok(())
    }

    async fn set_reset_code(&self, id: &str, code: String) -> RepositoryResult<()> {
        self.db
            .query("UPDATE type::thing($table, $id) SET reset_code = $code")
            .bind(("table", ACCOUNT))
            .bind(("id", id.to_owned()))
            .bind(("code", code))
            .await?
            .check()?;

        Ok(())
    }

    async fn mark_email_verified(&self, id: &str) -> RepositoryResult<()> {
        self.db
            .query("UPDATE type::thing($table, $id) SET email_verified = true, verify_code = NONE")
            .bind(("table", ACCOUNT))
            .bind(("id", id.to_owned()))
            .await?
            .check()?;

        Ok(())
    }
}

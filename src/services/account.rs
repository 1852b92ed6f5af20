use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, CreateAccount, LoginOutcome, LoginRegister, ResetPassword},
    models::identifier::Identifier,
    repositories::account::{AccountRepository, FindByCol},
    repositories::repository::RepositoryError,
    services::account::AccountService,
    services::mail::{MailMessage, MailSender},
};

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use async_trait::async_trait;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

/// Length of generated login names.
const NAME_LEN: usize = 7;

/// Draws against the storage unique index before giving up. Collisions on a
/// 7-letter random name are rare; hitting this bound means something else is
/// wrong.
const MAX_NAME_ATTEMPTS: usize = 5;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
    mailer: Arc<dyn MailSender>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>, mailer: Arc<dyn MailSender>) -> Self {
        Self { repository, mailer }
    }

    async fn find_one(&self, column: FindByCol) -> AppResult<Option<Account>> {
        Ok(self.repository.find_one(column).await?)
    }

    fn authenticate(&self, account: Account, password: &str) -> AppResult<LoginOutcome> {
        verify_password(password, &account.password)?;

        info!(account = %account.name, "account signed in");

        Ok(LoginOutcome {
            account,
            created: false,
        })
    }

    /// Registers under the exact name the user submitted. A concurrent
    /// registration of the same name surfaces as a conflict from the unique
    /// index.
    async fn register_named(&self, name: String, password: &str) -> AppResult<LoginOutcome> {
        let password = encrypt_password(password)?;

        let account = self
            .repository
            .create(CreateAccount {
                name,
                email: String::new(),
                password,
                verify_code: None,
            })
            .await?;

        info!(account = %account.name, "account created");

        Ok(LoginOutcome {
            account,
            created: true,
        })
    }

    /// Registers a new email account under a generated login name. Instead of
    /// scanning existing accounts, each draw is submitted to the storage
    /// layer and redrawn when the unique index rejects it.
    async fn register_generated(&self, email: String, password: &str) -> AppResult<LoginOutcome> {
        let password = encrypt_password(password)?;
        let verify_code = Uuid::new_v4().to_string();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let create = CreateAccount {
                name: random_name(),
                email: email.clone(),
                password: password.clone(),
                verify_code: Some(verify_code.clone()),
            };

            match self.repository.create(create).await {
                Ok(account) => {
                    self.mailer.send(&MailMessage {
                        to: account.email.clone(),
                        subject: "Confirm your email".to_string(),
                        body: format!(
                            "Follow /api/v1/confirm-email?user_id={}&code={verify_code} to confirm this address",
                            account.id
                        ),
                    })?;

                    info!(account = %account.name, "account created");

                    return Ok(LoginOutcome {
                        account,
                        created: true,
                    });
                }
                Err(RepositoryError::Duplicate("name")) => continue,
                Err(error) => return Err(error.into()),
            }
        }

        Err(AppError::Conflict("Could not allocate a unique login name"))
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn login_or_register(&self, submission: LoginRegister) -> AppResult<LoginOutcome> {
        match Identifier::classify(&submission.identifier) {
            Identifier::Email(email) => {
                match self.find_one(FindByCol::Email(email.clone())).await? {
                    Some(account) => self.authenticate(account, &submission.password),
                    None => self.register_generated(email, &submission.password).await,
                }
            }
            Identifier::Name(name) => {
                match self.find_one(FindByCol::Name(name.clone())).await? {
                    Some(account) => self.authenticate(account, &submission.password),
                    None => self.register_named(name, &submission.password).await,
                }
            }
        }
    }

    async fn forgot_password(&self, email: &str) -> AppResult<()> {
        // Unknown addresses return the same Ok as known ones.
        if let Some(account) = self.find_one(FindByCol::Email(email.to_string())).await? {
            let code = Uuid::new_v4().to_string();

            self.repository
                .set_reset_code(&account.id, code.clone())
                .await?;

            self.mailer.send(&MailMessage {
                to: account.email.clone(),
                subject: "Reset your password".to_string(),
                body: format!(
                    "Submit identifier={} and code={code} to /api/v1/reset-password",
                    account.name
                ),
            })?;
        }

        Ok(())
    }

    async fn reset_password(&self, submission: ResetPassword) -> AppResult<()> {
        let account = match Identifier::classify(&submission.identifier) {
            Identifier::Email(email) => self.find_one(FindByCol::Email(email)).await?,
            Identifier::Name(name) => self.find_one(FindByCol::Name(name)).await?,
        };

        // Unknown accounts and stale codes fall through to the same outcome.
        let Some(account) = account else {
            return Ok(());
        };

        if account.reset_code.as_deref() != Some(submission.code.as_str()) {
            return Ok(());
        }

        let password = encrypt_password(&submission.password)?;

        self.repository
            .update_password(&account.id, password)
            .await?;

        info!(account = %account.name, "password reset");

        Ok(())
    }

    async fn confirm_email(&self, user_id: &str, code: &str) -> AppResult<()> {
        let account = self
            .find_one(FindByCol::Id(user_id.to_string()))
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid confirmation link"))?;

        // Codes are single use, so a consumed link fails like a wrong one.
        if account.verify_code.as_deref() != Some(code) {
            return Err(AppError::BadRequest("Invalid confirmation link"));
        }

        self.repository.mark_email_verified(&account.id).await?;

        info!(account = %account.name, "email confirmed");

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        self.find_one(FindByCol::Id(id.to_string())).await
    }
}

fn random_name() -> String {
    let mut rng = rand::thread_rng();

    (0..NAME_LEN).map(|_| rng.gen_range('a'..='z')).collect()
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}

#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub email_verified: bool,
    pub verify_code: Option<String>,
    pub reset_code: Option<String>,
}

#[derive(Clone)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub verify_code: Option<String>,
}

/// One combined login/register submission.
#[derive(Clone)]
pub struct LoginRegister {
    pub identifier: String,
    pub password: String,
}

#[derive(Clone)]
pub struct ResetPassword {
    pub identifier: String,
    pub code: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub account: Account,
    /// True when the dispatch provisioned a new account.
    pub created: bool,
}

use crate::domain::models::account::Account;
use ::surrealdb::{Surreal, engine::remote::ws::Client, sql::Thing};

pub const SEED_VERIFY_CODE: &str = "seed-verify-code";
pub const SEED_RESET_CODE: &str = "seed-reset-code";

/// Seeds one account with known codes. The returned `password` field holds
/// the plaintext for test submissions, not the stored hash.
pub async fn seed_account(conn: &Surreal<Client>) -> Account {
    let query = format!(
        r#"
        LET $account = (CREATE account CONTENT {{
            name: '{}',
            email: '{}',
            password: crypto::argon2::generate('{}'),
            email_verified: false,
            verify_code: '{}',
            reset_code: '{}'
        }});
        RETURN $account[0].id;
        "#,
        "resident", "resident@email.com", "Secret123", SEED_VERIFY_CODE, SEED_RESET_CODE
    );

    let thing: Option<Thing> = conn.query(query).await.unwrap().take(1).unwrap();

    Account {
        id: thing.unwrap().id.to_string(),
        name: "resident".to_string(),
        email: "resident@email.com".to_string(),
        password: "Secret123".to_string(),
        email_verified: false,
        verify_code: Some(SEED_VERIFY_CODE.to_string()),
        reset_code: Some(SEED_RESET_CODE.to_string()),
    }
}

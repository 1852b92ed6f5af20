use actix_web::http::{StatusCode, header};
use rstest::*;
use serde::Deserialize;
use serde_json::json;

use crate::tests::utils::seed::{SEED_RESET_CODE, SEED_VERIFY_CODE, seed_account};
use crate::tests::{Error, TestContext, account_count, context, session_cookie};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    id: String,
    name: String,
    email: String,
    email_verified: bool,
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_email_registration(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/login-register")
        .set_json(json!({
            "identifier": "alice@example.com",
            "password": "Secret123",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = session_cookie(&app, "alice@example.com", "Secret123").await;

    let res = TestRequest::get()
        .uri("/api/v1/me")
        .cookie(cookie)
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let acc: Account = test::read_body_json(res).await;

    assert_eq!(acc.email, "alice@example.com");
    assert_eq!(acc.name.len(), 7);
    assert!(acc.name.chars().all(|c| c.is_ascii_lowercase()));
    assert!(!acc.email_verified);
    assert!(!acc.id.is_empty());

    assert_eq!(account_count(&context.db.connection).await, 1);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_email_login(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/v1/login-register")
        .set_json(json!({
            "identifier": account.email,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    // Signed in to the existing account instead of registering a second one.
    assert_eq!(account_count(&context.db.connection).await, 1);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_email_login_wrong_password(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/v1/login-register")
        .set_json(json!({
            "identifier": account.email,
            "password": "WrongSecret1",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().get("set-cookie").is_none());

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 401);
    assert_eq!(err.message, "Invalid login attempt");

    assert_eq!(account_count(&context.db.connection).await, 1);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_name_registration(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let cookie = session_cookie(&app, "brandnewuser", "Secret123").await;

    let res = TestRequest::get()
        .uri("/api/v1/me")
        .cookie(cookie)
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let acc: Account = test::read_body_json(res).await;

    assert_eq!(acc.name, "brandnewuser");
    assert_eq!(acc.email, "");

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_name_login(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/v1/login-register")
        .set_json(json!({
            "identifier": account.name,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(account_count(&context.db.connection).await, 1);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[case::local("/dashboard", "/dashboard")]
#[case::external("https://evil.example.com/", "/")]
#[awt]
#[actix_web::test]
async fn test_return_url(
    #[future] context: TestContext,
    #[case] return_url: &str,
    #[case] expected: &str,
) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/login-register")
        .set_json(json!({
            "identifier": "alice@example.com",
            "password": "Secret123",
            "return_url": return_url,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), expected);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[case::unknown_account("ghost", SEED_RESET_CODE)]
#[case::wrong_code("resident", "bogus-code")]
#[awt]
#[actix_web::test]
async fn test_reset_password_reveals_nothing(
    #[future] context: TestContext,
    #[case] identifier: &str,
    #[case] code: &str,
) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/v1/reset-password")
        .set_json(json!({
            "identifier": identifier,
            "code": code,
            "password": "N3wSecret1",
        }))
        .send_request(&app)
        .await;

    // Both cases land on the same confirmation redirect.
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).unwrap(),
        "/reset-password/confirmation"
    );

    // And the stored password is untouched.
    let res = TestRequest::post()
        .uri("/api/v1/login-register")
        .set_json(json!({
            "identifier": account.name,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_reset_password_with_valid_code(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/v1/reset-password")
        .set_json(json!({
            "identifier": account.name,
            "code": SEED_RESET_CODE,
            "password": "N3wSecret1",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).unwrap(),
        "/reset-password/confirmation"
    );

    let res = TestRequest::post()
        .uri("/api/v1/login-register")
        .set_json(json!({
            "identifier": account.name,
            "password": "N3wSecret1",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_forgot_password(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    for email in [account.email.as_str(), "ghost@email.com"] {
        let res = TestRequest::post()
            .uri("/api/v1/forgot-password")
            .set_json(json!({ "email": email }))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "/reset-password/confirmation"
        );
    }

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_confirm_email(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::get()
        .uri(&format!(
            "/api/v1/confirm-email?user_id={}&code={SEED_VERIFY_CODE}",
            account.id
        ))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    // The code is single use.
    let res = TestRequest::get()
        .uri(&format!(
            "/api/v1/confirm-email?user_id={}&code={SEED_VERIFY_CODE}",
            account.id
        ))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_confirm_email_wrong_code(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::get()
        .uri(&format!(
            "/api/v1/confirm-email?user_id={}&code=bogus-code",
            account.id
        ))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 400);
    assert_eq!(err.message, "Invalid confirmation link");

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_me_requires_session(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::get()
        .uri("/api/v1/me")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let _ = context.db.container.stop().await;
}

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::auth::RequireSession;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::account::LoginOutcome;
use crate::domain::services::account::AccountService;
use crate::domain::services::session::SessionService;

use crate::api::dto::account::{
    AccountDTO, ConfirmEmailQuery, ForgotPasswordDTO, LoginRegisterDTO, ResetPasswordDTO,
};

use actix_web::{
    HttpResponse,
    cookie::time::OffsetDateTime,
    cookie::{Cookie, SameSite},
    get,
    http::header,
    post,
    web::Data as State,
    web::Query,
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(login_register)
        .service(logout)
        .service(forgot_password)
        .service(reset_password)
        .service(confirm_email)
        .service(me);
}

const SESSION_COOKIE: &str = "Authorization";
const RESET_CONFIRMATION: &str = "/reset-password/confirmation";

#[utoipa::path(
    responses(
        (status = 303, description = "Signed in, or registered and signed in; Location is the validated return URL"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = LoginRegisterDTO,
    tag = "Account",
)]
#[post("/login-register")]
pub async fn login_register(
    payload: Json<LoginRegisterDTO>,
    account_service: State<Arc<dyn AccountService>>,
    session_service: State<Arc<dyn SessionService>>,
) -> ApiResult {
    let submission = payload.into_inner();
    let target = local_redirect(submission.return_url.as_deref());

    let LoginOutcome { account, .. } = account_service.login_or_register(submission.into()).await?;

    let access_token = session_service.start_session(account.id)?;

    let cookie = Cookie::build(SESSION_COOKIE, &access_token.token)
        .http_only(true)
        .secure(true)
        .path("/")
        .same_site(SameSite::Strict)
        .expires(OffsetDateTime::from_unix_timestamp(access_token.expiration).unwrap())
        .finish();

    Ok(HttpResponse::SeeOther()
        .append_header((header::LOCATION, target))
        .cookie(cookie)
        .finish())
}

#[utoipa::path(
    responses(
        (status = 303, description = "Session cookie cleared; Location is the home page"),
    ),
    tag = "Account",
)]
#[post("/logout")]
pub async fn logout() -> ApiResult {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();

    Ok(HttpResponse::SeeOther()
        .append_header((header::LOCATION, "/"))
        .cookie(cookie)
        .finish())
}

#[utoipa::path(
    responses(
        (status = 303, description = "Always redirects to the confirmation resource"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = ForgotPasswordDTO,
    tag = "Account",
)]
#[post("/forgot-password")]
pub async fn forgot_password(
    payload: Json<ForgotPasswordDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service.forgot_password(&payload.email).await?;

    Ok(see_other(RESET_CONFIRMATION))
}

#[utoipa::path(
    responses(
        (status = 303, description = "Same confirmation redirect whether or not the account or code matched"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = ResetPasswordDTO,
    tag = "Account",
)]
#[post("/reset-password")]
pub async fn reset_password(
    payload: Json<ResetPasswordDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service
        .reset_password(payload.into_inner().into())
        .await?;

    Ok(see_other(RESET_CONFIRMATION))
}

#[utoipa::path(
    params(ConfirmEmailQuery),
    responses(
        (status = 200, description = "Email confirmed"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/confirm-email")]
pub async fn confirm_email(
    query: Query<ConfirmEmailQuery>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service
        .confirm_email(&query.user_id, &query.code)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Email confirmed" })))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "The signed-in account"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("session" = [])),
    tag = "Account",
)]
#[get("/me")]
pub async fn me(
    session: RequireSession,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service
        .find_by_id(&session.claims.sub)
        .await?
        .ok_or_else(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

fn see_other(target: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, target))
        .finish()
}

/// Only local targets are honored, anything else falls back to the home page.
fn local_redirect(return_url: Option<&str>) -> String {
    match return_url {
        Some(url) if is_local_url(url) => url.to_string(),
        _ => "/".to_string(),
    }
}

fn is_local_url(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//") && !url.starts_with("/\\")
}

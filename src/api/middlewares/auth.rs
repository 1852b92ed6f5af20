use crate::domain::error::AppError;
use crate::domain::models::session::Claims;
use crate::domain::services::session::SessionService;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{Ready, err, ok};
use std::sync::Arc;

#[derive(Debug)]
pub struct RequireSession {
    pub claims: Claims,
}

fn get_token(req: &HttpRequest) -> Result<String, AppError> {
    if let Some(cookie) = req.cookie("Authorization") {
        return Ok(cookie.value().to_string());
    }

    if let Some(header) = req.headers().get("Authorization") {
        return Ok(header
            .to_str()
            .map_err(|_| AppError::Unauthorized())?
            .trim_start_matches("Bearer")
            .to_string());
    }

    Err(AppError::Unauthorized())
}

impl FromRequest for RequireSession {
    type Error = AppError;
    type Future = Ready<Result<RequireSession, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(session_service) = req.app_data::<web::Data<Arc<dyn SessionService>>>() {
            return match get_token(req) {
                Ok(token) => match session_service.validate_session(token.trim()) {
                    Ok(claims) => ok(RequireSession { claims }),
                    Err(error) => err(error),
                },
                Err(error) => err(error),
            };
        }

        err(AppError::InternalError().trace("SessionService is not defined"))
    }
}

use crate::domain::{
    error::AppResult,
    models::session::{AccessToken, Claims},
};

pub trait SessionService: 'static + Sync + Send {
    fn start_session(&self, id: String) -> AppResult<AccessToken>;
    fn validate_session(&self, token: &str) -> AppResult<Claims>;
}

use crate::domain::error::{AppError, AppResult};
use crate::domain::models::session::{AccessToken, Claims};
use crate::domain::services::session::SessionService;
use chrono::Utc;
use jsonwebtoken::errors::{Error as JsonWebTokenError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Persistent sessions outlive the browser session by design; the cookie and
/// the token share this lifetime.
const SESSION_DAYS: i64 = 30;

#[derive(Clone)]
pub struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    pub fn from_rsa_pem(
        private_key: Vec<u8>,
        public_key: Vec<u8>,
    ) -> Result<Self, JsonWebTokenError> {
        Ok(KeyPair {
            encoding: EncodingKey::from_rsa_pem(&private_key)?,
            decoding: DecodingKey::from_rsa_pem(&public_key)?,
        })
    }
}

pub struct SessionServiceImpl {
    keys: KeyPair,
}

impl SessionServiceImpl {
    pub fn new(keys: KeyPair) -> Self {
        SessionServiceImpl { keys }
    }
}

impl SessionService for SessionServiceImpl {
    fn start_session(&self, id: String) -> AppResult<AccessToken> {
        let now = Utc::now();

        let expiration = now
            .checked_add_signed(chrono::Duration::days(SESSION_DAYS))
            .unwrap()
            .timestamp();

        let iat = now.timestamp();

        let claims = Claims {
            sub: id,
            exp: expiration as usize,
            iat: iat as usize,
        };

        let header = Header::new(Algorithm::RS256);

        let token = encode(&header, &claims, &self.keys.encoding)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        Ok(AccessToken { token, expiration })
    }

    fn validate_session(&self, token: &str) -> AppResult<Claims> {
        match decode::<Claims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::RS256),
        ) {
            Ok(token) => Ok(token.claims),
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature
                | ErrorKind::InvalidToken
                | ErrorKind::InvalidIssuer => Err(AppError::Unauthorized()),
                _ => Err(AppError::InternalError().trace(&format!("{error:?}"))),
            },
        }
    }
}

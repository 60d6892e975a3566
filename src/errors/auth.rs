use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Token is missing")]
    MissingToken,

    #[error("Authorization header is malformed")]
    MalformedAuthorization,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::MalformedAuthorization => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
        }
    }
}

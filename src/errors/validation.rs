use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Password is required")]
    PasswordRequired,

    #[error("Query parameter 'hours' must be an integer")]
    InvalidHours,

    #[error("Query parameter 'hours' is out of range")]
    HoursOutOfRange,
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::PasswordRequired => StatusCode::BAD_REQUEST,
            ValidationError::InvalidHours => StatusCode::BAD_REQUEST,
            ValidationError::HoursOutOfRange => StatusCode::BAD_REQUEST,
        }
    }
}

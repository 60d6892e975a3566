use std::sync::Arc;

use anyhow::anyhow;
use axum::routing::post;
use axum::{Json, Router, extract::State};
use serde::{Deserialize, Serialize};

use crate::errors::{ApiError, AuthError, ValidationError};
use crate::services::{CredentialService, TokenService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

#[derive(Clone)]
pub struct AuthState {
    pub credential_service: Arc<CredentialService>,
    pub token_service: Arc<TokenService>,
}

pub fn auth_router(auth_state: AuthState) -> Router {
    Router::new()
        .route("/api/login", post(login))
        .with_state(auth_state)
}

pub async fn login(
    State(state): State<AuthState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let password = body
        .password
        .filter(|p| !p.is_empty())
        .ok_or(ValidationError::PasswordRequired)?;

    if !state.credential_service.verify(&password) {
        return Err(AuthError::InvalidPassword.into());
    }

    let token = state
        .token_service
        .generate_token()
        .map_err(|e| anyhow!("Failed to generate token: {}", e))?;

    Ok(Json(LoginResponse {
        expires_in: token.exp - token.iat,
        token: token.token,
    }))
}

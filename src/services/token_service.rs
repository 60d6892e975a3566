use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::configs::settings::Auth;
use crate::errors::AuthError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
    pub iat: u64,
    pub exp: u64,
}

/// There is a single implicit admin identity, so the claims carry nothing
/// beyond the issue and expiry times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iat: u64,
    pub exp: u64,
}

#[derive(Clone)]
pub struct TokenService {
    expiration: u64,
    secret: String,
}

impl TokenService {
    pub fn new(auth: Auth) -> Self {
        let secret = auth.secret.unwrap_or_else(|| {
            tracing::warn!("no signing secret configured, tokens will not survive a restart");

            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            hex::encode(bytes)
        });

        Self {
            expiration: auth.expiration,
            secret,
        }
    }

    pub fn retrieve_token_claims(&self, token: &str) -> Result<TokenData<TokenClaims>, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })
    }

    pub fn generate_token(&self) -> Result<Token, jsonwebtoken::errors::Error> {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_secs();
        let exp = iat + self.expiration;

        let claims = TokenClaims { iat, exp };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        let token = encode(&Header::default(), &claims, &encoding_key)?;

        Ok(Token { token, iat, exp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service(secret: Option<&str>, expiration: u64) -> TokenService {
        TokenService::new(Auth {
            password: String::from("secret123"),
            secret: secret.map(String::from),
            expiration,
        })
    }

    #[test]
    fn test_generate_and_retrieve_token() {
        let token_service = test_service(Some("test"), 1000);

        let token = token_service.generate_token().unwrap();

        let claims = token_service
            .retrieve_token_claims(&token.token)
            .unwrap()
            .claims;

        assert_eq!(claims.iat, token.iat);
        assert_eq!(claims.exp, token.exp);
        assert_eq!(claims.exp - claims.iat, 1000);
    }

    #[test]
    fn test_retrieve_expired_token() {
        let token_service = test_service(Some("test"), 1000);

        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = TokenClaims {
            iat: iat - 7200,
            exp: iat - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test".as_ref()),
        )
        .unwrap();

        let result = token_service.retrieve_token_claims(&token);

        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_retrieve_garbage_token() {
        let token_service = test_service(Some("test"), 1000);

        let result = token_service.retrieve_token_claims("wrongtoken");

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_retrieve_token_with_wrong_secret() {
        let token_service = test_service(Some("test"), 1000);
        let other_service = test_service(Some("other"), 1000);

        let token = other_service.generate_token().unwrap();

        let result = token_service.retrieve_token_claims(&token.token);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_generated_secret_is_stable_within_process() {
        // No configured secret: the service generates one and keeps using it
        let token_service = test_service(None, 1000);

        let token = token_service.generate_token().unwrap();

        assert!(token_service.retrieve_token_claims(&token.token).is_ok());
    }
}

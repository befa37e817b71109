use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Identity attached to the request by [`require_jwt`].
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Password hashing and bearer-token issuing/validation.
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: i64,
}

impl AuthManager {
    pub fn from_config(config: &Config) -> Self {
        let secret = match &config.jwt_secret {
            // Accept base64 for binary secrets, raw bytes otherwise.
            Some(raw) => BASE64
                .decode(raw.trim())
                .unwrap_or_else(|_| raw.trim().as_bytes().to_vec()),
            None => {
                tracing::warn!(
                    "WT_JWT_SECRET is not set; using an ephemeral secret, \
                     issued tokens will not survive a restart"
                );
                let mut bytes = [0u8; 32];
                OsRng.fill_bytes(&mut bytes);
                bytes.to_vec()
            }
        };

        Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    pub fn hash_password(&self, password: &str) -> ApiResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;
        Ok(hash.to_string())
    }

    pub fn verify_password(&self, password_hash: &str, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn issue_token(&self, user_id: &str) -> ApiResult<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.token_ttl_secs,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Token signing failed: {e}"))?;
        Ok(IssuedToken {
            token,
            expires_in: self.token_ttl_secs,
        })
    }

    pub fn decode_token(&self, token: &str) -> ApiResult<Claims> {
        decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Rejects the request unless a valid bearer token is present, and exposes
/// the token's subject as [`AuthUser`] in the request extensions.
pub async fn require_jwt(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;
    let claims = state.auth.decode_token(token)?;
    request.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
    });
    Ok(next.run(request).await)
}

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    config::AppConfig,
    dto::auth::{Claims, LoginRequest, LoginResponse},
    entity::users::{Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    state::AppState,
};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn jwt_secret(config: &AppConfig) -> AppResult<&str> {
    config
        .jwt_secret
        .as_deref()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))
}

pub fn issue_token(config: &AppConfig, user_id: i32) -> AppResult<String> {
    let secret = jwt_secret(config)?;

    let ttl = Duration::try_hours(config.token_ttl_hours)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Token TTL out of range")))?;
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn decode_token(config: &AppConfig, token: &str) -> AppResult<Claims> {
    let secret = config
        .jwt_secret
        .as_deref()
        .ok_or_else(|| AppError::Unauthorized("Token authentication is not configured".into()))?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))
}

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { username, password } = payload;

    let user = Users::find()
        .filter(UserCol::Username.eq(username.as_str()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest(INVALID_CREDENTIALS.into())),
    };

    if !verify_password(&password, &user.password) {
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.into()));
    }

    if !user.is_active {
        return Err(AppError::Forbidden("User is not active".into()));
    }

    let token = issue_token(&state.config, user.id)?;
    tracing::info!(user_id = user.id, "user logged in");

    Ok(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret() -> AppConfig {
        let mut config = AppConfig::new("sqlite::memory:");
        config.jwt_secret = Some("test-secret".into());
        config
    }

    #[test]
    fn hashed_passwords_verify() {
        let hash = hash_password("use the force").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("use the force", &hash));
        assert!(!verify_password("dark side", &hash));
    }

    #[test]
    fn plain_text_stored_password_never_verifies() {
        assert!(!verify_password("secret", "secret"));
    }

    #[test]
    fn issued_tokens_decode_to_subject() {
        let config = config_with_secret();
        let token = issue_token(&config, 42).unwrap();
        let claims = decode_token(&config, &token).unwrap();
        assert_eq!(claims.sub, "42");
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let config = config_with_secret();
        let token = issue_token(&config, 1).unwrap();

        let mut other = config_with_secret();
        other.jwt_secret = Some("another".into());
        assert!(matches!(
            decode_token(&other, &token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn out_of_range_ttl_is_an_error_not_a_panic() {
        let mut config = config_with_secret();
        config.token_ttl_hours = i64::MAX;
        assert!(matches!(issue_token(&config, 1), Err(AppError::Internal(_))));
    }

    #[test]
    fn issuing_without_secret_is_an_internal_error() {
        let config = AppConfig::new("sqlite::memory:");
        assert!(matches!(issue_token(&config, 1), Err(AppError::Internal(_))));
    }
}

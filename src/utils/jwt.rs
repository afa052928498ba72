use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{auth::model::TokenClaims, error::AppError};

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

// Admin tokens use the admin email as subject since admins have no stored
// user record; user tokens carry the user id.
pub fn generate_jwt(
    subject: &str,
    email: &str,
    role: &str,
    jwt_secret: &str,
    expiration: Duration,
) -> Result<String, AppError> {
    let now = Utc::now();
    let iat = now.timestamp() as usize;
    let exp = (now + expiration).timestamp() as usize;

    let claims = TokenClaims {
        sub: subject.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::AuthError(format!("Failed to generate token: {}", e)))
}

pub fn verify_jwt(token: &str, jwt_secret: &str) -> Result<TokenClaims, AppError> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| AppError::AuthError(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}

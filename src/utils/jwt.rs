use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub token_type: String,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expires_in: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expires_in: access_expires_in,
        }
    }

    pub fn generate_access_token(
        &self,
        user_id: i32,
        username: &str,
        role: &str,
    ) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.access_token_expires_in);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AppError::JwtError)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AppError::JwtError)?;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(AppError::AuthError("Invalid access token type".to_string()));
        }

        Ok(claims)
    }

    pub fn get_access_token_expires_in(&self) -> i64 {
        self.access_token_expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_verify_access_token() {
        let jwt = JwtService::new("test-secret", 3600);
        let token = jwt.generate_access_token(42, "alice", "User").unwrap();
        let claims = jwt.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "User");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new("secret-a", 3600);
        let verifier = JwtService::new("secret-b", 3600);
        let token = issuer.generate_access_token(1, "bob", "Admin").unwrap();

        assert!(verifier.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 超过 jsonwebtoken 默认 60 秒 leeway
        let jwt = JwtService::new("test-secret", -120);
        let token = jwt.generate_access_token(1, "bob", "User").unwrap();

        assert!(jwt.verify_access_token(&token).is_err());
    }
}

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The identity carried inside a token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    pub iat: i64,
    /// Optional; tokens issued without an expiry never expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Fails with `InvalidExpiry` when `expiry_hours` runs past the
    /// representable date range.
    pub fn new(user_id: impl Into<String>, expiry_hours: Option<u64>) -> Result<Self, JwtError> {
        let now = Utc::now();
        let exp = match expiry_hours {
            Some(hours) => {
                let expires_at = i64::try_from(hours)
                    .ok()
                    .and_then(Duration::try_hours)
                    .and_then(|ttl| now.checked_add_signed(ttl))
                    .ok_or(JwtError::InvalidExpiry(hours))?;
                Some(expires_at.timestamp())
            }
            None => None,
        };

        Ok(Self {
            user: TokenUser { id: user_id.into() },
            iat: now.timestamp(),
            exp,
        })
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidSecret,
    InvalidToken(String),
    InvalidExpiry(u64),
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
            JwtError::InvalidToken(msg) => write!(f, "Invalid JWT token: {}", msg),
            JwtError::InvalidExpiry(hours) => write!(f, "Token expiry of {} hours is out of range", hours),
        }
    }
}

impl std::error::Error for JwtError {}

/// Signs and verifies HS256 caller tokens with one shared secret
#[derive(Clone)]
pub struct TokenAuthority {
    secret: Arc<str>,
}

impl TokenAuthority {
    pub fn new(secret: &str) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }
        Ok(Self {
            secret: Arc::from(secret),
        })
    }

    pub fn issue(&self, claims: &Claims) -> Result<String, JwtError> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), claims, &encoding_key)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::default();
        // `exp` is enforced when present but not required
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{Claims, TokenAuthority};
use crate::error::ApiError;

/// Header the notes frontend sends its token in
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

const AUTHENTICATE_MESSAGE: &str = "Please authenticate using a valid token";

/// Authenticated caller extracted from the request token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub id: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { id: claims.user.id }
    }
}

/// Resolves the caller from the request token and injects an `AuthUser`;
/// rejects with 401 before the handler runs otherwise.
pub async fn fetch_user(
    State(authority): State<TokenAuthority>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_headers(request.headers()).map_err(|msg| {
        tracing::debug!("Rejected request without usable token: {}", msg);
        ApiError::unauthorized(AUTHENTICATE_MESSAGE)
    })?;

    let claims = authority.verify(&token).map_err(|e| {
        tracing::warn!("Rejected request with invalid token: {}", e);
        ApiError::unauthorized(AUTHENTICATE_MESSAGE)
    })?;

    if claims.user.id.is_empty() {
        return Err(ApiError::unauthorized(AUTHENTICATE_MESSAGE));
    }

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Token from `auth-token`, falling back to `Authorization: Bearer`
fn extract_token_from_headers(headers: &HeaderMap) -> Result<String, &'static str> {
    if let Some(value) = headers.get(AUTH_TOKEN_HEADER) {
        let token = value.to_str().map_err(|_| "Invalid auth-token header")?.trim();
        if token.is_empty() {
            return Err("Empty auth-token header");
        }
        return Ok(token.to_string());
    }

    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or("Missing auth-token header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        Some(_) => Err("Empty bearer token"),
        None => Err("Authorization header must use Bearer token format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn prefers_auth_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("abc"));
        headers.insert("authorization", HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_token_from_headers(&headers).unwrap(), "abc");
    }

    #[test]
    fn falls_back_to_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_token_from_headers(&headers).unwrap(), "xyz");
    }

    #[test]
    fn rejects_missing_or_malformed() {
        assert!(extract_token_from_headers(&HeaderMap::new()).is_err());

        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert!(extract_token_from_headers(&headers).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("  "));
        assert!(extract_token_from_headers(&headers).is_err());
    }
}

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::debug;

use frage_auth::{Principal, verify_token};
use frage_config::JwtConfig;

use crate::access::{AccessDenied, Authorized};

/// Principal carried by the request's `Authorization: Bearer` token.
///
/// A missing, malformed, expired or wrongly signed token all mean "no
/// principal"; the guard turns that into a 401.
pub fn bearer_principal(headers: &HeaderMap, jwt_config: &JwtConfig) -> Option<Principal> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))?;

    match verify_token(token.trim(), jwt_config) {
        Ok(claims) => Some(Principal::from(claims)),
        Err(err) => {
            debug!(error = %err.error, "Rejected bearer token");
            None
        }
    }
}

/// Reads the guard's decision stored by the policy layer.
///
/// A handler mounted outside the policy layer never sees an `Authorized`
/// and rejects with the unauthenticated response.
impl<S> FromRequestParts<S> for Authorized
where
    S: Send + Sync,
{
    type Rejection = AccessDenied;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Authorized>()
            .cloned()
            .ok_or(AccessDenied::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use frage_auth::create_access_token;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_valid_bearer_token() {
        let token = create_access_token("u1", "t@x.com", Some("parent"), &config()).unwrap();
        let principal = bearer_principal(&headers_with(&format!("Bearer {}", token)), &config())
            .unwrap();
        assert_eq!(principal.id, "u1");
        assert_eq!(principal.metadata_role.as_deref(), Some("parent"));
    }

    #[test]
    fn test_missing_header() {
        assert!(bearer_principal(&HeaderMap::new(), &config()).is_none());
    }

    #[test]
    fn test_wrong_scheme() {
        let token = create_access_token("u1", "t@x.com", None, &config()).unwrap();
        let headers = headers_with(&format!("Basic {}", token));
        assert!(bearer_principal(&headers, &config()).is_none());
    }

    #[test]
    fn test_invalid_token() {
        assert!(bearer_principal(&headers_with("Bearer nope"), &config()).is_none());
    }

    #[tokio::test]
    async fn test_extractor_without_decision_is_unauthenticated() {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let result = Authorized::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap_err(), AccessDenied::Unauthenticated);
    }
}

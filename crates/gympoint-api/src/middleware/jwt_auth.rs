//! JWT authentication middleware.
//!
//! Extracts the Bearer token from the Authorization header, validates
//! it, and inserts an [`AuthPrincipal`] into request extensions. Routes
//! behind this middleware can rely on the principal being present.

use crate::error::ApiError;
use crate::principal::{AuthKeys, AuthPrincipal};
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use gympoint_auth::{decode_token_with_config, ValidationConfig};

/// Authenticate the request and attach the caller's principal.
///
/// # Errors
///
/// - 401 when the Authorization header is missing or malformed
/// - 401 when the token is invalid, expired, or carries a bad subject
/// - 500 when signing material was not layered onto the route
pub async fn jwt_auth(mut request: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let keys = request
        .extensions()
        .get::<AuthKeys>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("AuthKeys extension missing; JWT middleware misconfigured");
            ApiError::Internal("Server configuration error".to_string())
        })?;

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing token".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Missing token".to_string()))?;

    let config = ValidationConfig::default().issuer(keys.issuer.clone());
    let claims = decode_token_with_config(token, keys.public_key_pem.as_bytes(), &config)
        .map_err(|e| {
            tracing::warn!(error = %e, "JWT validation failed");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        })?;

    let principal = AuthPrincipal::from_claims(&claims).ok_or_else(|| {
        tracing::warn!(sub = %claims.sub, "Token subject is not a valid user id");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    tracing::debug!(user_id = %principal.user_id, role = %principal.role, "Authenticated");

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Extension, Router,
    };
    use gympoint_auth::{encode_token, AuthClaims};
    use gympoint_core::{Role, UserId};
    use tower::util::ServiceExt;

    const TEST_PRIVATE_KEY: &str =
        include_str!("../../../gympoint-auth/tests/fixtures/test_key.pem");
    const TEST_PUBLIC_KEY: &str =
        include_str!("../../../gympoint-auth/tests/fixtures/test_key.pub.pem");

    async fn whoami(Extension(principal): Extension<AuthPrincipal>) -> String {
        principal.role.to_string()
    }

    fn test_keys() -> AuthKeys {
        AuthKeys::new(
            TEST_PRIVATE_KEY.to_string(),
            TEST_PUBLIC_KEY.to_string(),
            "gympoint".to_string(),
        )
    }

    fn test_app() -> Router {
        Router::new()
            .route("/", get(whoami))
            .layer(middleware::from_fn(jwt_auth))
            .layer(Extension(test_keys()))
    }

    fn token_for(role: Role) -> String {
        let claims = AuthClaims::new(UserId::new(), role, "t@gym.test", "gympoint", 3600);
        encode_token(&claims, TEST_PRIVATE_KEY.as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn valid_token_reaches_handler() {
        let request = Request::builder()
            .uri("/")
            .header("Authorization", format!("Bearer {}", token_for(Role::Admin)))
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_header_is_401() {
        let request = Request::builder()
            .uri("/")
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn empty_bearer_token_is_401() {
        let request = Request::builder()
            .uri("/")
            .header("Authorization", "Bearer ")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbage_token_is_401() {
        let request = Request::builder()
            .uri("/")
            .header("Authorization", "Bearer not.a.jwt")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_issuer_is_401() {
        let claims = AuthClaims::new(UserId::new(), Role::Admin, "t@gym.test", "impostor", 3600);
        let token = encode_token(&claims, TEST_PRIVATE_KEY.as_bytes()).unwrap();

        let request = Request::builder()
            .uri("/")
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

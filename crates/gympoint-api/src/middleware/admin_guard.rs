//! Admin-only route guard.
//!
//! Layered after [`jwt_auth`](super::jwt_auth) on routes that mutate
//! enrollments or subscription tiers.

use crate::error::ApiError;
use crate::principal::AuthPrincipal;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};

/// Reject the request unless the authenticated caller is an admin.
///
/// # Errors
///
/// - 401 when no principal is attached (route not behind `jwt_auth`)
/// - 403 when the caller's role is not admin
pub async fn admin_guard(request: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let principal = request
        .extensions()
        .get::<AuthPrincipal>()
        .ok_or_else(|| ApiError::Unauthorized("Missing token".to_string()))?;

    if !principal.role.is_admin() {
        tracing::warn!(
            user_id = %principal.user_id,
            role = %principal.role,
            "Admin-only route denied"
        );
        return Err(ApiError::Forbidden(
            "Admin privileges required".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use gympoint_core::{Role, UserId};
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    fn app_with_principal(role: Option<Role>) -> Router {
        let mut router = Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn(admin_guard));

        if let Some(role) = role {
            let principal = AuthPrincipal {
                user_id: UserId::new(),
                role,
                email: "t@gym.test".to_string(),
            };
            router = router.layer(middleware::from_fn(
                move |mut request: Request<Body>, next: Next| {
                    let principal = principal.clone();
                    async move {
                        request.extensions_mut().insert(principal);
                        next.run(request).await
                    }
                },
            ));
        }

        router
    }

    #[tokio::test]
    async fn admin_passes() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app_with_principal(Some(Role::Admin))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn student_is_403() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app_with_principal(Some(Role::Student))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn instructor_is_403() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app_with_principal(Some(Role::Instructor))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn missing_principal_is_401() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app_with_principal(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

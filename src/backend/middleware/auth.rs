/**
 * Admin Authentication Middleware
 *
 * Guards admin routes. Reads the JWT from the `x-auth-token` header,
 * verifies it and stores the admin identity in request extensions.
 *
 * - header missing → 401
 * - token malformed, tampered or expired → 400
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{AdminIdentity, TokenKeys};
use crate::backend::error::BackendError;

/// Header carrying the admin token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated admin extracted from the token
#[derive(Clone, Debug)]
pub struct AuthenticatedAdmin(pub AdminIdentity);

pub async fn admin_auth_middleware(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = request
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing {} header", AUTH_TOKEN_HEADER);
            BackendError::missing_token()
        })?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::warn!("Invalid admin token: {:?}", e);
        BackendError::invalid_token()
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedAdmin(claims.admin));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated admin
#[derive(Clone, Debug)]
pub struct AdminUser(pub AdminIdentity);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let AuthenticatedAdmin(admin) = parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedAdmin not found in request extensions");
                BackendError::missing_token()
            })?;

        Ok(AdminUser(admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn whoami(AdminUser(admin): AdminUser) -> String {
        admin.username
    }

    fn app(keys: TokenKeys) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(from_fn_with_state(keys.clone(), admin_auth_middleware))
            .with_state(keys)
    }

    fn admin() -> AdminIdentity {
        AdminIdentity {
            id: 1,
            username: "admin".to_string(),
        }
    }

    async fn call(keys: &TokenKeys, token: Option<&str>) -> Response {
        let mut builder = HttpRequest::builder().uri("/whoami");
        if let Some(token) = token {
            builder = builder.header(AUTH_TOKEN_HEADER, token);
        }
        app(keys.clone())
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let keys = TokenKeys::from_secret("secret");
        let token = keys.issue(&admin()).unwrap();

        let response = call(&keys, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"admin");
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let keys = TokenKeys::from_secret("secret");
        assert_eq!(call(&keys, None).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bad_token_is_bad_request() {
        let keys = TokenKeys::from_secret("secret");
        assert_eq!(call(&keys, Some("garbage")).await.status(), StatusCode::BAD_REQUEST);

        let forged = TokenKeys::from_secret("other").issue(&admin()).unwrap();
        assert_eq!(call(&keys, Some(&forged)).await.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_rejects() {
        let app: Router = Router::new().route("/whoami", get(whoami));
        let response = app
            .oneshot(HttpRequest::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

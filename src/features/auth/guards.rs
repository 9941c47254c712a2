//! Identity-kind guards for protected endpoints.
//!
//! The auth middleware verifies the bearer token and stores the decoded
//! [`AuthIdentity`] in request extensions; these extractors then require a
//! specific kind. A token of the other kind is authenticated but not
//! authorized, so the rejection is 403 rather than 401.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::auth::model::AuthIdentity;

/// Guard for citizen-only endpoints.
///
/// # Example
/// ```ignore
/// pub async fn handler(CitizenSession(citizen_id): CitizenSession) { ... }
/// ```
pub struct CitizenSession(pub Uuid);

impl<S> FromRequestParts<S> for CitizenSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthIdentity>() {
            Some(AuthIdentity::Citizen(id)) => Ok(CitizenSession(*id)),
            Some(AuthIdentity::Authority(_)) => {
                Err(AppError::Forbidden("Citizen access required".to_string()))
            }
            None => Err(AppError::Unauthorized(
                "Authentication required".to_string(),
            )),
        }
    }
}

/// Guard for authority-only endpoints.
///
/// # Example
/// ```ignore
/// pub async fn handler(AuthoritySession(authority_id): AuthoritySession) { ... }
/// ```
pub struct AuthoritySession(pub Uuid);

impl<S> FromRequestParts<S> for AuthoritySession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthIdentity>() {
            Some(AuthIdentity::Authority(id)) => Ok(AuthoritySession(*id)),
            Some(AuthIdentity::Citizen(_)) => {
                Err(AppError::Forbidden("Authority access required".to_string()))
            }
            None => Err(AppError::Unauthorized(
                "Authentication required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::core::middleware::auth_middleware;
    use crate::features::auth::services::TokenService;
    use crate::shared::test_helpers::with_identity;
    use axum::http::StatusCode;
    use axum::{middleware::from_fn_with_state, routing::get, Router};
    use axum_test::TestServer;
    use std::sync::Arc;

    async fn citizen_endpoint(CitizenSession(id): CitizenSession) -> String {
        id.to_string()
    }

    async fn authority_endpoint(AuthoritySession(id): AuthoritySession) -> String {
        id.to_string()
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(&AuthConfig {
            jwt_secret: "guard-test-secret-0123456789".to_string(),
            token_expiry_secs: 3600,
        }))
    }

    fn protected_router(tokens: Arc<TokenService>) -> Router {
        Router::new()
            .route("/citizen", get(citizen_endpoint))
            .route("/authority", get(authority_endpoint))
            .route_layer(from_fn_with_state(tokens, auth_middleware))
    }

    #[tokio::test]
    async fn test_citizen_token_authorizes_citizen_endpoint() {
        let tokens = token_service();
        let citizen_id = Uuid::new_v4();
        let token = tokens.issue(AuthIdentity::Citizen(citizen_id)).unwrap();

        let server = TestServer::new(protected_router(tokens)).unwrap();
        let response = server.get("/citizen").authorization_bearer(&token).await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), citizen_id.to_string());
    }

    #[tokio::test]
    async fn test_citizen_token_rejected_on_authority_endpoint() {
        let tokens = token_service();
        let token = tokens
            .issue(AuthIdentity::Citizen(Uuid::new_v4()))
            .unwrap();

        let server = TestServer::new(protected_router(tokens)).unwrap();
        let response = server.get("/authority").authorization_bearer(&token).await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_authority_token_rejected_on_citizen_endpoint() {
        let tokens = token_service();
        let token = tokens
            .issue(AuthIdentity::Authority(Uuid::new_v4()))
            .unwrap();

        let server = TestServer::new(protected_router(tokens)).unwrap();
        let response = server.get("/citizen").authorization_bearer(&token).await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let server = TestServer::new(protected_router(token_service())).unwrap();
        let response = server.get("/citizen").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_token_rejected() {
        let server = TestServer::new(protected_router(token_service())).unwrap();
        let response = server
            .get("/authority")
            .authorization_bearer("not-a-real-token")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_injected_identity_reaches_guard() {
        let citizen_id = Uuid::new_v4();
        let router = with_identity(
            Router::new().route("/citizen", get(citizen_endpoint)),
            AuthIdentity::Citizen(citizen_id),
        );

        let server = TestServer::new(router).unwrap();
        let response = server.get("/citizen").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), citizen_id.to_string());
    }
}

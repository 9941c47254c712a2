//! Authority route group (`/api/authority`)

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::authorities::handlers;
use crate::features::authorities::services::AuthorityService;
use crate::features::problems::services::ProblemService;

/// Registration and login (no authentication)
pub fn public_routes(service: Arc<AuthorityService>) -> Router {
    Router::new()
        .route("/api/authority/register", post(handlers::register))
        .route("/api/authority/login", post(handlers::login))
        .with_state(service)
}

/// Report triage (require an authority session; the auth middleware is
/// applied by the caller)
pub fn protected_routes(service: Arc<ProblemService>) -> Router {
    Router::new()
        .route("/api/authority/problems", get(handlers::list_problems))
        .route(
            "/api/authority/update-status",
            put(handlers::update_status),
        )
        .route("/api/authority/analytics", get(handlers::analytics))
        .with_state(service)
}

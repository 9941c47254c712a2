//! Citizen route group (`/api/citizen`)

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::citizens::handlers::{self, CitizenAuthState, CitizenReportState};

/// Registration and OTP login (no authentication)
pub fn public_routes(state: CitizenAuthState) -> Router {
    Router::new()
        .route("/api/citizen/register", post(handlers::register))
        .route("/api/citizen/send-otp", post(handlers::send_otp))
        .route("/api/citizen/verify-otp", post(handlers::verify_otp))
        .with_state(state)
}

/// Reporting and tracking (require a citizen session; the auth middleware
/// is applied by the caller)
pub fn protected_routes(state: CitizenReportState) -> Router {
    Router::new()
        .route(
            "/api/citizen/report-problem",
            post(handlers::report_problem),
        )
        .route("/api/citizen/my-reports", get(handlers::my_reports))
        .with_state(state)
}

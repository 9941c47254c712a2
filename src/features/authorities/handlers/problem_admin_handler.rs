//! Report triage handlers for authenticated authorities

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::AuthoritySession;
use crate::features::problems::dtos::{
    AnalyticsResponseDto, ProblemQueryParams, ProblemWithReporterDto, UpdateProblemStatusDto,
};
use crate::features::problems::services::ProblemService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::first_validation_message;

/// List all problem reports with optional filters
///
/// `status` and `category` are exact matches and compose with AND.
#[utoipa::path(
    get,
    path = "/api/authority/problems",
    params(ProblemQueryParams),
    responses(
        (status = 200, description = "Matching reports with reporter identity", body = ApiResponse<Vec<ProblemWithReporterDto>>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Authority session required")
    ),
    security(("bearer_auth" = [])),
    tag = "authority"
)]
pub async fn list_problems(
    AuthoritySession(_): AuthoritySession,
    State(service): State<Arc<ProblemService>>,
    Query(filter): Query<ProblemQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProblemWithReporterDto>>>> {
    let problems = service.list_filtered(&filter).await?;
    let total = problems.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(problems),
        None,
        Some(Meta { total }),
    )))
}

/// Overwrite a problem's status
#[utoipa::path(
    put,
    path = "/api/authority/update-status",
    request_body = UpdateProblemStatusDto,
    responses(
        (status = 200, description = "Status updated successfully"),
        (status = 400, description = "Missing problem id or status"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Authority session required"),
        (status = 404, description = "Problem not found")
    ),
    security(("bearer_auth" = [])),
    tag = "authority"
)]
pub async fn update_status(
    AuthoritySession(_): AuthoritySession,
    State(service): State<Arc<ProblemService>>,
    AppJson(dto): AppJson<UpdateProblemStatusDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

    service.update_status(dto.problem_id, &dto.status).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Status updated successfully".to_string()),
        None,
    )))
}

/// Aggregate report counts
///
/// Computed fresh on every call; no caching.
#[utoipa::path(
    get,
    path = "/api/authority/analytics",
    responses(
        (status = 200, description = "Aggregate counts", body = ApiResponse<AnalyticsResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Authority session required")
    ),
    security(("bearer_auth" = [])),
    tag = "authority"
)]
pub async fn analytics(
    AuthoritySession(_): AuthoritySession,
    State(service): State<Arc<ProblemService>>,
) -> Result<Json<ApiResponse<AnalyticsResponseDto>>> {
    let stats = service.analytics().await?;

    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

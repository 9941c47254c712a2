//! Problem reporting and tracking handlers for authenticated citizens

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::auth::guards::CitizenSession;
use crate::features::citizens::dtos::ReportProblemDto;
use crate::features::problems::dtos::ProblemResponseDto;
use crate::features::problems::models::CreateProblem;
use crate::features::problems::services::ProblemService;
use crate::modules::storage::UploadStore;
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct CitizenReportState {
    pub problem_service: Arc<ProblemService>,
    pub upload_store: Arc<UploadStore>,
}

/// File a new problem report
///
/// Multipart body with `description`, `location`, `category` text fields and
/// an optional `file` attachment.
#[utoipa::path(
    post,
    path = "/api/citizen/report-problem",
    request_body(
        content = ReportProblemDto,
        content_type = "multipart/form-data",
        description = "Problem details with optional attachment"
    ),
    responses(
        (status = 201, description = "Problem reported successfully", body = ApiResponse<ProblemResponseDto>),
        (status = 400, description = "Missing required text fields"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Citizen session required")
    ),
    security(("bearer_auth" = [])),
    tag = "citizen"
)]
pub async fn report_problem(
    CitizenSession(citizen_id): CitizenSession,
    State(state): State<CitizenReportState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ProblemResponseDto>>)> {
    let mut description: Option<String> = None;
    let mut location: Option<String> = None;
    let mut category: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "description" => description = Some(read_text(field, "description").await?),
            "location" => location = Some(read_text(field, "location").await?),
            "category" => category = Some(read_text(field, "category").await?),
            "file" => {
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file = Some((file_name, data.to_vec()));
            }
            _ => debug!("Ignoring unknown field: {}", field_name),
        }
    }

    let (description, location, category) = match (
        description.filter(|s| !s.is_empty()),
        location.filter(|s| !s.is_empty()),
        category.filter(|s| !s.is_empty()),
    ) {
        (Some(d), Some(l), Some(c)) => (d, l, c),
        _ => {
            return Err(AppError::Validation(
                "Description, location, and category are required".to_string(),
            ))
        }
    };

    let file_path = match file {
        Some((name, data)) => Some(state.upload_store.save(&name, &data).await?),
        None => None,
    };

    let problem = state
        .problem_service
        .create(
            citizen_id,
            CreateProblem {
                description,
                location,
                category,
                file_path,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(problem),
            Some("Problem reported successfully".to_string()),
            None,
        )),
    ))
}

/// List the authenticated citizen's own reports
#[utoipa::path(
    get,
    path = "/api/citizen/my-reports",
    responses(
        (status = 200, description = "List of the citizen's reports", body = ApiResponse<Vec<ProblemResponseDto>>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Citizen session required")
    ),
    security(("bearer_auth" = [])),
    tag = "citizen"
)]
pub async fn my_reports(
    CitizenSession(citizen_id): CitizenSession,
    State(state): State<CitizenReportState>,
) -> Result<Json<ApiResponse<Vec<ProblemResponseDto>>>> {
    let reports = state.problem_service.list_by_citizen(citizen_id).await?;
    let total = reports.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta { total }),
    )))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field.text().await.map_err(|e| {
        debug!("Failed to read multipart field {}: {}", name, e);
        AppError::BadRequest(format!("Failed to read field {}: {}", name, e))
    })
}

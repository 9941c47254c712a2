//! Authority registration and login handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::TokenResponseDto;
use crate::features::authorities::dtos::{
    AuthorityLoginDto, AuthorityResponseDto, RegisterAuthorityDto,
};
use crate::features::authorities::services::AuthorityService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::first_validation_message;

/// Register a new authority
#[utoipa::path(
    post,
    path = "/api/authority/register",
    request_body = RegisterAuthorityDto,
    responses(
        (status = 201, description = "Authority registered successfully", body = ApiResponse<AuthorityResponseDto>),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "Authority ID or email already used")
    ),
    tag = "authority"
)]
pub async fn register(
    State(service): State<Arc<AuthorityService>>,
    AppJson(dto): AppJson<RegisterAuthorityDto>,
) -> Result<(StatusCode, Json<ApiResponse<AuthorityResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

    let result = service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some("Authority registered successfully".to_string()),
            None,
        )),
    ))
}

/// Log in with authority credentials
#[utoipa::path(
    post,
    path = "/api/authority/login",
    request_body = AuthorityLoginDto,
    responses(
        (status = 200, description = "Session token issued", body = ApiResponse<TokenResponseDto>),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "authority"
)]
pub async fn login(
    State(service): State<Arc<AuthorityService>>,
    AppJson(dto): AppJson<AuthorityLoginDto>,
) -> Result<Json<ApiResponse<TokenResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

    let result = service.login(dto).await?;

    Ok(Json(ApiResponse::success(Some(result), None, None)))
}

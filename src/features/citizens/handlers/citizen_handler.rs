//! Citizen registration and OTP login handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::TokenResponseDto;
use crate::features::auth::model::AuthIdentity;
use crate::features::auth::services::TokenService;
use crate::features::citizens::dtos::{
    CitizenResponseDto, RegisterCitizenDto, SendOtpDto, VerifyOtpDto,
};
use crate::features::citizens::services::CitizenService;
use crate::features::otp::OtpService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::first_validation_message;

/// State for registration and login handlers
#[derive(Clone)]
pub struct CitizenAuthState {
    pub citizen_service: Arc<CitizenService>,
    pub otp_service: Arc<OtpService>,
    pub token_service: Arc<TokenService>,
}

/// Register a new citizen
#[utoipa::path(
    post,
    path = "/api/citizen/register",
    request_body = RegisterCitizenDto,
    responses(
        (status = 201, description = "Citizen registered successfully", body = ApiResponse<CitizenResponseDto>),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "Aadhaar or mobile already registered")
    ),
    tag = "citizen"
)]
pub async fn register(
    State(state): State<CitizenAuthState>,
    AppJson(dto): AppJson<RegisterCitizenDto>,
) -> Result<(StatusCode, Json<ApiResponse<CitizenResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

    let result = state.citizen_service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(result),
            Some("Citizen registered successfully".to_string()),
            None,
        )),
    ))
}

/// Issue a login code for a registered mobile number
///
/// Succeeds regardless of delivery outcome; the code reaches the citizen
/// through the configured notifier.
#[utoipa::path(
    post,
    path = "/api/citizen/send-otp",
    request_body = SendOtpDto,
    responses(
        (status = 200, description = "OTP sent successfully"),
        (status = 400, description = "Malformed mobile number"),
        (status = 404, description = "Mobile not registered")
    ),
    tag = "citizen"
)]
pub async fn send_otp(
    State(state): State<CitizenAuthState>,
    AppJson(dto): AppJson<SendOtpDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

    if state
        .citizen_service
        .find_id_by_mobile(&dto.mobile)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Citizen not registered".to_string()));
    }

    state.otp_service.issue(&dto.mobile).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("OTP sent successfully".to_string()),
        None,
    )))
}

/// Exchange a one-time code for a citizen session token
#[utoipa::path(
    post,
    path = "/api/citizen/verify-otp",
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Session token issued", body = ApiResponse<TokenResponseDto>),
        (status = 400, description = "Invalid or expired OTP")
    ),
    tag = "citizen"
)]
pub async fn verify_otp(
    State(state): State<CitizenAuthState>,
    AppJson(dto): AppJson<VerifyOtpDto>,
) -> Result<Json<ApiResponse<TokenResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

    state.otp_service.verify(&dto.mobile, &dto.otp).await?;

    // Codes are only issued for registered mobiles, so a miss here means
    // inconsistent state rather than caller error.
    let citizen_id = state
        .citizen_service
        .find_id_by_mobile(&dto.mobile)
        .await?
        .ok_or_else(|| {
            AppError::Internal("Verified OTP for an unregistered mobile".to_string())
        })?;

    let access_token = state
        .token_service
        .issue(AuthIdentity::Citizen(citizen_id))?;

    Ok(Json(ApiResponse::success(
        Some(TokenResponseDto { access_token }),
        None,
        None,
    )))
}

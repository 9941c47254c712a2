use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::dtos as auth_dtos;
use crate::features::authorities::{dtos as authorities_dtos, handlers as authorities_handlers};
use crate::features::citizens::{dtos as citizens_dtos, handlers as citizens_handlers};
use crate::features::problems::dtos as problems_dtos;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Citizen
        citizens_handlers::citizen_handler::register,
        citizens_handlers::citizen_handler::send_otp,
        citizens_handlers::citizen_handler::verify_otp,
        citizens_handlers::report_handler::report_problem,
        citizens_handlers::report_handler::my_reports,
        // Authority
        authorities_handlers::authority_handler::register,
        authorities_handlers::authority_handler::login,
        authorities_handlers::problem_admin_handler::list_problems,
        authorities_handlers::problem_admin_handler::update_status,
        authorities_handlers::problem_admin_handler::analytics,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::TokenResponseDto,
            ApiResponse<auth_dtos::TokenResponseDto>,
            // Citizens
            citizens_dtos::RegisterCitizenDto,
            citizens_dtos::CitizenResponseDto,
            citizens_dtos::SendOtpDto,
            citizens_dtos::VerifyOtpDto,
            citizens_dtos::ReportProblemDto,
            ApiResponse<citizens_dtos::CitizenResponseDto>,
            // Authorities
            authorities_dtos::RegisterAuthorityDto,
            authorities_dtos::AuthorityResponseDto,
            authorities_dtos::AuthorityLoginDto,
            ApiResponse<authorities_dtos::AuthorityResponseDto>,
            // Problems
            problems_dtos::ProblemResponseDto,
            problems_dtos::ReporterDto,
            problems_dtos::ProblemWithReporterDto,
            problems_dtos::UpdateProblemStatusDto,
            problems_dtos::AnalyticsResponseDto,
            ApiResponse<problems_dtos::ProblemResponseDto>,
            ApiResponse<Vec<problems_dtos::ProblemResponseDto>>,
            ApiResponse<Vec<problems_dtos::ProblemWithReporterDto>>,
            ApiResponse<problems_dtos::AnalyticsResponseDto>,
        )
    ),
    tags(
        (name = "citizen", description = "Citizen registration, OTP login, and problem reporting"),
        (name = "authority", description = "Authority credential auth and report triage"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "CivEase API",
        version = "0.1.0",
        description = "API documentation for CivEase",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

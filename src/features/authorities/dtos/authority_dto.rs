use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::MOBILE_REGEX;

/// Request DTO for authority registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterAuthorityDto {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub authority_id: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub name: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub designation: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub department: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub password: String,
}

/// Response DTO for a registered authority
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorityResponseDto {
    pub id: Uuid,
    pub authority_id: String,
    pub name: String,
}

/// Request DTO for authority login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AuthorityLoginDto {
    #[validate(length(min = 1, message = "Authority ID and password are required"))]
    pub authority_id: String,
    #[validate(length(min = 1, message = "Authority ID and password are required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterAuthorityDto {
        RegisterAuthorityDto {
            authority_id: "MCD-0042".to_string(),
            name: "B".to_string(),
            designation: "Inspector".to_string(),
            department: "Sanitation".to_string(),
            email: "b@example.gov".to_string(),
            mobile: "9123456780".to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(valid_registration().validate().is_ok());
    }

    #[test]
    fn test_missing_designation_rejected() {
        let dto = RegisterAuthorityDto {
            designation: String::new(),
            ..valid_registration()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let dto = RegisterAuthorityDto {
            email: "not-an-email".to_string(),
            ..valid_registration()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let dto = AuthorityLoginDto {
            authority_id: "MCD-0042".to_string(),
            password: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}

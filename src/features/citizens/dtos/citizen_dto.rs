use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::{AADHAAR_REGEX, MOBILE_REGEX};

/// Request DTO for citizen self-registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterCitizenDto {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub name: String,
    /// Date of birth as an ISO date string (YYYY-MM-DD)
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub dob: String,
    #[validate(regex(path = *AADHAAR_REGEX, message = "Invalid Aadhaar number"))]
    pub aadhaar: String,
    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number"))]
    pub mobile: String,
}

/// Response DTO for a registered citizen
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CitizenResponseDto {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
}

/// Request DTO for issuing a login code
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SendOtpDto {
    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number"))]
    pub mobile: String,
}

/// Request DTO for exchanging a code for a session token
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VerifyOtpDto {
    #[validate(length(min = 1, message = "Mobile and OTP are required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "Mobile and OTP are required"))]
    pub otp: String,
}

/// Multipart form for filing a problem report (schema for the API docs;
/// the handler reads the fields from the multipart stream directly)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ReportProblemDto {
    pub description: String,
    pub location: String,
    pub category: String,
    /// Optional attachment, stored under its original filename
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterCitizenDto {
        RegisterCitizenDto {
            name: "A".to_string(),
            dob: "2000-01-01".to_string(),
            aadhaar: "123456789012".to_string(),
            mobile: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(valid_registration().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let dto = RegisterCitizenDto {
            name: String::new(),
            ..valid_registration()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_short_aadhaar_rejected() {
        let dto = RegisterCitizenDto {
            aadhaar: "12345678901".to_string(),
            ..valid_registration()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_non_numeric_mobile_rejected() {
        let dto = RegisterCitizenDto {
            mobile: "98765abc10".to_string(),
            ..valid_registration()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_send_otp_requires_well_formed_mobile() {
        let dto = SendOtpDto {
            mobile: "123".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = SendOtpDto {
            mobile: "9876543210".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_verify_otp_requires_both_fields() {
        let dto = VerifyOtpDto {
            mobile: "9876543210".to_string(),
            otp: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}

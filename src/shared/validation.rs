use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Regex for validating Aadhaar numbers: exactly 12 digits
    pub static ref AADHAAR_REGEX: Regex = Regex::new(r"^\d{12}$").unwrap();

    /// Regex for validating mobile numbers: exactly 10 digits
    pub static ref MOBILE_REGEX: Regex = Regex::new(r"^\d{10}$").unwrap();
}

/// Flatten validator's error map into the first human-readable message.
/// Request DTOs attach a message to every rule, so the fallback is unreachable
/// in practice.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .next()
        .unwrap_or_else(|| "Validation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aadhaar_regex_valid() {
        assert!(AADHAAR_REGEX.is_match("123456789012"));
        assert!(AADHAAR_REGEX.is_match("000000000000"));
    }

    #[test]
    fn test_aadhaar_regex_invalid() {
        assert!(!AADHAAR_REGEX.is_match("12345678901")); // 11 digits
        assert!(!AADHAAR_REGEX.is_match("1234567890123")); // 13 digits
        assert!(!AADHAAR_REGEX.is_match("12345678901a")); // letter
        assert!(!AADHAAR_REGEX.is_match("1234 5678 9012")); // spaces
        assert!(!AADHAAR_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_mobile_regex_valid() {
        assert!(MOBILE_REGEX.is_match("9876543210"));
        assert!(MOBILE_REGEX.is_match("0000000000"));
    }

    #[test]
    fn test_mobile_regex_invalid() {
        assert!(!MOBILE_REGEX.is_match("987654321")); // 9 digits
        assert!(!MOBILE_REGEX.is_match("98765432101")); // 11 digits
        assert!(!MOBILE_REGEX.is_match("98765-4321")); // hyphen
        assert!(!MOBILE_REGEX.is_match("+919876543210")); // country code
        assert!(!MOBILE_REGEX.is_match("")); // empty
    }
}

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a pending one-time code
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct OtpCode {
    pub id: Uuid,
    pub mobile: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OtpCode {
    /// A code is live strictly before its expiry instant.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn code_expiring_at(expires_at: DateTime<Utc>) -> OtpCode {
        OtpCode {
            id: Uuid::new_v4(),
            mobile: "9876543210".to_string(),
            code: "123456".to_string(),
            expires_at,
            created_at: expires_at - Duration::minutes(5),
        }
    }

    #[test]
    fn test_code_live_before_expiry() {
        let now = Utc::now();
        let code = code_expiring_at(now + Duration::minutes(5));

        assert!(code.is_live(now));
    }

    #[test]
    fn test_code_dead_at_expiry_instant() {
        let now = Utc::now();
        let code = code_expiring_at(now);

        assert!(!code.is_live(now));
    }

    #[test]
    fn test_code_dead_after_expiry() {
        let now = Utc::now();
        let code = code_expiring_at(now - Duration::seconds(1));

        assert!(!code.is_live(now));
    }
}

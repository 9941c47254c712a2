use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::otp::models::OtpCode;
use crate::features::otp::notifier::SmsNotifier;

/// Digits in a generated code
const OTP_CODE_LENGTH: usize = 6;

/// Codes stay valid for this long after issuance
const OTP_TTL_MINUTES: i64 = 5;

/// Service for issuing and verifying one-time codes
pub struct OtpService {
    pool: PgPool,
    notifier: Arc<dyn SmsNotifier>,
}

impl OtpService {
    pub fn new(pool: PgPool, notifier: Arc<dyn SmsNotifier>) -> Self {
        Self { pool, notifier }
    }

    /// Issue a fresh code for a mobile number, replacing any previous code
    /// for that number, and hand it to the notifier.
    ///
    /// Dispatch is fire-and-forget: a delivery failure is logged and the
    /// call still succeeds.
    pub async fn issue(&self, mobile: &str) -> Result<()> {
        let code = generate_code();
        let expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        sqlx::query(
            r#"
            INSERT INTO otp_codes (mobile, code, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (mobile)
            DO UPDATE SET code = EXCLUDED.code, expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(mobile)
        .bind(&code)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store OTP: {:?}", e);
            AppError::Database(e)
        })?;

        if let Err(e) = self.notifier.send(mobile, &code).await {
            tracing::warn!("OTP dispatch failed for mobile {}: {}", mobile, e);
        }

        Ok(())
    }

    /// Verify a code for a mobile number and consume it.
    ///
    /// Absent entry, code mismatch, and expiry all collapse into the same
    /// generic error so the response does not reveal which check failed.
    /// A successful verification deletes the row: each code works once.
    pub async fn verify(&self, mobile: &str, code: &str) -> Result<()> {
        let entry = sqlx::query_as::<_, OtpCode>(
            "SELECT id, mobile, code, expires_at, created_at FROM otp_codes WHERE mobile = $1",
        )
        .bind(mobile)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch OTP: {:?}", e);
            AppError::Database(e)
        })?;

        let entry = entry.ok_or_else(invalid_or_expired)?;

        if entry.code != code || !entry.is_live(Utc::now()) {
            return Err(invalid_or_expired());
        }

        sqlx::query("DELETE FROM otp_codes WHERE id = $1")
            .bind(entry.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to consume OTP: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("OTP verified for mobile {}", mobile);

        Ok(())
    }
}

fn invalid_or_expired() -> AppError {
    AppError::Validation("Invalid or expired OTP".to_string())
}

/// Generate a random numeric code of [`OTP_CODE_LENGTH`] digits.
fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..OTP_CODE_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), OTP_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generated_codes_vary() {
        let codes: std::collections::HashSet<String> =
            (0..50).map(|_| generate_code()).collect();

        // 50 draws from a million values colliding down to one is not a thing
        assert!(codes.len() > 1);
    }
}

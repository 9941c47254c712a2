use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::citizens::dtos::{CitizenResponseDto, RegisterCitizenDto};
use crate::features::citizens::models::Citizen;

/// Service for citizen identity storage
pub struct CitizenService {
    pool: PgPool,
}

impl CitizenService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new citizen.
    ///
    /// The duplicate precheck gives the friendly 409; the schema UNIQUE
    /// constraints backstop a racing registration through
    /// [`AppError::conflict_on_unique`].
    pub async fn register(&self, dto: RegisterCitizenDto) -> Result<CitizenResponseDto> {
        let dob = NaiveDate::parse_from_str(&dto.dob, "%Y-%m-%d").map_err(|_| {
            AppError::Validation("Invalid date format for DOB. Use YYYY-MM-DD".to_string())
        })?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM citizens WHERE aadhaar = $1 OR mobile = $2)",
        )
        .bind(&dto.aadhaar)
        .bind(&dto.mobile)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check for existing citizen: {:?}", e);
            AppError::Database(e)
        })?;

        if exists {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let citizen = sqlx::query_as::<_, Citizen>(
            r#"
            INSERT INTO citizens (name, dob, aadhaar, mobile)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, dob, aadhaar, mobile, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(dob)
        .bind(&dto.aadhaar)
        .bind(&dto.mobile)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "User already exists"))?;

        tracing::info!("Citizen registered: id={}", citizen.id);

        Ok(citizen.into())
    }

    /// Look up a citizen id by mobile number.
    pub async fn find_id_by_mobile(&self, mobile: &str) -> Result<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM citizens WHERE mobile = $1")
            .bind(mobile)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up citizen by mobile: {:?}", e);
                AppError::Database(e)
            })
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::citizens::dtos::CitizenResponseDto;

/// Database model for a citizen
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Citizen {
    pub id: Uuid,
    pub name: String,
    pub dob: NaiveDate,
    pub aadhaar: String,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
}

impl From<Citizen> for CitizenResponseDto {
    fn from(c: Citizen) -> Self {
        Self {
            id: c.id,
            name: c.name,
            mobile: c.mobile,
        }
    }
}

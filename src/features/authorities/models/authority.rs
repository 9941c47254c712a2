use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::authorities::dtos::AuthorityResponseDto;

/// Database model for a municipal authority.
///
/// `authority_id` is the externally issued identifier officers log in with;
/// `id` is the surrogate key session tokens bind to.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Authority {
    pub id: Uuid,
    pub authority_id: String,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<Authority> for AuthorityResponseDto {
    fn from(a: Authority) -> Self {
        Self {
            id: a.id,
            authority_id: a.authority_id,
            name: a.name,
        }
    }
}

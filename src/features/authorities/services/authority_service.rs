use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::TokenResponseDto;
use crate::features::auth::model::AuthIdentity;
use crate::features::auth::services::TokenService;
use crate::features::authorities::dtos::{
    AuthorityLoginDto, AuthorityResponseDto, RegisterAuthorityDto,
};
use crate::features::authorities::models::Authority;

/// bcrypt cost factor
const BCRYPT_COST: u32 = 10;

/// Service for authority identity storage and credential auth
pub struct AuthorityService {
    pool: PgPool,
    token_service: Arc<TokenService>,
}

impl AuthorityService {
    pub fn new(pool: PgPool, token_service: Arc<TokenService>) -> Self {
        Self {
            pool,
            token_service,
        }
    }

    /// Register a new authority. The password is hashed before storage and
    /// never logged.
    ///
    /// The precheck covers authority_id and email; the schema UNIQUE
    /// constraints (which also cover mobile) backstop the rest.
    pub async fn register(&self, dto: RegisterAuthorityDto) -> Result<AuthorityResponseDto> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authorities WHERE authority_id = $1 OR email = $2)",
        )
        .bind(&dto.authority_id)
        .bind(&dto.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check for existing authority: {:?}", e);
            AppError::Database(e)
        })?;

        if exists {
            return Err(AppError::Conflict("Authority already exists".to_string()));
        }

        let password_hash = bcrypt::hash(&dto.password, BCRYPT_COST)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

        let authority = sqlx::query_as::<_, Authority>(
            r#"
            INSERT INTO authorities (authority_id, name, designation, department, email, mobile, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, authority_id, name, designation, department, email, mobile, password_hash, created_at
            "#,
        )
        .bind(&dto.authority_id)
        .bind(&dto.name)
        .bind(&dto.designation)
        .bind(&dto.department)
        .bind(&dto.email)
        .bind(&dto.mobile)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "Authority already exists"))?;

        tracing::info!(
            "Authority registered: id={}, authority_id={}",
            authority.id,
            authority.authority_id
        );

        Ok(authority.into())
    }

    /// Check credentials and issue an authority session token.
    ///
    /// Unknown identifier and wrong password produce the same generic 401.
    pub async fn login(&self, dto: AuthorityLoginDto) -> Result<TokenResponseDto> {
        let authority = sqlx::query_as::<_, Authority>(
            r#"
            SELECT id, authority_id, name, designation, department, email, mobile, password_hash, created_at
            FROM authorities
            WHERE authority_id = $1
            "#,
        )
        .bind(&dto.authority_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch authority: {:?}", e);
            AppError::Database(e)
        })?;

        let authority = authority.ok_or_else(invalid_credentials)?;

        let password_ok = bcrypt::verify(&dto.password, &authority.password_hash)
            .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))?;

        if !password_ok {
            return Err(invalid_credentials());
        }

        let access_token = self
            .token_service
            .issue(AuthIdentity::Authority(authority.id))?;

        tracing::info!("Authority logged in: id={}", authority.id);

        Ok(TokenResponseDto { access_token })
    }
}

fn invalid_credentials() -> AppError {
    AppError::Auth("Invalid credentials".to_string())
}

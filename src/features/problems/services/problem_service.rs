use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::problems::dtos::{
    AnalyticsResponseDto, ProblemQueryParams, ProblemResponseDto, ProblemWithReporterDto,
};
use crate::features::problems::models::{CreateProblem, Problem, ProblemWithReporter};
use crate::shared::constants::{STATUS_PENDING, STATUS_RESOLVED};

/// Service for problem report storage and aggregation
pub struct ProblemService {
    pool: PgPool,
}

#[derive(FromRow)]
struct StatusCounts {
    total: i64,
    resolved: i64,
    pending: i64,
}

#[derive(FromRow)]
struct CategoryCount {
    category: String,
    count: i64,
}

impl ProblemService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a new report owned by the given citizen. Status defaults to
    /// Pending via the schema.
    pub async fn create(&self, citizen_id: Uuid, data: CreateProblem) -> Result<ProblemResponseDto> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (citizen_id, description, file_path, location, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, citizen_id, description, file_path, location, category, status, created_at
            "#,
        )
        .bind(citizen_id)
        .bind(&data.description)
        .bind(&data.file_path)
        .bind(&data.location)
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert problem: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Problem reported: id={}, citizen_id={}, category={}",
            problem.id,
            problem.citizen_id,
            problem.category
        );

        Ok(problem.into())
    }

    /// All reports owned by a citizen, in insertion order.
    pub async fn list_by_citizen(&self, citizen_id: Uuid) -> Result<Vec<ProblemResponseDto>> {
        let rows = sqlx::query_as::<_, Problem>(
            r#"
            SELECT id, citizen_id, description, file_path, location, category, status, created_at
            FROM problems
            WHERE citizen_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(citizen_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch citizen reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// All reports matching the optional status/category filters, joined
    /// with the reporting citizen's name and mobile. Filters compose with
    /// AND when both are present.
    pub async fn list_filtered(
        &self,
        filter: &ProblemQueryParams,
    ) -> Result<Vec<ProblemWithReporterDto>> {
        let rows = sqlx::query_as::<_, ProblemWithReporter>(
            r#"
            SELECT
                p.id,
                p.description,
                p.file_path,
                p.location,
                p.category,
                p.status,
                p.created_at,
                c.name AS reporter_name,
                c.mobile AS reporter_mobile
            FROM problems p
            JOIN citizens c ON c.id = p.citizen_id
            WHERE ($1::text IS NULL OR p.status = $1)
              AND ($2::text IS NULL OR p.category = $2)
            ORDER BY p.created_at
            "#,
        )
        .bind(filter.status.as_deref())
        .bind(filter.category.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch problems: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Overwrite a problem's status. The value is not constrained to a
    /// fixed set.
    pub async fn update_status(&self, problem_id: Uuid, status: &str) -> Result<()> {
        let result = sqlx::query("UPDATE problems SET status = $2 WHERE id = $1")
            .bind(problem_id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update problem status: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        tracing::info!("Problem {} status set to {}", problem_id, status);

        Ok(())
    }

    /// Point-in-time aggregate counts over all reports.
    pub async fn analytics(&self) -> Result<AnalyticsResponseDto> {
        let counts = sqlx::query_as::<_, StatusCounts>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = $1) AS resolved,
                COUNT(*) FILTER (WHERE status = $2) AS pending
            FROM problems
            "#,
        )
        .bind(STATUS_RESOLVED)
        .bind(STATUS_PENDING)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute status counts: {:?}", e);
            AppError::Database(e)
        })?;

        let categories = sqlx::query_as::<_, CategoryCount>(
            "SELECT category, COUNT(*) AS count FROM problems GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute category counts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(AnalyticsResponseDto {
            total_reports: counts.total,
            resolved_reports: counts.resolved,
            pending_reports: counts.pending,
            category_wise_count: categories
                .into_iter()
                .map(|c| (c.category, c.count))
                .collect(),
        })
    }
}

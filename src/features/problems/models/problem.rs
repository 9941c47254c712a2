use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a problem report.
///
/// `status` is an open string: the service writes `Pending` on creation and
/// aggregates on `Resolved`, but authorities may set any value.
#[derive(Debug, Clone, FromRow)]
pub struct Problem {
    pub id: Uuid,
    pub citizen_id: Uuid,
    pub description: String,
    pub file_path: Option<String>,
    pub location: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Data for filing a new problem report
#[derive(Debug)]
pub struct CreateProblem {
    pub description: String,
    pub location: String,
    pub category: String,
    pub file_path: Option<String>,
}

/// A problem row joined with the reporting citizen's identity,
/// for the authority-facing listing
#[derive(Debug, Clone, FromRow)]
pub struct ProblemWithReporter {
    pub id: Uuid,
    pub description: String,
    pub file_path: Option<String>,
    pub location: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub reporter_name: String,
    pub reporter_mobile: String,
}

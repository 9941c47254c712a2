use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::problems::models::{Problem, ProblemWithReporter};

/// Response DTO for a problem report (citizen view)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemResponseDto {
    pub id: Uuid,
    pub description: String,
    pub location: String,
    pub status: String,
    pub category: String,
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponseDto {
    fn from(p: Problem) -> Self {
        Self {
            id: p.id,
            description: p.description,
            location: p.location,
            status: p.status,
            category: p.category,
            file_path: p.file_path,
            created_at: p.created_at,
        }
    }
}

/// Reporter identity attached to the authority view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReporterDto {
    pub name: String,
    pub mobile: String,
}

/// Response DTO for a problem report with reporter identity (authority view)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemWithReporterDto {
    pub id: Uuid,
    pub description: String,
    pub location: String,
    pub status: String,
    pub category: String,
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reporter: ReporterDto,
}

impl From<ProblemWithReporter> for ProblemWithReporterDto {
    fn from(p: ProblemWithReporter) -> Self {
        Self {
            id: p.id,
            description: p.description,
            location: p.location,
            status: p.status,
            category: p.category,
            file_path: p.file_path,
            created_at: p.created_at,
            reporter: ReporterDto {
                name: p.reporter_name,
                mobile: p.reporter_mobile,
            },
        }
    }
}

/// Optional filters for the authority listing; both compose with AND
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProblemQueryParams {
    /// Exact-match status filter
    pub status: Option<String>,
    /// Exact-match category filter
    pub category: Option<String>,
}

/// Request DTO for overwriting a problem's status
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProblemStatusDto {
    pub problem_id: Uuid,
    #[validate(length(min = 1, message = "Problem ID and status are required"))]
    pub status: String,
}

/// Aggregate counts over all problem reports, computed fresh per call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsResponseDto {
    pub total_reports: i64,
    pub resolved_reports: i64,
    pub pending_reports: i64,
    pub category_wise_count: HashMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_problem_projects_to_citizen_view() {
        let problem = Problem {
            id: Uuid::new_v4(),
            citizen_id: Uuid::new_v4(),
            description: "Streetlight out".to_string(),
            file_path: None,
            location: "5th Cross Rd".to_string(),
            category: "Electricity".to_string(),
            status: "Pending".to_string(),
            created_at: Utc::now(),
        };
        let id = problem.id;

        let dto = ProblemResponseDto::from(problem);

        assert_eq!(dto.id, id);
        assert_eq!(dto.status, "Pending");
        assert_eq!(dto.file_path, None);
    }

    #[test]
    fn test_reporter_identity_nested_in_authority_view() {
        let row = ProblemWithReporter {
            id: Uuid::new_v4(),
            description: "Overflowing drain".to_string(),
            file_path: Some("uploads/drain.jpg".to_string()),
            location: "Market St".to_string(),
            category: "Sanitation".to_string(),
            status: "Pending".to_string(),
            created_at: Utc::now(),
            reporter_name: "A".to_string(),
            reporter_mobile: "9876543210".to_string(),
        };

        let dto = ProblemWithReporterDto::from(row);

        assert_eq!(dto.reporter.name, "A");
        assert_eq!(dto.reporter.mobile, "9876543210");
    }

    #[test]
    fn test_analytics_serializes_category_map_as_object() {
        let dto = AnalyticsResponseDto {
            total_reports: 3,
            resolved_reports: 1,
            pending_reports: 2,
            category_wise_count: HashMap::from([
                ("Roads".to_string(), 2),
                ("Water".to_string(), 1),
            ]),
        };

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["total_reports"], 3);
        assert_eq!(value["category_wise_count"]["Roads"], 2);
        assert_eq!(value["category_wise_count"]["Water"], 1);
    }
}

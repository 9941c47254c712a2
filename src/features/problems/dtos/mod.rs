mod problem_dto;

pub use problem_dto::{
    AnalyticsResponseDto, ProblemQueryParams, ProblemResponseDto, ProblemWithReporterDto,
    ReporterDto, UpdateProblemStatusDto,
};

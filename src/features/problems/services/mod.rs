mod problem_service;

pub use problem_service::ProblemService;

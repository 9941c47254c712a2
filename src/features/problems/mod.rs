//! Problem reports: the core entity citizens file and authorities triage.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::ProblemService;

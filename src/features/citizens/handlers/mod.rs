pub mod citizen_handler;
pub mod report_handler;

pub use citizen_handler::{register, send_otp, verify_otp, CitizenAuthState};
pub use report_handler::{my_reports, report_problem, CitizenReportState};

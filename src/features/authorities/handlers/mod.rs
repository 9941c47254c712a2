pub mod authority_handler;
pub mod problem_admin_handler;

pub use authority_handler::{login, register};
pub use problem_admin_handler::{analytics, list_problems, update_status};

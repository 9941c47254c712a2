//! One-time codes for citizen login.
//!
//! A code is scoped to a mobile number, valid for five minutes, and single
//! use. Re-sending replaces the previous code for that number instead of
//! accumulating rows. Delivery goes through the [`notifier::SmsNotifier`]
//! collaborator; the default implementation only logs the code.

pub mod models;
pub mod notifier;
pub mod services;

pub use notifier::{LogSmsNotifier, SmsNotifier};
pub use services::OtpService;

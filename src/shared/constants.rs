// =============================================================================
// PROBLEM STATUS
// =============================================================================

// Status is stored as an open string column; these are the two values the
// service itself writes or aggregates on. Authorities may set other values.

/// Default status for a freshly reported problem
pub const STATUS_PENDING: &str = "Pending";

/// Status counted as resolved in analytics
pub const STATUS_RESOLVED: &str = "Resolved";

/// Reasons a request is refused before reaching the application.
pub mod admission_error;

/// What a DoS filter does with traffic over its limit.
pub mod dos_action;

/// Outcome of a DoS check.
pub mod dos_decision;

/// Errors raised by identity sources and SPIFFE ID parsing.
pub mod identity_error;

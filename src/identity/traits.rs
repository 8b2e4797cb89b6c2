/// Source of the current SVID and trust bundle.
pub mod identity_source;

//! Error types for the foundation crate.

/// Errors that can occur when parsing foundation types from text.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The string is not one of the four row statuses.
    #[error("unknown row status: {0:?}")]
    UnknownStatus(String),
}

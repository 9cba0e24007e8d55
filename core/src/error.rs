//! Error types for the students fetch pipeline.
//!
//! # Design
//! The `Display` text of each variant is the exact message shown to the user,
//! so consumers that match on displayed text keep working. Every variant is
//! folded into [`crate::FetchOutcome::Failure`] at the fetch boundary; nothing
//! here is meant to reach the rendering layer as an error value.

use thiserror::Error;

/// Classified failure of a students fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request exceeded the client's timeout bound.
    #[error("Request timeout - please try again")]
    Timeout,

    /// A response arrived with a non-2xx status.
    #[error("Server error: {0}")]
    ServerError(u16),

    /// The request went out but no response came back.
    #[error("Network error - please check your connection")]
    NetworkError,

    /// Anything else, including bodies that are not a user array.
    #[error("Failed to fetch students")]
    Unknown,
}

//! Source adapter error types.

/// Errors from protected-area source queries.
///
/// These stay inside the adapter boundary: the orchestrator records a
/// failed source as `query_status = error` and continues with the rest.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP transport error (connection, TLS, client-side timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The endpoint being called.
        endpoint: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The provider returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        /// The endpoint that answered.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt for diagnostics.
        body: String,
    },

    /// The provider's response did not match its documented schema.
    #[error("failed to deserialize response from {endpoint}: {reason}")]
    Deserialization {
        /// The endpoint that answered.
        endpoint: String,
        /// What went wrong while parsing.
        reason: String,
    },

    /// The adapter could not be constructed or is misconfigured.
    #[error("source not configured: {reason}")]
    NotConfigured {
        /// Human-readable configuration problem.
        reason: String,
    },
}

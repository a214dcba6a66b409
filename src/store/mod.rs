//! Remote store adapter — PostgREST-style API client.
//!
//! DESIGN
//! ======
//! The hosted relational store is reached over its REST query API, not a
//! direct SQL connection. `StoreClient` wraps the handful of query shapes
//! the services need: select-all with ordering, select-by-equality-filter,
//! single-row select, insert/update with representation return, delete, and
//! exact-count aggregation.
//!
//! ERROR HANDLING
//! ==============
//! A missing single row is a distinguishable condition (`is_row_missing`)
//! because get-by-id must surface "does not exist" differently from "store
//! unreachable". Everything else is an opaque `StoreError` that callers
//! either mask with fixture data (reads) or surface (writes).

pub mod client;
pub mod config;

pub use client::StoreClient;
pub use config::StoreConfig;

/// PostgREST error code returned when a single-object request matches no row.
pub const ROW_MISSING_CODE: &str = "PGRST116";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by remote store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required configuration env var is not set.
    #[error("missing store config: env var {var} not set")]
    MissingConfig { var: &'static str },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the store failed before a response arrived.
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store error {status} ({code}): {message}")]
    Api { status: u16, code: String, message: String },

    /// The store response body could not be deserialized.
    #[error("store response parse failed: {0}")]
    Parse(String),
}

impl StoreError {
    /// True when the store signalled "no row matched" on a single-row select.
    #[must_use]
    pub fn is_row_missing(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == ROW_MISSING_CODE)
    }
}

//! Data access & fallback services.
//!
//! DESIGN
//! ======
//! One module per entity, each exposing one function per operation. Every
//! operation first checks whether a remote store client exists on the app
//! state; without one it takes the fallback path against the fixture
//! dataset. The read/write asymmetry of the failure contract is encoded in
//! two named policies instead of ad hoc error handling:
//!
//! - [`mask_store_failure`] (reads): the store error is logged and the
//!   operation serves fixture data, so callers never observe an outage on
//!   list/get/dashboard paths.
//! - [`surface_store_failure`] (writes): the store error propagates to the
//!   caller unmodified. A failed write must be visible.
//!
//! Get-by-id is the one read with a distinguishable "record does not exist"
//! outcome, surfaced as [`DataError::NotFound`] carrying the requested id.

pub mod courses;
pub mod dashboard;
pub mod grades;
pub mod leads;
pub mod matriculations;
pub mod seed;

use rand::Rng;

use crate::store::StoreError;

// =============================================================================
// ERROR
// =============================================================================

/// Errors surfaced by data operations.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The requested record exists neither in the store nor in fixtures.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The operation requires a configured remote store (seed only).
    #[error("remote store not configured")]
    StoreNotConfigured,

    /// A store failure on a write path, passed through unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DataError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }
}

// =============================================================================
// FAILURE POLICIES
// =============================================================================

/// Read-path policy: log the store failure; the caller serves fixture data.
pub(crate) fn mask_store_failure(entity: &'static str, op: &'static str, err: &StoreError) {
    tracing::warn!(error = %err, entity, op, "store read failed, serving fixture data");
}

/// Write-path policy: the store failure is surfaced to the caller.
pub(crate) fn surface_store_failure(entity: &'static str, op: &'static str, err: StoreError) -> DataError {
    tracing::error!(error = %err, entity, op, "store write failed");
    DataError::Store(err)
}

// =============================================================================
// FALLBACK IDS
// =============================================================================

/// Random opaque id for records synthesized on the fallback create path.
/// Nine base-36 characters, matching the ids the original dataset used.
pub(crate) fn fallback_id() -> String {
    let mut rng = rand::rng();
    (0..9)
        .map(|_| {
            let digit = rng.random_range(0..36u32);
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect()
}

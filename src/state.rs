//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional remote store client and the owned fixture dataset.
//! `store` being `None` means the process runs in permanent fallback mode;
//! this is decided once at startup and never toggles at runtime.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::fixtures::Fixtures;
use crate::store::StoreClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are cheap to clone or Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Remote store client. `None` when store env vars are not configured.
    pub store: Option<StoreClient>,
    /// Fallback dataset. Mutated only by explicit update operations.
    pub fixtures: Arc<RwLock<Fixtures>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Option<StoreClient>) -> Self {
        Self::with_fixtures(store, Fixtures::sample())
    }

    #[must_use]
    pub fn with_fixtures(store: Option<StoreClient>, fixtures: Fixtures) -> Self {
        Self { store, fixtures: Arc::new(RwLock::new(fixtures)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::store::StoreConfig;

    /// State with no store configured: every operation takes the fallback path.
    #[must_use]
    pub fn fallback_state() -> AppState {
        AppState::new(None)
    }

    /// State with no store and an explicit fixture dataset.
    #[must_use]
    pub fn fallback_state_with(fixtures: Fixtures) -> AppState {
        AppState::with_fixtures(None, fixtures)
    }

    /// State whose store client points at a mock server base URL.
    #[must_use]
    pub fn mock_store_state(base_url: &str) -> AppState {
        let client = StoreClient::new(StoreConfig::for_base_url(base_url, "test-key"))
            .expect("store client should build");
        AppState::new(Some(client))
    }
}

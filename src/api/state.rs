//! Application state for the leave engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::document::JsonRenderer;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Holds the loaded configuration and the record store. Handlers take the
/// store lock once per request: reads run concurrently, writes exclusively.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<RwLock<InMemoryStore>>,
    renderer: JsonRenderer,
}

impl AppState {
    /// Creates the state, seeding the store with the configured holidays.
    pub fn new(config: ConfigLoader) -> Self {
        let store = InMemoryStore::with_holidays(config.holidays());
        Self::with_store(config, store)
    }

    /// Creates the state around an existing store.
    pub fn with_store(config: ConfigLoader, store: InMemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            renderer: JsonRenderer,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared record store.
    pub fn store(&self) -> &RwLock<InMemoryStore> {
        &self.store
    }

    /// Returns the document renderer.
    pub fn renderer(&self) -> &JsonRenderer {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_new_seeds_configured_holidays() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let expected = config.holidays().len();
        let state = AppState::new(config);
        assert_eq!(state.store().read().await.holidays().len(), expected);
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::with_store(config, InMemoryStore::new());
        let other = state.clone();
        other
            .store()
            .write()
            .await
            .add_holiday(crate::models::Holiday {
                date: chrono::NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
                name: "Cuti Bersama".to_string(),
            })
            .unwrap();
        assert_eq!(state.store().read().await.holidays().len(), 1);
    }
}

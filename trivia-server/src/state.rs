//! Application state shared across handlers

use std::sync::Arc;

use crate::store::TriviaStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn TriviaStore>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: TriviaStore + 'static,
    {
        Self::from_store(Arc::new(store))
    }

    pub fn from_store(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn TriviaStore {
        self.inner.store.as_ref()
    }
}

//! Process-wide shared application store.
//!
//! The store is created once at startup and handed to every presenter by
//! reference. It carries no state yet; anything added here becomes visible
//! to all presenters without threading it through intermediate views.

use std::ops::Deref;
use std::sync::Arc;

/// Shared application state. Currently empty.
#[derive(Debug, Default)]
pub struct AppStore {}

/// Cheap, cloneable handle to the single [`AppStore`] instance.
///
/// Clones share the same store, so a mutation made through one handle would
/// be seen through every other.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Arc<AppStore>,
}

impl StoreHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both handles point at the same store instance.
    pub fn ptr_eq(&self, other: &StoreHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for StoreHandle {
    type Target = AppStore;

    fn deref(&self) -> &AppStore {
        &self.inner
    }
}

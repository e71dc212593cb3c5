use crate::ports::{Clock, ProjectStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProjectStore, K: Clock> {
    store: S,
    clock: K,
}

impl<S: ProjectStore, K: Clock> AppContext<S, K> {
    /// Create a new application context.
    pub fn new(store: S, clock: K) -> Self {
        Self { store, clock }
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &K {
        &self.clock
    }
}

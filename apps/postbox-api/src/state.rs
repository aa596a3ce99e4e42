//! Application state - shared across all handlers.

use std::sync::Arc;

use postbox_core::ports::{IdGenerator, PostRepository};
use postbox_infra::{InMemoryPostRepository, RandomIdGenerator};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Seeded in-memory store with random ids.
    pub fn new() -> Self {
        let state = Self::from_parts(
            Arc::new(InMemoryPostRepository::seeded()),
            Arc::new(RandomIdGenerator::new()),
        );

        tracing::info!("Application state initialized with seed posts");
        state
    }

    pub fn from_parts(posts: Arc<dyn PostRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { posts, ids }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

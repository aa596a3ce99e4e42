//! # Postbox Infrastructure
//!
//! Concrete implementations of the ports defined in `postbox-core`.
//!
//! - [`store`] - the in-memory post store
//! - [`ids`] - id generators for new posts

pub mod ids;
pub mod store;

pub use ids::{RandomIdGenerator, SequentialIdGenerator};
pub use store::InMemoryPostRepository;

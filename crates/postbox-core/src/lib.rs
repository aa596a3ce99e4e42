//! # Postbox Core
//!
//! The domain layer of the post store.
//! This crate contains the post model and the ports adapters must implement,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;

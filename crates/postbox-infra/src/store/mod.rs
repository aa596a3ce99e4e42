//! Post storage.

mod memory;

pub use memory::InMemoryPostRepository;

//! Id generators.

mod random;
mod sequential;

pub use random::{RandomIdGenerator, MAX_RANDOM_ID};
pub use sequential::SequentialIdGenerator;

//! Uniform random ids.

use rand::Rng;

use postbox_core::ports::IdGenerator;

/// Exclusive upper bound of generated ids.
pub const MAX_RANDOM_ID: i64 = 1_000_000;

/// Draws ids uniformly from `[0, MAX_RANDOM_ID)`.
///
/// Ids are not checked against existing posts; collisions are possible.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> i64 {
        rand::thread_rng().gen_range(0..MAX_RANDOM_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_stay_in_range() {
        let ids = RandomIdGenerator::new();
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!((0..MAX_RANDOM_ID).contains(&id), "id {} out of range", id);
        }
    }
}

/// Source of ids for newly created posts.
///
/// Implementations make no uniqueness promise; callers do not check for
/// collisions with existing posts.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post repository - an ordered sequence of posts addressed by id.
///
/// Lookups are first-match in sequence order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in their current order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Append a post to the end of the sequence.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Replace the post with `id` in place, keeping its position and id.
    async fn replace(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError>;

    /// Remove the post with `id`.
    async fn remove(&self, id: i64) -> Result<(), RepoError>;
}

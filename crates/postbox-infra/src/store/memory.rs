//! In-memory post store.
//!
//! Posts live in a single `Vec` behind an async RwLock. Each operation holds
//! the lock for its whole read/modify/write; there is no ordering between
//! concurrent requests beyond lock acquisition order.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postbox_core::domain::{Post, PostDraft};
use postbox_core::error::RepoError;
use postbox_core::ports::PostRepository;

/// Ordered, in-memory post repository.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// A store holding the two seed posts.
    pub fn seeded() -> Self {
        Self::with_posts(Post::seed())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Position of the first post with `id`. Index 0 is a valid match.
    fn position(posts: &[Post], id: i64) -> Option<usize> {
        posts.iter().position(|p| p.id == id)
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());

        tracing::debug!(post_id = post.id, total = posts.len(), "Post inserted");
        Ok(post)
    }

    async fn replace(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let index = Self::position(&posts, id).ok_or(RepoError::NotFound { id })?;

        let post = draft.into_post(id);
        posts[index] = post.clone();

        tracing::debug!(post_id = id, index, "Post replaced");
        Ok(post)
    }

    async fn remove(&self, id: i64) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = Self::position(&posts, id).ok_or(RepoError::NotFound { id })?;

        posts.remove(index);

        tracing::debug!(post_id = id, index, total = posts.len(), "Post removed");
        Ok(())
    }
}

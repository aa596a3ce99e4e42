use serde::{Deserialize, Serialize};

/// Post entity - a stored post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i64>,
}

/// The fields of a post without its id.
///
/// Create and update both start from a draft; the id is stamped on
/// afterwards, so an update can never change a post's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i64>,
}

impl PostDraft {
    /// Create a draft with the default flags: published, no rating.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            published: true,
            rating: None,
        }
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn with_rating(mut self, rating: Option<i64>) -> Self {
        self.rating = rating;
        self
    }

    /// Stamp an id onto the draft.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            published: self.published,
            rating: self.rating,
        }
    }
}

impl Post {
    /// The records every fresh store starts with.
    pub fn seed() -> Vec<Post> {
        vec![
            PostDraft::new("title of post 1", "content of post 1").into_post(1),
            PostDraft::new("favorite foods", "I like pizza").into_post(2),
        ]
    }
}

//! Response envelopes and error bodies.

use serde::{Deserialize, Serialize};

/// `{"message": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"data": ...}` - used by list and create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// `{"post_detail": ...}` - used by get-one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse<T> {
    pub post_detail: T,
}

/// `{"updated_data": ...}` - used by update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedResponse<T> {
    pub updated_data: T,
}

/// Body of a 404.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub detail: String,
}

/// Body of a 422: one entry per rejected input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationErrorDetail>,
}

/// A single rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Where the input came from, e.g. `["body", "title"]` or `["path", "id"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationErrorDetail {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

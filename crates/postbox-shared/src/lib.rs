//! # Postbox Shared
//!
//! Wire types for the HTTP API, shared by the server and any client.

pub mod dto;
pub mod response;

pub use dto::PostRequest;
pub use response::{
    DataResponse, MessageResponse, NotFoundResponse, PostDetailResponse, UpdatedResponse,
    ValidationErrorDetail, ValidationErrorResponse,
};

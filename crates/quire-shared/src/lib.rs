//! # Quire Shared
//!
//! Types that cross the HTTP boundary: typed query/form payloads and the
//! problem-details body used for failed requests.

pub mod dto;
pub mod response;

pub use dto::{ListQuery, PostForm};
pub use response::ErrorResponse;

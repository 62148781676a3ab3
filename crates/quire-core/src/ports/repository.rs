use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post storage.
///
/// Implementations own identifier assignment and the `created_at` clock, and
/// must order posts newest first with ties broken by insertion order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post and return its freshly assigned id.
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError>;

    /// Fetch at most `limit` posts, newest first, skipping the `offset` newest.
    async fn range_fetch(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Number of posts `range_fetch(offset, limit)` would return.
    async fn count(&self, offset: u64, limit: u64) -> Result<u64, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;
}

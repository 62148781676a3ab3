//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quire_core::domain::{NewPost, Post, PostId};
use quire_core::error::RepoError;
use quire_core::ports::PostRepository;

/// Posts held in insertion order behind an async RwLock.
///
/// Ids are `position + 1` and `created_at` never goes backwards, so reverse
/// insertion order is the newest-first order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn to_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError> {
        let mut posts = self.posts.write().await;

        let id = PostId(posts.len() as u64 + 1);
        let now = Utc::now();
        let created_at = posts.last().map_or(now, |last| last.created_at.max(now));

        posts.push(Post {
            id,
            title: post.title,
            body: post.body,
            created_at,
        });

        tracing::debug!(post_id = %id, "Stored post in memory");
        Ok(id)
    }

    async fn range_fetch(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        Ok(posts
            .iter()
            .rev()
            .skip(to_usize(offset))
            .take(to_usize(limit))
            .cloned()
            .collect())
    }

    async fn count(&self, offset: u64, limit: u64) -> Result<u64, RepoError> {
        let total = self.posts.read().await.len() as u64;
        Ok(total.saturating_sub(offset).min(limit))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        let Some(index) = id.get().checked_sub(1) else {
            return Ok(None);
        };

        Ok(posts.get(to_usize(index)).cloned())
    }
}

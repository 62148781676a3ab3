//! Vec-backed repository for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Posts are kept oldest first; ids are positions + 1.
pub struct StubRepository {
    posts: Mutex<Vec<Post>>,
}

impl StubRepository {
    pub fn with_posts(n: u64) -> Self {
        let repo = Self {
            posts: Mutex::new(Vec::new()),
        };
        for i in 1..=n {
            repo.push(NewPost::new(format!("Post {i}"), format!("Body {i}")));
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn push(&self, post: NewPost) -> PostId {
        let mut posts = self.posts.lock().unwrap();
        let id = PostId(posts.len() as u64 + 1);
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        posts.push(Post {
            id,
            title: post.title,
            body: post.body,
            created_at: epoch + Duration::minutes(id.get() as i64),
        });
        id
    }

    fn newest_first(&self, offset: u64, limit: u64) -> Vec<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PostRepository for StubRepository {
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError> {
        Ok(self.push(post))
    }

    async fn range_fetch(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        Ok(self.newest_first(offset, limit))
    }

    async fn count(&self, offset: u64, limit: u64) -> Result<u64, RepoError> {
        Ok(self.newest_first(offset, limit).len() as u64)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}

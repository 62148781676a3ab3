//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DbConn, DbErr, EntityTrait, QueryOrder, QuerySelect,
    Select, Set,
};

use quire_core::domain::{NewPost, Post, PostId};
use quire_core::error::RepoError;
use quire_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Posts stored in the `posts` table; ids come from its `BIGSERIAL` column.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn newest_first() -> Select<PostEntity> {
        PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
    }
}

/// Postgres binds OFFSET/LIMIT as BIGINT. An offset past `i64::MAX` lies beyond
/// any row, so `None` means "empty window".
fn bigint_window(offset: u64, limit: u64) -> Option<(u64, u64)> {
    let max = i64::MAX as u64;
    (offset <= max).then(|| (offset, limit.min(max)))
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<PostId, RepoError> {
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(new_post.title),
            body: Set(new_post.body),
            created_at: NotSet,
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                query_error(e)
            }
        })?;

        let id = Post::try_from(model)?.id;
        tracing::debug!(post_id = %id, "Inserted post");
        Ok(id)
    }

    async fn range_fetch(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(offset, limit, "Fetching posts");
        let Some((offset, limit)) = bigint_window(offset, limit) else {
            return Ok(Vec::new());
        };

        Self::newest_first()
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_error)?
            .into_iter()
            .map(Post::try_from)
            .collect()
    }

    async fn count(&self, offset: u64, limit: u64) -> Result<u64, RepoError> {
        let Some((offset, limit)) = bigint_window(offset, limit) else {
            return Ok(0);
        };

        // Id-only select; at most `limit` rows come back.
        let ids: Vec<i64> = Self::newest_first()
            .select_only()
            .column(post::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(ids.len() as u64)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let Ok(key) = i64::try_from(id.get()) else {
            return Ok(None);
        };

        PostEntity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .map(Post::try_from)
            .transpose()
    }
}

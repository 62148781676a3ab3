//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

use quire_core::domain::{Post, PostId};
use quire_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Post.
impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = u64::try_from(model.id)
            .map_err(|_| RepoError::Query(format!("negative post id {}", model.id)))?;

        Ok(Self {
            id: PostId(id),
            title: model.title,
            body: model.body,
            created_at: model.created_at.into(),
        })
    }
}

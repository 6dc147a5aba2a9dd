//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use blogly_core::domain::{NewPost, NewTag, NewUser, Post, Tag, User, reconcile_tag_sets};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

fn write_err(e: DbErr) -> RepoError {
    if matches!(e, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("foreign key") {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}

/// SeaORM user repository.
pub struct SeaOrmUserRepository {
    db: DbConn,
}

impl SeaOrmUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let rows = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<User>, RepoError> {
        let row = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, new: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(new)
            .insert(&self.db)
            .await
            .map_err(write_err)?;

        tracing::debug!(user_id = model.id, "User created");
        Ok(model.into())
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(entity)
            .update(&self.db)
            .await
            .map_err(write_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        // Owned posts and their tag links go with the user (FK cascade).
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(write_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(user_id = id, "User deleted");
        Ok(())
    }
}

/// SeaORM post repository.
///
/// Post writes and their join-table reconciliation share one transaction:
/// either all row changes commit or none do.
pub struct SeaOrmPostRepository {
    db: DbConn,
}

impl SeaOrmPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Filter submitted tag ids down to the ones that exist. Unknown ids
    /// are dropped rather than rejected, matching the form contract.
    async fn existing_tag_ids<C>(conn: &C, tag_ids: &[i32]) -> Result<Vec<i32>, RepoError>
    where
        C: sea_orm::ConnectionTrait,
    {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = TagEntity::find()
            .filter(tag::Column::Id.is_in(tag_ids.to_vec()))
            .all(conn)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(|t| t.id).collect())
    }

    async fn attach_tags<C>(conn: &C, post_id: i32, tag_ids: &[i32]) -> Result<(), RepoError>
    where
        C: sea_orm::ConnectionTrait,
    {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let rows = tag_ids.iter().map(|&tag_id| post_tag::ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        });

        PostTagEntity::insert_many(rows)
            .exec_without_returning(conn)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn recent(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn tags_of(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let links = PostTagEntity::find()
            .filter(post_tag::Column::PostId.eq(post_id))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = links.into_iter().map(|l| l.tag_id).collect();
        let rows = TagEntity::find()
            .filter(tag::Column::Id.is_in(ids))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        let model = post::ActiveModel::from(new)
            .insert(&txn)
            .await
            .map_err(write_err)?;

        let tag_ids = Self::existing_tag_ids(&txn, tag_ids).await?;
        Self::attach_tags(&txn, model.id, &tag_ids).await?;

        txn.commit().await.map_err(write_err)?;

        tracing::debug!(post_id = model.id, tags = tag_ids.len(), "Post created");
        Ok(model.into())
    }

    async fn update(&self, entity: Post, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        // created_at and user_id are immutable; only title and content move.
        let active = post::ActiveModel {
            id: Set(entity.id),
            title: Set(entity.title),
            content: Set(entity.content),
            ..Default::default()
        };
        let model = active.update(&txn).await.map_err(write_err)?;

        let current: Vec<i32> = PostTagEntity::find()
            .filter(post_tag::Column::PostId.eq(entity.id))
            .all(&txn)
            .await
            .map_err(query_err)?
            .into_iter()
            .map(|l| l.tag_id)
            .collect();

        let submitted = Self::existing_tag_ids(&txn, tag_ids).await?;
        let diff = reconcile_tag_sets(&current, &submitted);

        Self::attach_tags(&txn, entity.id, &diff.to_add).await?;

        if !diff.to_remove.is_empty() {
            PostTagEntity::delete_many()
                .filter(post_tag::Column::PostId.eq(entity.id))
                .filter(post_tag::Column::TagId.is_in(diff.to_remove.clone()))
                .exec(&txn)
                .await
                .map_err(write_err)?;
        }

        txn.commit().await.map_err(write_err)?;

        tracing::debug!(
            post_id = entity.id,
            added = diff.to_add.len(),
            removed = diff.to_remove.len(),
            "Post updated"
        );
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        // Tag links go with the post (FK cascade).
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(write_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}

/// SeaORM tag repository.
pub struct SeaOrmTagRepository {
    db: DbConn,
}

impl SeaOrmTagRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RepoError> {
        let rows = TagEntity::find()
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Tag>, RepoError> {
        let row = TagEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(Into::into))
    }

    async fn posts_of(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        let links = PostTagEntity::find()
            .filter(post_tag::Column::TagId.eq(tag_id))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = links.into_iter().map(|l| l.post_id).collect();
        let rows = PostEntity::find()
            .filter(post::Column::Id.is_in(ids))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new: NewTag) -> Result<Tag, RepoError> {
        let model = tag::ActiveModel::from(new)
            .insert(&self.db)
            .await
            .map_err(write_err)?;

        tracing::debug!(tag_id = model.id, "Tag created");
        Ok(model.into())
    }

    async fn update(&self, entity: Tag) -> Result<Tag, RepoError> {
        let model = tag::ActiveModel::from(entity)
            .update(&self.db)
            .await
            .map_err(write_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = TagEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(write_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(tag_id = id, "Tag deleted");
        Ok(())
    }
}

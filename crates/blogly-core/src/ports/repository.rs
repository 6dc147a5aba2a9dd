use async_trait::async_trait;

use crate::domain::{NewPost, NewTag, NewUser, Post, Tag, User};
use crate::error::RepoError;

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, in stable id order.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    async fn find(&self, id: i32) -> Result<Option<User>, RepoError>;

    /// Insert a user and return it with its store-assigned id.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;

    /// Overwrite an existing user's editable fields.
    async fn update(&self, user: User) -> Result<User, RepoError>;

    /// Delete a user; cascades to their posts and those posts' tag links.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Insert and update take the full submitted tag id set; the implementation
/// reconciles the join table inside the same transaction as the row write.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// The most recently created posts, newest first.
    async fn recent(&self, limit: u64) -> Result<Vec<Post>, RepoError>;

    async fn find(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// All posts owned by a user, in stable id order.
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Tags currently associated with a post.
    async fn tags_of(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    /// Insert a post and associate it with the given tags.
    /// Submitted tag ids that do not exist are silently skipped.
    async fn insert(&self, post: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError>;

    /// Overwrite a post's title and content and reconcile its tag set
    /// against `tag_ids` (full replace).
    async fn update(&self, post: Post, tag_ids: &[i32]) -> Result<Post, RepoError>;

    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// All tags, in stable id order.
    async fn list(&self) -> Result<Vec<Tag>, RepoError>;

    async fn find(&self, id: i32) -> Result<Option<Tag>, RepoError>;

    /// Posts currently carrying a tag.
    async fn posts_of(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn insert(&self, tag: NewTag) -> Result<Tag, RepoError>;

    async fn update(&self, tag: Tag) -> Result<Tag, RepoError>;

    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{NewPost, Post, RECENT_POST_LIMIT};
pub use tag::{NewTag, Tag, TagSetDiff, reconcile_tag_sets};
pub use user::{DEFAULT_IMAGE_URL, NewUser, User};

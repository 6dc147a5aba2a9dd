use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of posts shown on the home page.
pub const RECENT_POST_LIMIT: u64 = 5;

/// Post entity - a blog post owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    /// Stamped once at creation, never updated.
    pub created_at: DateTime<Utc>,
}

/// A post about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post, stamping the creation time now.
    pub fn new(user_id: i32, title: String, content: String) -> Self {
        Self {
            user_id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

impl Post {
    /// Human-readable creation date, e.g. "May 1, 2024 9:05 AM".
    pub fn formatted_date(&self) -> String {
        self.created_at.format("%B %-d, %Y %-I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formatted_date_is_month_day_year_time() {
        let post = Post {
            id: 1,
            user_id: 1,
            title: "Hello".into(),
            content: "World".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap(),
        };
        assert_eq!(post.formatted_date(), "May 1, 2024 9:05 AM");
    }

    #[test]
    fn new_post_stamps_creation_time() {
        let before = Utc::now();
        let post = NewPost::new(7, "Title".into(), "Content".into());
        let after = Utc::now();
        assert!(post.created_at >= before && post.created_at <= after);
    }
}

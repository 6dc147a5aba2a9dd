//! Compiled minijinja templates and the view models handed to them.

use minijinja::Environment;
use serde::Serialize;

use blogly_core::domain::{Post, Tag, User};

/// The template set, compiled once at startup from embedded sources.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("home.html", include_str!("../templates/home.html"))?;
        env.add_template("users.html", include_str!("../templates/users.html"))?;
        env.add_template(
            "user_detail.html",
            include_str!("../templates/user_detail.html"),
        )?;
        env.add_template("user_new.html", include_str!("../templates/user_new.html"))?;
        env.add_template(
            "user_edit.html",
            include_str!("../templates/user_edit.html"),
        )?;
        env.add_template(
            "post_detail.html",
            include_str!("../templates/post_detail.html"),
        )?;
        env.add_template("post_new.html", include_str!("../templates/post_new.html"))?;
        env.add_template(
            "post_edit.html",
            include_str!("../templates/post_edit.html"),
        )?;
        env.add_template("tags.html", include_str!("../templates/tags.html"))?;
        env.add_template(
            "tag_detail.html",
            include_str!("../templates/tag_detail.html"),
        )?;
        env.add_template("tag_new.html", include_str!("../templates/tag_new.html"))?;
        env.add_template("tag_edit.html", include_str!("../templates/tag_edit.html"))?;

        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

/// User as the templates see it.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub full_name: String,
    pub image_url: String,
    /// Pre-fill for the edit form; empty when the stored image is the default.
    pub editable_image_url: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        let full_name = user.full_name();
        let editable_image_url = user.editable_image_url().to_string();
        Self {
            id: user.id,
            full_name,
            editable_image_url,
            image_url: user.image_url,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Post as the templates see it, with the creation date pre-formatted.
#[derive(Debug, Serialize)]
pub struct PostView {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        let created_at = post.formatted_date();
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at,
        }
    }
}

/// Tag as the templates see it.
#[derive(Debug, Serialize)]
pub struct TagView {
    pub id: i32,
    pub name: String,
}

impl From<Tag> for TagView {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

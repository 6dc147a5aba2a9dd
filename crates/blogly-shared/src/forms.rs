//! Form DTOs - one struct per HTML form.
//!
//! User and tag forms deserialize directly through `serde`. The post form
//! carries a repeated `tags` field (multi-select), which urlencoded serde
//! cannot express, so it is parsed explicitly from the request body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from explicit form parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),
}

/// The create/edit user form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    /// Blank or absent means "use the default placeholder image".
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The create/edit tag form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagForm {
    pub name: String,
}

/// The create/edit post form, with zero or more `tags` ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tags: Vec<i32>,
}

impl PostForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// `title` and `content` are required; `tags` may repeat and may be
    /// absent. A `tags` value that is not an integer is rejected.
    pub fn from_urlencoded(body: &str) -> Result<Self, FormError> {
        let mut title = None;
        let mut content = None;
        let mut tags = Vec::new();

        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            match key.as_ref() {
                "title" => title = Some(value.into_owned()),
                "content" => content = Some(value.into_owned()),
                "tags" => {
                    let id = value
                        .parse::<i32>()
                        .map_err(|_| FormError::InvalidField("tags"))?;
                    tags.push(id);
                }
                _ => {}
            }
        }

        Ok(Self {
            title: title.ok_or(FormError::MissingField("title"))?,
            content: content.ok_or(FormError::MissingField("content"))?,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_form_parses_repeated_tags() {
        let form = PostForm::from_urlencoded("title=Hi&content=Body&tags=1&tags=3").unwrap();
        assert_eq!(
            form,
            PostForm {
                title: "Hi".into(),
                content: "Body".into(),
                tags: vec![1, 3],
            }
        );
    }

    #[test]
    fn post_form_without_tags_is_valid() {
        let form = PostForm::from_urlencoded("title=Hi&content=Body").unwrap();
        assert!(form.tags.is_empty());
    }

    #[test]
    fn post_form_decodes_percent_escapes() {
        let form = PostForm::from_urlencoded("title=Hello%20World&content=a%26b").unwrap();
        assert_eq!(form.title, "Hello World");
        assert_eq!(form.content, "a&b");
    }

    #[test]
    fn post_form_missing_title_is_rejected() {
        let err = PostForm::from_urlencoded("content=Body").unwrap_err();
        assert_eq!(err, FormError::MissingField("title"));
    }

    #[test]
    fn post_form_non_integer_tag_is_rejected() {
        let err = PostForm::from_urlencoded("title=Hi&content=Body&tags=abc").unwrap_err();
        assert_eq!(err, FormError::InvalidField("tags"));
    }
}

use serde::{Deserialize, Serialize};

/// Placeholder shown for users who never supplied an image URL.
pub const DEFAULT_IMAGE_URL: &str = "https://st3.depositphotos.com/6672868/13701/v/450/depositphotos_137014128-stock-illustration-user-profile-icon.jpg";

/// User entity - owns zero or more posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Never empty; blank input falls back to [`DEFAULT_IMAGE_URL`].
    pub image_url: String,
}

/// A user about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl NewUser {
    /// Create a new user. A missing or blank image URL gets the default placeholder.
    pub fn new(first_name: String, last_name: String, image_url: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
            image_url: User::image_or_default(image_url),
        }
    }
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Substitute the default placeholder for a missing or blank URL.
    pub fn image_or_default(image_url: Option<String>) -> String {
        match image_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_IMAGE_URL.to_owned(),
        }
    }

    /// The image URL as it should appear in an edit form: empty when the
    /// stored value is the placeholder, so users are not shown the default
    /// as if it were their own data.
    pub fn editable_image_url(&self) -> &str {
        if self.image_url == DEFAULT_IMAGE_URL {
            ""
        } else {
            &self.image_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_url_falls_back_to_default() {
        let user = NewUser::new("Ada".into(), "Lovelace".into(), Some("".into()));
        assert_eq!(user.image_url, DEFAULT_IMAGE_URL);

        let user = NewUser::new("Ada".into(), "Lovelace".into(), None);
        assert_eq!(user.image_url, DEFAULT_IMAGE_URL);

        let user = NewUser::new("Ada".into(), "Lovelace".into(), Some("   ".into()));
        assert_eq!(user.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn explicit_image_url_is_kept() {
        let user = NewUser::new(
            "Ada".into(),
            "Lovelace".into(),
            Some("https://example.com/ada.png".into()),
        );
        assert_eq!(user.image_url, "https://example.com/ada.png");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let user = User {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        };
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn default_image_is_hidden_in_edit_forms() {
        let mut user = User {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        };
        assert_eq!(user.editable_image_url(), "");

        user.image_url = "https://example.com/ada.png".into();
        assert_eq!(user.editable_image_url(), "https://example.com/ada.png");
    }
}

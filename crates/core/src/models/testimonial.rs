//! Client testimonial model

use serde::{Deserialize, Serialize};

/// A quoted client review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub avatar: String,
}

impl Testimonial {
    pub fn new(id: u32, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            content: String::new(),
            avatar: String::new(),
        }
    }

    /// Builder pattern: set the quoted text
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builder pattern: set the avatar reference
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }
}

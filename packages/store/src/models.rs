//! # Domain models for posts and the signed-in user
//!
//! Both entities are owned by the backend service. This workspace only reads
//! them or asks the backend to create new posts.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Post`] | A record of the `posts` collection as returned by the backend, carrying the backend-assigned `id`. |
//! | [`NewPost`] | The payload sent when creating a post. |
//! | [`CurrentUser`] | The identity of the signed-in user, as reported by the backend session. |
//!
//! All types are `Serialize + Deserialize` so they travel as JSON between the
//! client and the backend service.

use serde::{Deserialize, Serialize};

/// Name of the collection the page reads and writes.
pub const POSTS: &str = "posts";

/// A post stored in the backend collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Fields of a post that is about to be created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Attach a backend-assigned id.
    pub fn into_post(self, id: String) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
        }
    }
}

/// The signed-in user as reported by the backend session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

impl Post {
    /// Value of a named field, used for client-side ordering.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "title" => Some(&self.title),
            "content" => Some(&self.content),
            _ => None,
        }
    }
}

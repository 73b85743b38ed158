//! Post and user records as served by the REST backend

use serde::{Deserialize, Serialize};

/// A single post. Identity is `id`, assigned by the backend on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    /// Author reference; existence is not enforced
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: i64, user_id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns true if `needle_lowercase` occurs in the title or body, ignoring case.
    ///
    /// The needle must already be lower-cased so callers can hoist the
    /// conversion out of the filtering loop.
    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        self.title.to_lowercase().contains(needle_lowercase)
            || self.body.to_lowercase().contains(needle_lowercase)
    }
}

/// Payload for creating or replacing a post (everything except `id`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl NewPost {
    /// Combines the payload with a backend-assigned id
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            user_id: self.user_id,
            title: self.title,
            body: self.body,
        }
    }
}

impl From<&Post> for NewPost {
    fn from(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}

/// Author record from `/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_wire_format_uses_camel_case() {
        let post = Post::new(1, 7, "Hello", "World");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 7);
        assert!(json.get("user_id").is_none());

        let parsed: Post =
            serde_json::from_str(r#"{"id":3,"userId":2,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(parsed, Post::new(3, 2, "t", "b"));
    }

    #[test]
    fn test_matches_search_is_case_insensitive_over_title_and_body() {
        let post = Post::new(1, 1, "Hello There", "General KENOBI");
        assert!(post.matches_search("hello"));
        assert!(post.matches_search("kenobi"));
        assert!(!post.matches_search("grievous"));
    }

    #[test]
    fn test_user_tolerates_missing_contact_fields() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Leanne Graham","username":"Bret"}"#).unwrap();
        assert_eq!(user.username, "Bret");
        assert!(user.email.is_empty());
    }
}

//! Post form state and validation
//!
//! Errors are computed for every field on every change, but a field's error
//! is only shown once the field has been touched. Submitting touches all
//! fields.

use crate::core::post::{NewPost, Post};
use crate::validators;

/// Form validation errors for individual fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.user_id.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
struct Touched {
    title: bool,
    body: bool,
    user_id: bool,
}

/// Create/edit form for a single post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    /// `Some(id)` when editing an existing post
    pub editing: Option<i64>,
    pub title: String,
    pub body: String,
    pub user_id: Option<i64>,
    /// Set while the create/update request is in flight
    pub submitting: bool,
    touched: Touched,
}

impl PostForm {
    pub fn from_post(post: &Post) -> Self {
        Self {
            editing: Some(post.id),
            title: post.title.clone(),
            body: post.body.clone(),
            user_id: Some(post.user_id),
            submitting: false,
            touched: Touched::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> String {
        match self.editing {
            Some(id) => format!("Edit Post #{id}"),
            None => "New Post".to_string(),
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.touched.title = true;
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
        self.touched.body = true;
    }

    pub fn set_user_id(&mut self, user_id: i64) {
        self.user_id = Some(user_id);
        self.touched.user_id = true;
    }

    pub fn touch_all(&mut self) {
        self.touched = Touched {
            title: true,
            body: true,
            user_id: true,
        };
    }

    /// Errors for every field, touched or not
    pub fn errors(&self) -> FormErrors {
        FormErrors {
            title: validators::validate_title(&self.title).err(),
            body: validators::validate_body(&self.body).err(),
            user_id: validators::validate_user_id(self.user_id.unwrap_or(0)).err(),
        }
    }

    /// Errors for touched fields only
    pub fn visible_errors(&self) -> FormErrors {
        let all = self.errors();
        FormErrors {
            title: all.title.filter(|_| self.touched.title),
            body: all.body.filter(|_| self.touched.body),
            user_id: all.user_id.filter(|_| self.touched.user_id),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// The sanitized payload, or `None` while the form is invalid
    pub fn to_new_post(&self) -> Option<NewPost> {
        if !self.is_valid() {
            return None;
        }
        Some(NewPost {
            user_id: self.user_id?,
            title: validators::sanitize_text(self.title.trim()),
            body: validators::sanitize_text(self.body.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_errors_are_hidden() {
        let form = PostForm::default();
        assert!(!form.is_valid());
        assert!(form.visible_errors().is_empty());
    }

    #[test]
    fn test_touched_field_shows_its_error_only() {
        let mut form = PostForm::default();
        form.set_title("ab".to_string());
        let errors = form.visible_errors();
        assert_eq!(errors.title.as_deref(), Some("1 more character required"));
        assert!(errors.body.is_none());
        assert!(errors.user_id.is_none());
    }

    #[test]
    fn test_touch_all_reveals_every_error() {
        let mut form = PostForm::default();
        form.touch_all();
        let errors = form.visible_errors();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.body.as_deref(), Some("Body is required"));
        assert_eq!(errors.user_id.as_deref(), Some("Please select a valid user"));
    }

    #[test]
    fn test_valid_form_produces_trimmed_payload() {
        let mut form = PostForm::default();
        form.set_title("  Hello world ".to_string());
        form.set_body("A body that is long enough".to_string());
        form.set_user_id(3);
        let payload = form.to_new_post().unwrap();
        assert_eq!(payload.title, "Hello world");
        assert_eq!(payload.user_id, 3);
    }

    #[test]
    fn test_from_post_prefills_and_is_valid() {
        let post = Post::new(7, 2, "Existing title", "Existing body text");
        let form = PostForm::from_post(&post);
        assert!(form.is_editing());
        assert_eq!(form.heading(), "Edit Post #7");
        assert!(form.is_valid());
        assert!(form.visible_errors().is_empty());
    }

    #[test]
    fn test_invalid_form_has_no_payload() {
        let mut form = PostForm::default();
        form.set_title("Valid title".to_string());
        form.set_user_id(1);
        assert!(form.to_new_post().is_none());
    }
}

use thiserror::Error;

/// Core error types for Postboard
#[derive(Debug, Error)]
pub enum Error {
    /// Request could not be sent or the response body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input validation failed
    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },
}

impl Error {
    /// Short message attached to view state and toasts
    pub fn user_message(&self) -> String {
        self.translate().user_message
    }

    /// Maps the error to a user-facing explanation
    pub fn translate(&self) -> ErrorTranslation {
        match self {
            Self::Status { status: 404, url, .. } if is_users_url(url) => {
                ErrorTranslation::new("User not found")
                    .with_suggestion("Check the user id; the API knows users 1 to 10")
            }
            Self::Status { status: 404, .. } => ErrorTranslation::new("Post not found")
                .with_suggestion("It may have been deleted already")
                .with_suggestion("Reload the list to refresh your view"),
            Self::Status { status, .. } if *status >= 500 => {
                ErrorTranslation::new(format!("Server error ({status})"))
                    .with_suggestion("The API is having trouble, try again shortly")
            }
            Self::Status { status, .. } => {
                ErrorTranslation::new(format!("Request rejected ({status})"))
                    .with_suggestion("Check the post fields and try again")
            }
            Self::Http(e) if e.is_timeout() => ErrorTranslation::new("Request timed out")
                .with_suggestion("Check your network connection")
                .with_suggestion("Try again when the API is reachable"),
            Self::Http(e) if e.is_connect() => ErrorTranslation::new("Could not reach the API")
                .with_suggestion("Check your network connection")
                .with_suggestion("Verify the API base URL in settings or POSTBOARD_API_URL"),
            Self::Http(e) if e.is_decode() => {
                ErrorTranslation::new("Unexpected response from the API")
                    .with_suggestion("Verify the API base URL points at a posts service")
            }
            Self::Http(_) => ErrorTranslation::new("Network request failed")
                .with_suggestion("Check your network connection"),
            Self::Validation { message, .. } => ErrorTranslation::new(message.clone()),
            other => ErrorTranslation::new(other.to_string()),
        }
    }
}

/// True for `/users` and `/users/{id}`
fn is_users_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .find(|segment| segment.parse::<i64>().is_err())
        == Some("users")
}

/// Represents a translated error with helpful context
#[derive(Debug, Clone)]
pub struct ErrorTranslation {
    pub user_message: String,
    pub suggestions: Vec<String>,
}

impl ErrorTranslation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            user_message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> Error {
        Error::Status {
            method: "GET",
            url: "https://example.test/posts/1".to_string(),
            status,
        }
    }

    #[test]
    fn test_not_found_translation() {
        let translation = status(404).translate();
        assert_eq!(translation.user_message, "Post not found");
        assert!(!translation.suggestions.is_empty());
    }

    #[test]
    fn test_missing_user_is_not_reported_as_post() {
        let missing = |url: &str| Error::Status {
            method: "GET",
            url: url.to_string(),
            status: 404,
        };
        assert_eq!(
            missing("https://example.test/users/42").user_message(),
            "User not found"
        );
        assert_eq!(
            missing("https://example.test/users").user_message(),
            "User not found"
        );
        assert_eq!(
            missing("https://users.example.test/posts/7").user_message(),
            "Post not found"
        );
    }

    #[test]
    fn test_server_error_translation() {
        assert_eq!(status(503).user_message(), "Server error (503)");
    }

    #[test]
    fn test_client_error_translation() {
        assert_eq!(status(422).user_message(), "Request rejected (422)");
    }

    #[test]
    fn test_status_display_includes_request() {
        assert_eq!(
            status(500).to_string(),
            "GET https://example.test/posts/1 returned 500"
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = Error::Validation {
            field: "title".to_string(),
            message: "Title is required".to_string(),
        };
        assert_eq!(err.user_message(), "Title is required");
    }
}

//! Input validation and sanitization for the post form
//!
//! The GUI form and the CLI `create`/`update` subcommands share these rules:
//! a title of at least 3 characters, a body of at least 10, and a positive
//! user id.

/// Minimum title length in characters (after trimming)
pub const TITLE_MIN_LEN: usize = 3;

/// Minimum body length in characters (after trimming)
pub const BODY_MIN_LEN: usize = 10;

/// Removes control characters, keeping newlines and tabs.
///
/// # Examples
///
/// ```
/// use postboard::validators::sanitize_text;
///
/// assert_eq!(sanitize_text("Hello\u{0007} world"), "Hello world");
/// assert_eq!(sanitize_text("line one\nline two"), "line one\nline two");
/// ```
pub fn sanitize_text(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

/// "2 more characters required"
pub fn min_length_message(required: usize, actual: usize) -> String {
    let remaining = required.saturating_sub(actual);
    let plural = if remaining == 1 { "" } else { "s" };
    format!("{remaining} more character{plural} required")
}

fn validate_min_length(field: &str, input: &str, min: usize) -> Result<(), String> {
    let len = input.trim().chars().count();
    if len == 0 {
        return Err(format!("{field} is required"));
    }
    if len < min {
        return Err(min_length_message(min, len));
    }
    Ok(())
}

/// Validates a post title.
///
/// # Errors
///
/// Returns `Err` if the title is blank or shorter than [`TITLE_MIN_LEN`].
pub fn validate_title(input: &str) -> Result<(), String> {
    validate_min_length("Title", input, TITLE_MIN_LEN)
}

/// Validates a post body.
///
/// # Errors
///
/// Returns `Err` if the body is blank or shorter than [`BODY_MIN_LEN`].
pub fn validate_body(input: &str) -> Result<(), String> {
    validate_min_length("Body", input, BODY_MIN_LEN)
}

/// Validates the author id.
///
/// # Errors
///
/// Returns `Err` if the id is not positive.
pub fn validate_user_id(user_id: i64) -> Result<(), String> {
    if user_id < 1 {
        return Err("Please select a valid user".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_required() {
        assert_eq!(validate_title(""), Err("Title is required".to_string()));
        assert_eq!(validate_title("   "), Err("Title is required".to_string()));
    }

    #[test]
    fn test_title_min_length_message() {
        assert_eq!(
            validate_title("ab"),
            Err("1 more character required".to_string())
        );
        assert!(validate_title("abc").is_ok());
    }

    #[test]
    fn test_body_min_length_message() {
        assert_eq!(
            validate_body("short"),
            Err("5 more characters required".to_string())
        );
        assert!(validate_body("long enough").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count() {
        assert_eq!(
            validate_title("  ab  "),
            Err("1 more character required".to_string())
        );
        assert_eq!(
            validate_body("   123456789   "),
            Err("1 more character required".to_string())
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Three multi-byte characters
        assert!(validate_title("äöü").is_ok());
    }

    #[test]
    fn test_user_id_must_be_positive() {
        assert!(validate_user_id(1).is_ok());
        assert_eq!(
            validate_user_id(0),
            Err("Please select a valid user".to_string())
        );
    }

    #[test]
    fn test_sanitize_text_strips_controls() {
        assert_eq!(sanitize_text("a\u{0000}b\rc\td"), "abc\td");
    }
}

//! Utility functions for directory management and display helpers
//!
//! Directories follow the XDG Base Directory specification.
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/postboard/` - Configuration (`config.json`)
//! - State: `~/.local/state/postboard/` - Application log and event log
//!
//! # Example
//!
//! ```
//! use postboard::utils::{get_data_dir, ensure_dirs};
//!
//! // Ensure directories exist before use
//! ensure_dirs().expect("Failed to create directories");
//!
//! if let Some(data_path) = get_data_dir() {
//!     // Load configuration from data_path
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "postboard", "postboard")
}

pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

/// Falls back to the data directory on platforms without a state dir
pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| {
        pd.state_dir()
            .unwrap_or_else(|| pd.data_dir())
            .to_path_buf()
    })
}

pub fn ensure_dirs() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        if let Some(dir) = get_data_dir() {
            builder.create(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        if let Some(dir) = get_data_dir() {
            std::fs::create_dir_all(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}

/// Truncates a string to at most `max_chars` characters, ending in "..." when cut
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Collapses newlines and runs of whitespace so multi-line bodies fit a table row
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_string("ääääää", 5), "ää...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("quia et\nsuscipit\n  recusandae"), "quia et suscipit recusandae");
    }
}

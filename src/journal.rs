//! Event journal for post store operations
//!
//! Every accepted store operation is recorded as a [`JournalEntry`]. The
//! store keeps the most recent entries in memory; when event logging is
//! enabled in the config they are also appended to a JSON-lines file in the
//! state directory.
use crate::core::query::{FilterParams, SortSpec};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Number of entries retained in memory
pub const JOURNAL_CAPACITY: usize = 200;

/// Network operations the store tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Fallback message when a request fails without a better explanation
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load posts",
            Self::Create => "Failed to create post",
            Self::Update => "Failed to update post",
            Self::Delete => "Failed to delete post",
        }
    }
}

/// What happened to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    Started { op: Operation },
    Loaded { count: usize },
    Created { id: i64 },
    Updated { id: i64 },
    Deleted { id: i64 },
    Failed { op: Operation, message: String },
    FiltersChanged { filters: FilterParams },
    PageChanged { page: usize },
    LimitChanged { limit: usize },
    SortChanged { sort: Option<SortSpec> },
}

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the event occurred (UTC)
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub event: StoreEvent,
}

impl JournalEntry {
    pub fn new(event: StoreEvent) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            event,
        }
    }
}

/// Bounded in-memory journal, oldest entries evicted first
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
}

impl Journal {
    pub fn record(&mut self, event: StoreEvent) -> &JournalEntry {
        if self.entries.len() == JOURNAL_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(JournalEntry::new(event));
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.back()
    }

    /// Entries in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }
}

/// Append-only JSON-lines event log on disk
pub struct EventLog {
    log_path: PathBuf,
}

impl EventLog {
    /// Opens the event log in the state directory
    ///
    /// # Errors
    ///
    /// Returns `Err` if state directory cannot be determined
    pub fn new() -> std::io::Result<Self> {
        let mut log_path = crate::utils::get_state_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "State directory not found")
        })?;
        log_path.push("events.log");
        Ok(Self { log_path })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: path.into(),
        }
    }

    /// Appends one entry as a JSON line
    pub async fn append(&self, entry: &JournalEntry) -> crate::Result<()> {
        let json = serde_json::to_string(entry)?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;

        Ok(())
    }

    /// Reads up to `count` entries, newest first. Malformed lines are skipped.
    pub async fn read_recent(&self, count: usize) -> crate::Result<Vec<JournalEntry>> {
        let content = tokio::fs::read_to_string(&self.log_path).await?;

        Ok(content
            .lines()
            .rev()
            .filter_map(|line| serde_json::from_str(line).ok())
            .take(count)
            .collect())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

/// Persists entries if event logging is enabled, logging failures instead of
/// propagating them
pub async fn persist(enabled: bool, entries: Vec<JournalEntry>) {
    if !enabled || entries.is_empty() {
        return;
    }
    match EventLog::new() {
        Ok(log) => {
            for entry in &entries {
                if let Err(e) = log.append(entry).await {
                    tracing::warn!("Failed to write event log: {}", e);
                    break;
                }
            }
        }
        Err(e) => tracing::warn!("Event log unavailable: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_is_bounded() {
        let mut journal = Journal::default();
        for page in 0..JOURNAL_CAPACITY + 10 {
            journal.record(StoreEvent::PageChanged { page });
        }
        assert_eq!(journal.len(), JOURNAL_CAPACITY);
        assert_eq!(
            journal.iter().next().map(|e| &e.event),
            Some(&StoreEvent::PageChanged { page: 10 })
        );
    }

    #[test]
    fn test_event_serialization() {
        let entry = JournalEntry::new(StoreEvent::Failed {
            op: Operation::Delete,
            message: "Post not found".to_string(),
        });
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""type":"failed""#));
        assert!(json.contains(r#""op":"delete""#));
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"timestamp":"2024-01-01T00:00:00Z","event":{"type":"created","id":101}}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.event, StoreEvent::Created { id: 101 });
    }

    #[tokio::test]
    async fn test_event_log_round_trip_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let log = EventLog::at(dir.path().join("events.log"));

        log.append(&JournalEntry::new(StoreEvent::Loaded { count: 100 }))
            .await
            .unwrap();
        log.append(&JournalEntry::new(StoreEvent::Deleted { id: 3 }))
            .await
            .unwrap();

        let recent = log.read_recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].event, StoreEvent::Deleted { id: 3 });

        let newest = log.read_recent(1).await.unwrap();
        assert_eq!(newest.len(), 1);
    }

    #[tokio::test]
    async fn test_append_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = EventLog::at(dir.path().join("missing").join("events.log"));
        let err = log
            .append(&JournalEntry::new(StoreEvent::Loaded { count: 1 }))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}

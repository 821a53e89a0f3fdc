//! Transcript persistence — the CLI's chat history.
//!
//! File format: JSONL in `~/.promptbuddy/history/{safe_name}.jsonl`
//! - Line 1: `{"_type":"metadata","created_at":"..."}`
//! - Line 2+: `{"role":"user","text":"hello","timestamp":"..."}`
//!
//! Files are append-only; `clear` rewrites the file with a fresh metadata
//! line. Corrupt lines are skipped with a warning rather than failing the
//! whole load.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::utils;

// ─────────────────────────────────────────────
// Entries
// ─────────────────────────────────────────────

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One line of the transcript: a prompt the user sent or an enhanced
/// prompt that came back.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        TranscriptEntry {
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        TranscriptEntry {
            role: Role::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Metadata header written as the first line of each JSONL file.
#[derive(Debug, Serialize, Deserialize)]
struct TranscriptMetadata {
    #[serde(rename = "_type")]
    record_type: String,
    created_at: DateTime<Utc>,
}

impl TranscriptMetadata {
    fn new() -> Self {
        TranscriptMetadata {
            record_type: "metadata".to_string(),
            created_at: Utc::now(),
        }
    }
}

// ─────────────────────────────────────────────
// TranscriptStore
// ─────────────────────────────────────────────

/// Reads and writes named transcripts as JSONL files.
pub struct TranscriptStore {
    /// Directory where `.jsonl` transcript files are stored.
    history_dir: PathBuf,
}

impl TranscriptStore {
    /// Create a new store.
    ///
    /// `history_dir` defaults to `~/.promptbuddy/history/` if `None`.
    /// The directory is created if it doesn't exist.
    pub fn new(history_dir: Option<PathBuf>) -> std::io::Result<Self> {
        let dir = history_dir.unwrap_or_else(utils::get_history_path);
        std::fs::create_dir_all(&dir)?;
        Ok(TranscriptStore { history_dir: dir })
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.history_dir
            .join(format!("{}.jsonl", utils::safe_filename(name)))
    }

    /// Append an entry, creating the file (with its metadata header) on
    /// first write.
    pub fn append(&self, name: &str, entry: &TranscriptEntry) -> std::io::Result<()> {
        let path = self.file_path(name);
        let is_new = !path.exists();

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        if is_new {
            let meta = serde_json::to_string(&TranscriptMetadata::new())
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(file, "{}", meta)?;
        }

        let line = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(file, "{}", line)?;

        debug!(transcript = name, "appended transcript entry");
        Ok(())
    }

    /// Load the last `max_entries` entries of a transcript.
    ///
    /// Missing files yield an empty list; unreadable lines are skipped.
    pub fn load(&self, name: &str, max_entries: usize) -> Vec<TranscriptEntry> {
        let path = self.file_path(name);
        let file = match std::fs::File::open(&path) {
            Ok(f) => f,
            Err(_) => return Vec::new(),
        };

        let mut entries = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!("Failed to read transcript line: {}", e);
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<TranscriptEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    // The metadata header is expected to fail entry parsing.
                    if serde_json::from_str::<TranscriptMetadata>(&line).is_err() {
                        warn!("Skipping corrupt transcript line {}: {}", idx + 1, e);
                    }
                }
            }
        }

        let len = entries.len();
        if len > max_entries {
            entries.split_off(len - max_entries)
        } else {
            entries
        }
    }

    /// Reset a transcript to empty (fresh metadata header, no entries).
    pub fn clear(&self, name: &str) -> std::io::Result<()> {
        let path = self.file_path(name);
        let meta = serde_json::to_string(&TranscriptMetadata::new())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&path, format!("{}\n", meta))
    }

    /// Delete a transcript file entirely. Returns `true` if it existed.
    pub fn delete(&self, name: &str) -> bool {
        let path = self.file_path(name);
        if path.exists() {
            std::fs::remove_file(&path).is_ok()
        } else {
            false
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TranscriptStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(Some(dir.path().to_path_buf())).unwrap();
        (dir, store)
    }

    #[test]
    fn append_and_load() {
        let (_dir, store) = temp_store();

        store.append("cli", &TranscriptEntry::user("draw a cat")).unwrap();
        store
            .append("cli", &TranscriptEntry::assistant("A detailed cat prompt"))
            .unwrap();

        let entries = store.load("cli", 10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[0].text, "draw a cat");
        assert_eq!(entries[1].role, Role::Assistant);
    }

    #[test]
    fn load_missing_transcript_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load("nope", 10).is_empty());
    }

    #[test]
    fn load_tails_to_max_entries() {
        let (_dir, store) = temp_store();
        for i in 0..5 {
            store
                .append("cli", &TranscriptEntry::user(format!("prompt {i}")))
                .unwrap();
        }

        let entries = store.load("cli", 2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "prompt 3");
        assert_eq!(entries[1].text, "prompt 4");
    }

    #[test]
    fn first_line_is_metadata() {
        let (dir, store) = temp_store();
        store.append("cli", &TranscriptEntry::user("hi")).unwrap();

        let content = std::fs::read_to_string(dir.path().join("cli.jsonl")).unwrap();
        let first = content.lines().next().unwrap();
        let meta: serde_json::Value = serde_json::from_str(first).unwrap();
        assert_eq!(meta["_type"], "metadata");
    }

    #[test]
    fn clear_resets_to_empty() {
        let (_dir, store) = temp_store();
        store.append("cli", &TranscriptEntry::user("hi")).unwrap();
        store.clear("cli").unwrap();

        assert!(store.load("cli", 10).is_empty());
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let (dir, store) = temp_store();
        store.append("cli", &TranscriptEntry::user("good")).unwrap();

        let path = dir.path().join("cli.jsonl");
        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str("this is not json\n");
        std::fs::write(&path, content).unwrap();
        store.append("cli", &TranscriptEntry::user("also good")).unwrap();

        let entries = store.load("cli", 10);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn delete_removes_file() {
        let (_dir, store) = temp_store();
        store.append("cli", &TranscriptEntry::user("hi")).unwrap();

        assert!(store.delete("cli"));
        assert!(!store.delete("cli"));
        assert!(store.load("cli", 10).is_empty());
    }

    #[test]
    fn names_are_sanitized() {
        let (dir, store) = temp_store();
        store
            .append("cli:default", &TranscriptEntry::user("hi"))
            .unwrap();
        assert!(dir.path().join("cli_default.jsonl").exists());
    }
}

//! # Line Store Backends
//!
//! The storage capability underneath every table: an ordered list of text
//! lines that can be read whole, appended to, or replaced.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     LineStore implementations                           │
//! │                                                                         │
//! │  FileLineStore                       MemoryLineStore                    │
//! │  ─────────────                       ───────────────                    │
//! │  • open → operate → close per call   • Mutex<Vec<String>>               │
//! │  • missing file = no lines           • starts empty (or preloaded)      │
//! │  • append: O_APPEND, one write       • used for tests and --memory      │
//! │  • rewrite: temp file + rename                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither backend locks across processes. Two programs appending to the
//! same file may interleave lines.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Ordered text lines, one record per line, no terminators.
pub trait LineStore: fmt::Debug + Send + Sync {
    /// Human-readable location for log messages.
    fn location(&self) -> String;

    /// Returns every stored line in order. A store that was never written
    /// to yields an empty list.
    fn read_lines(&self) -> StoreResult<Vec<String>>;

    /// Adds one line at the end.
    fn append_line(&self, line: &str) -> StoreResult<()>;

    /// Replaces all content with `lines`.
    fn rewrite_lines(&self, lines: &[String]) -> StoreResult<()>;
}

// =============================================================================
// File Backend
// =============================================================================

/// A line store backed by a single text file.
#[derive(Debug, Clone)]
pub struct FileLineStore {
    path: PathBuf,
}

impl FileLineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLineStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl LineStore for FileLineStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> StoreResult<Vec<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Table file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        // Bytes, not `lines()`: a line with invalid UTF-8 must not abort the
        // whole load, so it is decoded lossily and left to the codec.
        let mut lines = Vec::new();
        for chunk in BufReader::new(file).split(b'\n') {
            let bytes = chunk.map_err(|e| StoreError::io(&self.path, e))?;
            lines.push(String::from_utf8_lossy(&bytes).into_owned());
        }

        Ok(lines)
    }

    fn append_line(&self, line: &str) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;

        file.write_all(format!("{}\n", line).as_bytes())
            .map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }

    fn rewrite_lines(&self, lines: &[String]) -> StoreResult<()> {
        let temp = self.temp_path();

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        fs::write(&temp, content).map_err(|e| StoreError::io(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// A line store kept in process memory. Content is lost on exit.
#[derive(Debug, Default)]
pub struct MemoryLineStore {
    name: String,
    lines: Mutex<Vec<String>>,
}

impl MemoryLineStore {
    pub fn new(name: impl Into<String>) -> Self {
        MemoryLineStore {
            name: name.into(),
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store that already holds `lines`, malformed ones included.
    pub fn with_lines<I, L>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        MemoryLineStore {
            name: name.into(),
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    fn with_guard<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<String>) -> R,
    {
        let mut lines = self.lines.lock().expect("memory line store mutex poisoned");
        f(&mut lines)
    }
}

impl LineStore for MemoryLineStore {
    fn location(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn read_lines(&self) -> StoreResult<Vec<String>> {
        Ok(self.with_guard(|lines| lines.clone()))
    }

    fn append_line(&self, line: &str) -> StoreResult<()> {
        self.with_guard(|lines| lines.push(line.to_string()));
        Ok(())
    }

    fn rewrite_lines(&self, new_lines: &[String]) -> StoreResult<()> {
        self.with_guard(|lines| *lines = new_lines.to_vec());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileLineStore::new(dir.path().join("inv.csv"));
        assert!(store.read_lines().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_and_terminates_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.csv");
        let store = FileLineStore::new(&path);

        store.append_line("first").unwrap();
        store.append_line("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(store.read_lines().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_rewrite_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employee_details.csv");
        let store = FileLineStore::new(&path);

        store.append_line("a").unwrap();
        store.append_line("b").unwrap();
        store.rewrite_lines(&["c".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "c\n");
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_invalid_utf8_line_is_kept_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inv.csv");
        fs::write(&path, b"Rice,1,1.00\n\xff\xfe\nTea,2,0.50\n").unwrap();

        let lines = FileLineStore::new(&path).read_lines().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Rice,1,1.00");
        assert_eq!(lines[2], "Tea,2,0.50");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = FileLineStore::new(dir.path().join("nope").join("inv.csv"));
        let err = store.append_line("Rice,1,1.00").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryLineStore::with_lines("inv", ["x", "y"]);
        store.append_line("z").unwrap();
        assert_eq!(store.read_lines().unwrap(), vec!["x", "y", "z"]);

        store.rewrite_lines(&[]).unwrap();
        assert!(store.read_lines().unwrap().is_empty());
        assert_eq!(store.location(), "memory:inv");
    }
}

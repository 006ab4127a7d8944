//! Session persistence.

use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::SessionSnapshot;

/// Name of the session file inside the data directory.
const SESSION_FILE: &str = "session.json";

/// Errors that can occur while persisting the session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete a file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize session: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Loads and saves the session as a single JSON file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file.
    ///
    /// Nothing is touched on disk until the first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default session file location.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/tripcost/session.json`
    /// - macOS: `~/Library/Application Support/tripcost/session.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\tripcost\data\session.json`
    ///
    /// Falls back to `~/.tripcost/session.json` if the platform-specific
    /// location cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "tripcost")
            .map_or_else(dirs_fallback, |proj_dirs| proj_dirs.data_dir().to_path_buf())
            .join(SESSION_FILE)
    }

    /// Creates a store at the default location.
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Returns the session file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session.
    ///
    /// Returns `None` if nothing was saved yet. A file that cannot be parsed
    /// is logged and treated as absent, so a corrupt session never blocks the
    /// estimator.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(&self) -> Result<Option<SessionSnapshot>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::ReadFile {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                Ok(None)
            }
        }
    }

    /// Writes the session, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SessionError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json).map_err(|e| SessionError::WriteFile {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), "saved session");
        Ok(())
    }

    /// Deletes the stored session. Deleting a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be deleted.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::DeleteFile {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_default_path()
    }
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".tripcost")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Session;
    use tempfile::TempDir;
    use tripcost_estimate::Estimator;
    use tripcost_types::{Currency, Destination, TripConfiguration};

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("nested").join("session.json"));

        let config = TripConfiguration::new(Destination::AbuDhabi);
        let estimate = Estimator::global().estimate(&config).unwrap();
        let mut session = Session::new();
        session.record_search(config, &estimate);
        session.save_trip(config, estimate);
        session.set_currency(Currency::Inr);
        session.set_dark_mode(true);

        store.save(session.snapshot()).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(&loaded, session.snapshot());
    }

    #[test]
    fn test_corrupt_file_is_discarded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::new(&path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_web_client_file_keeps_dark_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"recentSearches":[{"destination":"dubai","days":5,"travelers":2,"timestamp":"2024-06-01T10:00:00.000Z"}],"savedTrips":[],"darkMode":true}"#,
        )
        .unwrap();

        let loaded = SessionStore::new(&path).load().unwrap().unwrap();
        assert!(loaded.dark_mode);
        assert!(loaded.recent_searches.is_empty());
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));

        store.save(&SessionSnapshot::default()).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_default_path_ends_with_session_file() {
        let path = SessionStore::default_path();
        assert!(path.ends_with("session.json"));
        assert!(path.to_string_lossy().contains("tripcost"));
    }
}

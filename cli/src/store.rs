//! JSON-file session store.
//!
//! The CLI has no browser tab to scope a session to, so the session lives in
//! one small JSON object on disk. The file is rewritten on every change and
//! removed once the session is cleared.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use todo_api::SessionStore;

use crate::error::CliError;

pub struct FileSessionStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Load the store at `path`; a missing file is an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadFile`] on IO failure and
    /// [`CliError::CorruptSession`] if the file is not a JSON string map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|source| CliError::CorruptSession { path: path.clone(), source })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(CliError::ReadFile { path, source }),
        };
        Ok(Self { path, entries: RefCell::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let entries = self.entries.borrow();
        let result = if entries.is_empty() {
            match std::fs::remove_file(&self.path) {
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            }
        } else {
            serde_json::to_string_pretty(&*entries)
                .map_err(io::Error::other)
                .and_then(|raw| write_private(&self.path, raw.as_bytes()))
        };
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist session");
        }
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    std::fs::write(path, contents)
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.persist();
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.persist();
    }
}

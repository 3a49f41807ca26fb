use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use watch_core::ChatId;

use crate::PersistError;

/// Append-only subscriber list, one chat id per line.
///
/// Every read and write of the file goes through this type.
#[derive(Debug, Clone)]
pub struct SubscriberStore {
    path: PathBuf,
}

impl SubscriberStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty file (and its directory) if absent.
    pub fn ensure_exists(&self) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(())
    }

    /// Current subscribers in file order. A missing file means nobody yet.
    pub fn list_all(&self) -> Result<Vec<ChatId>, PersistError> {
        Ok(parse_ids(&self.read_raw()?))
    }

    /// Appends the ids not already stored and returns exactly those.
    pub fn add<I>(&self, ids: I) -> Result<Vec<ChatId>, PersistError>
    where
        I: IntoIterator<Item = ChatId>,
    {
        let raw = self.read_raw()?;
        let mut known: HashSet<ChatId> = parse_ids(&raw).into_iter().collect();
        let fresh: Vec<ChatId> = ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty() && known.insert(id.clone()))
            .collect();
        if fresh.is_empty() {
            return Ok(fresh);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // A hand-edited file may lack the final newline.
        if !raw.is_empty() && !raw.ends_with('\n') {
            writeln!(file)?;
        }
        for id in &fresh {
            writeln!(file, "{id}")?;
        }
        file.flush()?;
        Ok(fresh)
    }

    fn read_raw(&self) -> Result<String, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }
}

fn parse_ids(raw: &str) -> Vec<ChatId> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

//! Day-keyed disk cache for the raw feed document.
//!
//! One file per calendar date, named with a fixed prefix plus the ISO date,
//! holding the document text verbatim. Entries are written wholesale and
//! never partially; concurrent runs may both write the same day's file and
//! the last writer wins, which is harmless because the content is identical.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, warn};

const FILE_PREFIX: &str = "fxc-rates-";

/// Stores one raw feed document per calendar day.
pub struct FeedCache {
    dir: PathBuf,
}

impl FeedCache {
    pub fn new(dir: PathBuf) -> Self {
        FeedCache { dir }
    }

    /// Path of the cache entry for `date`.
    pub fn entry_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{date}"))
    }

    /// Returns the cached document for `date` verbatim, if one exists.
    pub fn load(&self, date: NaiveDate) -> Option<String> {
        let path = self.entry_path(date);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!("Cache HIT for {}", path.display());
                Some(text)
            }
            Err(_) => {
                debug!("Cache MISS for {}", path.display());
                None
            }
        }
    }

    /// Writes the document for `date` wholesale.
    ///
    /// Callers persist only documents that already passed extraction, so a
    /// corrupt or partial response never lands in the cache.
    pub fn store(&self, date: NaiveDate, text: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(date), text)
    }

    /// Removes dated entries other than the one for `today`.
    ///
    /// Only files carrying the cache prefix are considered; anything else in
    /// the directory is left alone.
    pub fn prune_stale(&self, today: NaiveDate) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };
        let keep = self.entry_path(today);

        for entry in entries.flatten() {
            let path = entry.path();
            if path == keep {
                continue;
            }
            let is_cache_entry = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(FILE_PREFIX));
            if !is_cache_entry {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => debug!("Removed stale cache entry {}", path.display()),
                Err(e) => warn!("Could not remove stale cache entry {}: {e}", path.display()),
            }
        }
    }
}

//! Stop directory.
//!
//! A static lookup table loaded once at startup from the bundled stop
//! asset. Each entry pairs a stop with one allowed successor and the
//! coordinates of the stop, so a stop with several successors appears
//! once per successor. The directory is read-only for the process
//! lifetime; there is no reload.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// Error loading the stop asset.
#[derive(Debug, thiserror::Error)]
pub enum StopDirectoryError {
    /// Asset file could not be read
    #[error("failed to read stop asset: {0}")]
    Io(#[from] std::io::Error),

    /// Asset file is not valid JSON
    #[error("failed to parse stop asset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One row of the stop asset.
///
/// `x` is the longitude and `y` the latitude, both decimal strings.
/// Coordinates are carried verbatim into records, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopEntry {
    /// Stop name.
    pub name: String,
    /// Name of an allowed next stop.
    pub moveto: String,
    /// Longitude, decimal string.
    pub x: String,
    /// Latitude, decimal string.
    pub y: String,
}

/// The loaded stop directory.
#[derive(Debug, Clone, Default)]
pub struct StopDirectory {
    entries: Vec<StopEntry>,
}

impl StopDirectory {
    /// Load the directory from a JSON asset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StopDirectoryError> {
        let text = std::fs::read_to_string(path)?;
        let entries: Vec<StopEntry> = serde_json::from_str(&text)?;
        Ok(Self { entries })
    }

    /// Load the directory, degrading to an empty one on any failure.
    ///
    /// A missing or corrupt asset only happens on a broken install; the
    /// caller sees no suggestions and zero-coordinate fallback rather
    /// than an error.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(dir) => dir,
            Err(e) => {
                debug!("stop asset unavailable, using empty directory: {e}");
                Self::default()
            }
        }
    }

    /// Build a directory from entries directly (tests, fixtures).
    pub fn from_entries(entries: Vec<StopEntry>) -> Self {
        Self { entries }
    }

    /// Stop names in order of first appearance, deduplicated.
    ///
    /// These are the current-stop choices offered by the entry form.
    pub fn distinct_stop_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !names.iter().any(|n| n == &entry.name) {
                names.push(entry.name.clone());
            }
        }
        names
    }

    /// Allowed successors of `stop_name`, deduplicated.
    ///
    /// Empty for a name not present in the directory.
    pub fn next_stops_for(&self, stop_name: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in self.entries.iter().filter(|e| e.name == stop_name) {
            if !names.iter().any(|n| n == &entry.moveto) {
                names.push(entry.moveto.clone());
            }
        }
        names
    }

    /// Find the entry for a (current, next) stop pair.
    ///
    /// Falls back to the first entry with a matching current-stop name
    /// when the exact pair is absent. `None` means the caller must
    /// treat the coordinates as unknown.
    pub fn lookup(&self, current_stop: &str, next_stop: &str) -> Option<&StopEntry> {
        self.entries
            .iter()
            .find(|e| e.name == current_stop && e.moveto == next_stop)
            .or_else(|| self.entries.iter().find(|e| e.name == current_stop))
    }

    /// Number of entries (successor pairs, not distinct stops).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

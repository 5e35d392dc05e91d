//! User preferences and the key/value stores that persist them.
//!
//! The engine owns one `Preferences` value and writes every change through a
//! `PreferenceStore`. Reading never fails: a missing or unreadable value means
//! "use the default".

use crate::common::{Language, Track};
use crate::error::PreferenceError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

pub const TRACK_KEY: &str = "ssc_companion_group";
pub const LANGUAGE_KEY: &str = "ssc_companion_lang";
pub const THEME_KEY: &str = "ssc_companion_theme";

/// A string key/value store that survives across sessions.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// The three user choices: track, language, and dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub track: Track,
    pub language: Language,
    pub dark: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            track: Track::Science,
            language: Language::En,
            dark: true,
        }
    }
}

impl Preferences {
    /// Reads all three values, substituting the default for anything missing or corrupt.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            track: read_or_default(store, TRACK_KEY, defaults.track, |raw| raw.parse().ok()),
            language: read_or_default(store, LANGUAGE_KEY, defaults.language, |raw| {
                raw.parse().ok()
            }),
            dark: read_or_default(store, THEME_KEY, defaults.dark, |raw| raw.parse().ok()),
        }
    }

    /// Writes all three values.
    pub fn save(&self, store: &dyn PreferenceStore) -> Result<(), PreferenceError> {
        store.set(TRACK_KEY, self.track.as_str())?;
        store.set(LANGUAGE_KEY, self.language.as_str())?;
        store.set(THEME_KEY, if self.dark { "true" } else { "false" })?;
        Ok(())
    }
}

fn read_or_default<T: std::fmt::Debug>(
    store: &dyn PreferenceStore,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    match store.get(key) {
        None => default,
        Some(raw) => parse(&raw).unwrap_or_else(|| {
            warn!("Ignoring corrupt preference {}={:?}; using {:?}.", key, raw, default);
            default
        }),
    }
}

/// Picks the backend for an optional preference file path.
pub fn open_store(path: Option<&Path>) -> Arc<dyn PreferenceStore> {
    match path {
        Some(path) => {
            debug!("Persisting preferences to {}.", path.display());
            Arc::new(FileStore::open(path))
        }
        None => Arc::new(MemoryStore::new()),
    }
}

/// Keeps preferences for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persists preferences as a flat JSON object of strings.
///
/// A missing or unparseable file reads as empty; the next `set` rewrites it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let encoded = serde_json::to_string_pretty(entries)?;
        let io_err = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, encoded).map_err(io_err)
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("No preference file at {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!("Preference file {} is corrupt ({}); starting empty.", path.display(), e);
        BTreeMap::new()
    })
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_yields_defaults() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.track, Track::Science);
        assert_eq!(prefs.language, Language::En);
        assert!(prefs.dark);
    }

    #[test]
    fn corrupt_values_fall_back_individually() {
        let store = MemoryStore::new();
        store.set(TRACK_KEY, "astrology").unwrap();
        store.set(LANGUAGE_KEY, "bn").unwrap();
        store.set(THEME_KEY, "maybe").unwrap();
        let prefs = Preferences::load(&store);
        assert_eq!(
            prefs,
            Preferences {
                track: Track::Science,
                language: Language::Bn,
                dark: true,
            }
        );
    }

    #[test]
    fn save_then_load_restores_choices() {
        let store = MemoryStore::new();
        let prefs = Preferences {
            track: Track::Arts,
            language: Language::Bn,
            dark: false,
        };
        prefs.save(&store).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("false"));
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        {
            let store = FileStore::open(&path);
            store.set(TRACK_KEY, "commerce").unwrap();
        }
        let store = FileStore::open(&path);
        assert_eq!(store.get(TRACK_KEY).as_deref(), Some("commerce"));
        assert_eq!(Preferences::load(&store).track, Track::Commerce);
    }

    #[test]
    fn open_store_without_path_is_ephemeral() {
        let store = open_store(None);
        store.set(LANGUAGE_KEY, "bn").unwrap();
        assert_eq!(Preferences::load(store.as_ref()).language, Language::Bn);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get(TRACK_KEY), None);
        assert_eq!(Preferences::load(&store), Preferences::default());
    }
}

//! Preference persistence
//!
//! A tiny string key/value store that survives restarts. The application
//! keeps exactly one entry in it: the last search term under [`SEARCH_KEY`].
//!
//! The store is passed to whoever needs it; nothing here is global.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Key of the persisted search term
pub const SEARCH_KEY: &str = "search";

const PREFERENCES_VERSION: u32 = 1;

/// Durable string key/value storage
pub trait PreferenceStore: Send {
    /// Read a value; `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, persisting it before returning
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesMeta {
    last_modified: DateTime<Utc>,
    version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesFile {
    meta: PreferencesMeta,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for PreferencesFile {
    fn default() -> Self {
        Self {
            meta: PreferencesMeta {
                last_modified: Utc::now(),
                version: PREFERENCES_VERSION,
            },
            values: BTreeMap::new(),
        }
    }
}

/// Preference store backed by a TOML file
///
/// The whole file is rewritten on every `set`.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    file: PreferencesFile,
}

impl FilePreferenceStore {
    /// Open the store at the default location
    pub fn open() -> Result<Self> {
        Ok(Self::load(paths::preferences_path()?))
    }

    /// Open the store at `path`
    ///
    /// A missing or unreadable file starts an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = if path.exists() {
            match Self::read(&path) {
                Ok(file) => {
                    log::info!("Loaded preferences from {:?}", path);
                    file
                }
                Err(e) => {
                    log::warn!("Ignoring preferences file: {:#}", e);
                    PreferencesFile::default()
                }
            }
        } else {
            log::info!("No preferences at {:?}, starting empty", path);
            PreferencesFile::default()
        };

        Self { path, file }
    }

    fn read(path: &Path) -> Result<PreferencesFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {:?}", path))
    }

    fn save(&mut self) -> Result<()> {
        self.file.meta.last_modified = Utc::now();
        let content =
            toml::to_string_pretty(&self.file).context("Failed to serialize preferences")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", self.path))?;

        log::debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.file.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

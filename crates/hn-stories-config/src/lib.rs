//! Configuration and persistence for hn-stories
//!
//! This crate provides:
//! - Platform paths for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - The preference store used to remember the last search term

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod preferences;

pub use app_config::{AppConfig, FetchMode, SearchMode};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, preferences_path};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, SEARCH_KEY};

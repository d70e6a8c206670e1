// src/core/store/json_backend.rs

use once_cell::sync::OnceCell;

use super::{PreferenceStore, Preferences};
use crate::core::config::StoreConfig;
use crate::core::config_loader;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

// stash the resolved default path once; explicit paths bypass it
static DEFAULT_PREFS_PATH: OnceCell<PathBuf> = OnceCell::new();

// Reads the snapshot from a flat JSON object file
pub struct JsonBackend {
    path: PathBuf,
}

impl JsonBackend {
    pub fn from_config(cfg: &StoreConfig) -> Self {
        let path = cfg.path.clone().unwrap_or_else(|| {
            DEFAULT_PREFS_PATH
                .get_or_init(config_loader::default_prefs_path)
                .clone()
        });
        JsonBackend { path }
    }

    pub fn with_path(path: PathBuf) -> Self {
        JsonBackend { path }
    }
}

impl PreferenceStore for JsonBackend {
    fn read(&self) -> Result<Preferences> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Reading preference file {}", self.path.display()))?;
        let map = serde_json::from_str(&raw)
            .with_context(|| format!("Parsing preference file {}", self.path.display()))?;
        Ok(Preferences::from_map(map))
    }
}

#[cfg(test)]
mod tests {
    use super::JsonBackend;
    use super::PreferenceStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_strings_and_integers() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("prefs.json");
        fs::write(
            &path,
            r#"{"class_name": "Math 101", "room": "204", "class_ends_in": 30}"#,
        )
        .unwrap();

        let backend = JsonBackend::with_path(path);
        let prefs = backend.read().unwrap();

        assert_eq!(prefs.get_str("class_name"), Some("Math 101"));
        assert_eq!(prefs.get_str("room"), Some("204"));
        assert_eq!(prefs.get_int("class_ends_in"), Some(30));
        assert_eq!(prefs.get_int("class_total_duration"), None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let td = TempDir::new().unwrap();
        let backend = JsonBackend::with_path(td.path().join("nope.json"));
        assert!(backend.read().is_err());
    }

    #[test]
    fn junk_file_is_an_error() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let backend = JsonBackend::with_path(path);
        assert!(backend.read().is_err());
    }
}

// src/core/store/memory_backend.rs

use super::{PreferenceStore, Preferences};
use anyhow::Result;
use serde_json::{Map, Value};

// In-process store. Selectable from config as a dry-run backend and
// used as a fixture throughout the test suite.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Map<String, Value>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_str(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), Value::from(value));
        self
    }

    pub fn set_int(mut self, key: &str, value: i64) -> Self {
        self.values.insert(key.to_owned(), Value::from(value));
        self
    }
}

impl PreferenceStore for MemoryBackend {
    fn read(&self) -> Result<Preferences> {
        Ok(Preferences::from_map(self.values.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryBackend;
    use super::PreferenceStore;

    #[test]
    fn typed_reads() {
        let backend = MemoryBackend::new()
            .set_str("class_name", "Math 101")
            .set_int("class_ends_in", 30);

        let prefs = backend.read().unwrap();
        assert_eq!(prefs.get_str("class_name"), Some("Math 101"));
        assert_eq!(prefs.get_int("class_ends_in"), Some(30));
        // absent and wrongly-typed keys both come back as None
        assert_eq!(prefs.get_str("room"), None);
        assert_eq!(prefs.get_int("class_name"), None);
    }
}

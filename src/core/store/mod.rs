// src/core/store/mod.rs

//! Preference store backends

pub mod json_backend;
pub mod memory_backend;

pub use json_backend::JsonBackend;
pub use memory_backend::MemoryBackend;

use anyhow::Result;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    #[default]
    Json,
    Memory,
}

// A unified read-only view of the key/value pairs the companion app
// writes. Backends re-read on every call; nothing is cached here.
pub trait PreferenceStore: Send + Sync {
    fn read(&self) -> Result<Preferences>;
}

// One consistent view of the store for the duration of a single
// formatting request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Preferences(Map<String, Value>);

impl Preferences {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Preferences(map)
    }

    // `None` when the key is absent or holds a non-string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    // `None` when the key is absent or holds a non-integer value.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }
}

// src/core/sources/current_class/mod.rs

//! Current/next class source and its formatter

pub mod formatter;
pub mod snapshot;
pub mod source;

// Expose the `CurrentClassSource` and `Snapshot` types at the top level
pub use snapshot::Snapshot;
pub use source::CurrentClassSource;

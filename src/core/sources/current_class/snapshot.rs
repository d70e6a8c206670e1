// src/core/sources/current_class/snapshot.rs

use crate::core::store::Preferences;

// Canonical preference keys written by the companion app.
pub const KEY_CLASS_NAME: &str = "class_name";
pub const KEY_ROOM: &str = "room";
pub const KEY_CLASS_ENDS_IN: &str = "class_ends_in";
pub const KEY_CLASS_TOTAL_DURATION: &str = "class_total_duration";
pub const KEY_NEXT_CLASS_NAME: &str = "next_class_name";
pub const KEY_NEXT_CLASS_STARTS_IN: &str = "next_class_starts_in";

// One formatting request's view of the store. Empty labels and negative
// minute counts are normalized to "unknown" here, so the formatter only
// ever sees usable values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Snapshot {
    pub class_name: Option<String>,
    pub room: Option<String>,
    pub class_ends_in: Option<u32>,
    pub class_total_duration: Option<u32>,
    pub next_class_name: Option<String>,
    pub next_class_starts_in: Option<u32>,
}

impl Snapshot {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Snapshot {
            class_name: read_label(prefs, KEY_CLASS_NAME),
            room: read_label(prefs, KEY_ROOM),
            class_ends_in: read_minutes(prefs, KEY_CLASS_ENDS_IN),
            class_total_duration: read_minutes(prefs, KEY_CLASS_TOTAL_DURATION),
            next_class_name: read_label(prefs, KEY_NEXT_CLASS_NAME),
            next_class_starts_in: read_minutes(prefs, KEY_NEXT_CLASS_STARTS_IN),
        }
    }
}

fn read_label(prefs: &Preferences, key: &str) -> Option<String> {
    prefs
        .get_str(key)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

// Negative values are the companion's "unknown" sentinel, never zero.
fn read_minutes(prefs: &Preferences, key: &str) -> Option<u32> {
    prefs.get_int(key).and_then(|m| u32::try_from(m).ok())
}

#[cfg(test)]
mod tests {
    use super::Snapshot;
    use crate::core::store::{MemoryBackend, PreferenceStore};

    #[test]
    fn empty_labels_are_absent() {
        let prefs = MemoryBackend::new()
            .set_str("class_name", "")
            .set_str("room", "204")
            .read()
            .unwrap();

        let snap = Snapshot::from_preferences(&prefs);
        assert_eq!(snap.class_name, None);
        assert_eq!(snap.room.as_deref(), Some("204"));
    }

    #[test]
    fn negative_minutes_are_unknown() {
        let prefs = MemoryBackend::new()
            .set_int("class_ends_in", -1)
            .set_int("class_total_duration", 60)
            .set_int("next_class_starts_in", -30)
            .read()
            .unwrap();

        let snap = Snapshot::from_preferences(&prefs);
        assert_eq!(snap.class_ends_in, None);
        assert_eq!(snap.class_total_duration, Some(60));
        assert_eq!(snap.next_class_starts_in, None);
    }

    #[test]
    fn all_absent_is_the_default_snapshot() {
        let prefs = MemoryBackend::new().read().unwrap();
        assert_eq!(Snapshot::from_preferences(&prefs), Snapshot::default());
    }
}

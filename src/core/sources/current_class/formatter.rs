// src/core/sources/current_class/formatter.rs
//
// Pure mapping from a preference snapshot to a complication payload.
// Selection ladder, first match wins:
//   1. class + room + known end time + positive duration -> ranged value
//   2. class name alone -> short text, title falls back end-time -> room
//   3. next class name -> short text
//   4. nothing usable -> no data

use super::snapshot::Snapshot;
use crate::core::complication::{ComplicationData, ComplicationType};

// Best-fit payload for a slot that can render anything.
pub fn format(snapshot: &Snapshot) -> ComplicationData {
    ranged(snapshot).unwrap_or_else(|| short(snapshot))
}

// Payload honouring the slot's requested type. A ranged slot accepts
// any shape, so it gets the full ladder; a short-text slot must never
// be handed a ranged payload.
pub fn format_for(snapshot: &Snapshot, requested: ComplicationType) -> ComplicationData {
    match requested {
        ComplicationType::RangedValue => format(snapshot),
        ComplicationType::ShortText => short(snapshot),
        ComplicationType::LongText => long(snapshot),
    }
}

// Fixed design-time payloads shown in the watch-face editor.
pub fn preview(requested: ComplicationType) -> Option<ComplicationData> {
    match requested {
        ComplicationType::RangedValue => Some(ComplicationData::RangedValue {
            value: 30.0,
            min: 0.0,
            max: 60.0,
            text: "204".to_owned(),
            title: Some("Math 101".to_owned()),
            description: "Math 101 in Room 204".to_owned(),
        }),
        ComplicationType::ShortText => Some(ComplicationData::ShortText {
            text: "Math 101".to_owned(),
            title: Some("Room 204".to_owned()),
            description: "Math 101 in Room 204".to_owned(),
        }),
        ComplicationType::LongText => None,
    }
}

// Rule 1. Requires a positive total duration; a zero-length class can
// never be a progress bar.
fn ranged(s: &Snapshot) -> Option<ComplicationData> {
    let class_name = s.class_name.as_deref()?;
    let room = s.room.as_deref()?;
    let ends_in = s.class_ends_in?;
    let total = s.class_total_duration.filter(|&t| t > 0)?;

    Some(ComplicationData::RangedValue {
        value: ends_in as f32,
        min: 0.0,
        max: total as f32,
        text: room.to_owned(),
        title: Some(class_name.to_owned()),
        description: format!("{class_name} in {room}"),
    })
}

// Rules 2-4.
fn short(s: &Snapshot) -> ComplicationData {
    if let Some(class_name) = s.class_name.as_deref() {
        let title = match s.class_ends_in {
            Some(0) => Some("now".to_owned()),
            Some(m) => Some(format!("{m}m")),
            None => s.room.clone(),
        };
        let description = match s.room.as_deref() {
            Some(room) => format!("{class_name} ({room})"),
            None => class_name.to_owned(),
        };
        return ComplicationData::ShortText {
            text: class_name.to_owned(),
            title,
            description,
        };
    }

    if let Some(next) = s.next_class_name.as_deref() {
        let title = match s.next_class_starts_in {
            Some(0) => Some("now".to_owned()),
            Some(m) => Some(format!("{m}m")),
            None => None,
        };
        return ComplicationData::ShortText {
            text: next.to_owned(),
            title,
            description: next.to_owned(),
        };
    }

    ComplicationData::NoData
}

// Long-text rendering reuses the accessibility strings of the ladder.
fn long(s: &Snapshot) -> ComplicationData {
    if let Some(class_name) = s.class_name.as_deref() {
        let text = match s.room.as_deref() {
            Some(room) => format!("{class_name} in {room}"),
            None => class_name.to_owned(),
        };
        return ComplicationData::LongText {
            description: text.clone(),
            text,
        };
    }

    if let Some(next) = s.next_class_name.as_deref() {
        let text = match s.next_class_starts_in {
            Some(0) => format!("{next} now"),
            Some(m) => format!("{next} in {m}m"),
            None => next.to_owned(),
        };
        return ComplicationData::LongText {
            description: text.clone(),
            text,
        };
    }

    ComplicationData::NoData
}

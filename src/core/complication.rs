// src/core/complication.rs

use serde::Deserialize;

// The payload shape a watch-face slot asks a source for.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplicationType {
    #[default]
    RangedValue,
    ShortText,
    LongText,
}

// A formatted payload, ready for the host renderer. Never persisted;
// each render pass builds a fresh one and discards it.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplicationData {
    RangedValue {
        value: f32,
        min: f32,
        max: f32,
        text: String,
        title: Option<String>,
        description: String,
    },
    ShortText {
        text: String,
        title: Option<String>,
        description: String,
    },
    LongText {
        text: String,
        description: String,
    },
    NoData,
}

impl ComplicationData {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ComplicationData::NoData)
    }
}

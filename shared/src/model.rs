use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use validator::Validate;

use crate::constants::*;
use crate::validation::{normalize_color, validate_color};

/// One wedge of a wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    #[validate(length(max = 3))]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 10, max = 60))]
    pub emoji_size: Option<u32>,
    #[validate(custom = "validate_color")]
    pub color: String,
}

impl Segment {
    pub fn new(text: impl Into<String>, emoji: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: emoji.into(),
            emoji_size: None,
            color: color.into(),
        }
    }

    /// The segment generated for a freshly added slot at `index`.
    pub fn placeholder(index: usize) -> Self {
        Self::new(
            format!("Option {}", index + 1),
            "",
            SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()],
        )
    }

    /// Label as shown on the wheel and in the history list.
    pub fn label(&self) -> String {
        if self.emoji.is_empty() {
            self.text.clone()
        } else {
            format!("{} {}", self.emoji, self.text)
        }
    }
}

/// A single-field change coming from the segment editor.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentEdit {
    Text(String),
    Emoji(String),
    EmojiSize(Option<u32>),
    Color(String),
}

impl SegmentEdit {
    pub(crate) fn apply(self, segment: &mut Segment) {
        match self {
            SegmentEdit::Text(text) => segment.text = text,
            SegmentEdit::Emoji(emoji) => segment.emoji = emoji,
            SegmentEdit::EmojiSize(size) => segment.emoji_size = size,
            SegmentEdit::Color(color) => segment.color = normalize_color(&color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WheelId(String);

impl WheelId {
    /// Builds a time-derived id, moving forward past any id already in use.
    pub fn generate<'a>(now_ms: u64, taken: impl Iterator<Item = &'a WheelId> + Clone) -> Self {
        let mut stamp = now_ms;
        loop {
            let candidate = WheelId(format!("{}{}", WHEEL_ID_PREFIX, stamp));
            if !taken.clone().any(|id| *id == candidate) {
                return candidate;
            }
            stamp += 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WheelId {
    fn from(value: &str) -> Self {
        WheelId(value.to_string())
    }
}

impl fmt::Display for WheelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One independently spinnable wheel with its own history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wheel {
    pub id: WheelId,
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub history: Vec<Segment>,
}

impl Wheel {
    pub fn new(id: WheelId, segments: Vec<Segment>) -> Self {
        Self {
            id,
            segments,
            rotation: 0.0,
            history: Vec::new(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Most-recent-first, oldest entries evicted past `limit`.
    pub fn record_winner(&mut self, winner: Segment, limit: usize) {
        self.history.insert(0, winner);
        self.history.truncate(limit);
    }

    pub fn normalize_rotation(&mut self) {
        self.rotation = self.rotation.rem_euclid(TAU);
    }
}

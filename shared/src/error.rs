use std::fmt;
use validator::ValidationErrors;

use crate::constants::{
    MAX_EMOJI_SIZE, MIN_EMOJI_SIZE, SEGMENT_CEILING_ERROR, SEGMENT_FLOOR_ERROR, SINGLE_WHEEL_ERROR,
};
use crate::model::WheelId;

#[derive(Debug)]
pub enum EngineError {
    SingleWheelGuard,
    SegmentFloorGuard,
    SegmentCeilingGuard,
    ReentrantSpinGuard,
    SpinInProgress,
    SegmentOutOfRange { index: usize, len: usize },
    InvalidSegment(ValidationErrors),
    UnknownWheel(WheelId),
}

impl EngineError {
    /// Whether the UI should tell the user about this rejection.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            Self::SingleWheelGuard
                | Self::SegmentFloorGuard
                | Self::SegmentCeilingGuard
                | Self::SpinInProgress
                | Self::InvalidSegment(_)
        )
    }
}

fn describe_field(field: &str) -> String {
    match field {
        "emoji" => "Emoji can be at most 3 characters (joined emoji count each part)".to_string(),
        "emoji_size" => format!("Emoji size must be between {} and {}", MIN_EMOJI_SIZE, MAX_EMOJI_SIZE),
        "color" => "Color must be a #rrggbb hex value".to_string(),
        other => format!("Invalid {}", other),
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleWheelGuard => write!(f, "{}", SINGLE_WHEEL_ERROR),
            Self::SegmentFloorGuard => write!(f, "{}", SEGMENT_FLOOR_ERROR),
            Self::SegmentCeilingGuard => write!(f, "{}", SEGMENT_CEILING_ERROR),
            Self::ReentrantSpinGuard => write!(f, "A spin is already in flight"),
            Self::SpinInProgress => write!(f, "Wait for the wheel to stop before changing its segments"),
            Self::SegmentOutOfRange { index, len } => {
                write!(f, "Segment {} out of range (wheel has {})", index, len)
            }
            Self::InvalidSegment(e) => {
                let mut fields: Vec<_> = e.field_errors().into_keys().collect();
                fields.sort_unstable();
                let messages: Vec<_> = fields.into_iter().map(describe_field).collect();
                write!(f, "{}", messages.join("; "))
            }
            Self::UnknownWheel(id) => write!(f, "Unknown wheel: {}", id),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ValidationErrors> for EngineError {
    fn from(err: ValidationErrors) -> Self {
        EngineError::InvalidSegment(err)
    }
}

#[derive(Debug)]
pub enum StoreError {
    Write(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(e) => write!(f, "Storage write failed: {}", e),
            Self::Serialize(e) => write!(f, "Snapshot serialization failed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err)
    }
}

/// Why the default-configuration document could not be used.
#[derive(Debug)]
pub enum ConfigError {
    Unavailable(String),
    Malformed(serde_json::Error),
    InvalidTemplate(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "Config unavailable: {}", e),
            Self::Malformed(e) => write!(f, "Config malformed: {}", e),
            Self::InvalidTemplate(e) => write!(f, "Config template invalid: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err)
    }
}

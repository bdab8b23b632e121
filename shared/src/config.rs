use serde::Deserialize;
use validator::Validate;

use crate::constants::*;
use crate::error::ConfigError;
use crate::model::Segment;
use crate::validation::{normalize_color, validate_segment_count};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    default_wheel: DefaultWheel,
    #[serde(default)]
    history_limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct DefaultWheel {
    segments: Vec<Segment>,
}

/// Engine settings plus the segment template every new wheel starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    pub template: Vec<Segment>,
    pub history_limit: usize,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            template: fallback_template(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl WheelConfig {
    /// Parses a `config.json` document with a `defaultWheel.segments` array.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut doc: ConfigDocument = serde_json::from_str(json)?;

        validate_segment_count(doc.default_wheel.segments.len()).map_err(|_| {
            ConfigError::InvalidTemplate(format!(
                "expected {}..={} segments, found {}",
                MIN_SEGMENTS,
                MAX_SEGMENTS,
                doc.default_wheel.segments.len()
            ))
        })?;
        for (i, segment) in doc.default_wheel.segments.iter_mut().enumerate() {
            segment.color = normalize_color(&segment.color);
            segment
                .validate()
                .map_err(|e| ConfigError::InvalidTemplate(format!("segment {}: {}", i, e)))?;
        }

        Ok(Self {
            template: doc.default_wheel.segments,
            history_limit: doc
                .history_limit
                .unwrap_or(DEFAULT_HISTORY_LIMIT)
                .clamp(DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT),
        })
    }

    /// Falls back to the built-in template when the source could not be read.
    pub fn resolve(source: Result<String, ConfigError>) -> Self {
        match source.and_then(|json| Self::from_json(&json)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using built-in wheel template: {}", e);
                Self::default()
            }
        }
    }
}

pub fn fallback_template() -> Vec<Segment> {
    ["🎁", "✨", "🎉", "🚀"]
        .iter()
        .enumerate()
        .map(|(i, emoji)| Segment::new(format!("Option {}", i + 1), *emoji, SEGMENT_PALETTE[i]))
        .collect()
}

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_SEGMENTS, MIN_SEGMENTS};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());
static SHORT_HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{3}$").unwrap());

/// Colors are stored as `#rrggbb`, the only form a color picker round-trips.
pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_color"));
    }
    Ok(())
}

/// Expands `#rgb` shorthand to `#rrggbb`; anything else is returned trimmed.
pub fn normalize_color(color: &str) -> String {
    let color = color.trim();
    if SHORT_HEX_COLOR.is_match(color) {
        color.chars().skip(1).fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        })
    } else {
        color.to_string()
    }
}

pub fn validate_segment_count(count: usize) -> Result<(), ValidationError> {
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&count) {
        return Err(ValidationError::new("invalid_segment_count"));
    }
    Ok(())
}

pub const MIN_SEGMENTS: usize = 2;
pub const MAX_SEGMENTS: usize = 50;

pub const MIN_EMOJI_SIZE: u32 = 10;
pub const MAX_EMOJI_SIZE: u32 = 60;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const MAX_HISTORY_LIMIT: usize = 15;

pub const SPIN_DURATION_MS: f64 = 5000.0;
pub const FULL_TURNS: f64 = 10.0;

pub const SEGMENT_PALETTE: [&str; 6] = [
    "#1DBFA5", "#0052CC", "#26E0B9", "#003D99", "#1AC8A8", "#0040A8",
];

pub const WHEEL_ID_PREFIX: &str = "wheel-";

pub const STATE_STORAGE_KEY: &str = "prizeWheel_state";
pub const THEME_STORAGE_KEY: &str = "theme";

pub const SINGLE_WHEEL_ERROR: &str = "You can't delete the only wheel!";
pub const SEGMENT_FLOOR_ERROR: &str = "A wheel needs at least 2 segments";
pub const SEGMENT_CEILING_ERROR: &str = "A wheel can hold at most 50 segments";

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod model;
pub mod persistence;
pub mod spin;
pub mod validation;

pub use config::WheelConfig;
pub use engine::{Refresh, WheelEngine};
pub use error::{ConfigError, EngineError, StoreError};
pub use model::{Segment, SegmentEdit, Wheel, WheelId};
pub use persistence::{KeyValueStore, MemoryStore, Snapshot, Theme};
pub use spin::{SpinFrame, SpinOutcome};

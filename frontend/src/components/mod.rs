pub mod segment_editor;
pub mod wheel_tabs;

pub use segment_editor::SegmentEditor;
pub use wheel_tabs::WheelTabs;

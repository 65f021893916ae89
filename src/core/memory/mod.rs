pub mod errors;
pub mod frame_table;

// Re-export commonly used types
pub use errors::{ConfigError, SimError, TraceError};
pub use frame_table::{FrameTable, ResidentPage};

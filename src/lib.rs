pub mod cli;
pub mod core;

// Re-export commonly used types
pub use crate::core::components::run_stats::RunStats;
pub use crate::core::event::AccessEvent;
pub use crate::core::execution::config::{Algorithm, OutputFormat, SimulationConfig};
pub use crate::core::execution::simulation_engine::{
    simulate, ReplacementEngine, SimulationObserver,
};
pub use crate::core::trace::Trace;
pub use crate::core::types::{Address, FrameIndex, PageNumber, PAGE_SIZE, VIRTUAL_PAGES};

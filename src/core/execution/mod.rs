pub mod config;
pub mod simulation_engine;

// Re-export commonly used types
pub use config::{Algorithm, OutputFormat, SimulationConfig};
pub use simulation_engine::{simulate, EventLog, ReplacementEngine, SimulationObserver};

//! Configuration for a page-replacement run
//!
//! This module provides the replacement algorithm selector and the frame
//! budget that together fully determine a simulation over a given trace.

use crate::core::memory::errors::ConfigError;
use crate::core::types::PAGE_SIZE;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Enumeration of supported replacement policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Evict frames in the order they were filled
    Fifo,
    /// Evict the frame referenced longest ago
    Lru,
    /// Evict the frame whose page is needed furthest in the future (Belady)
    Optimal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Fifo, Algorithm::Lru, Algorithm::Optimal];

    /// Name used in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Lru => "LRU",
            Algorithm::Optimal => "Optimal",
        }
    }

    /// Token accepted on the command line
    pub fn token(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "fifo",
            Algorithm::Lru => "lru",
            Algorithm::Optimal => "optimal",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Exact, case-sensitive match on the command-line token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.token() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How the end-of-run summary is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for simulation execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    /// The replacement policy to replay the trace with
    pub algorithm: Algorithm,
    /// Number of physical frames
    pub frames: NonZeroUsize,
}

impl SimulationConfig {
    /// Create a new configuration
    pub fn new(algorithm: Algorithm, frames: NonZeroUsize) -> Self {
        Self { algorithm, frames }
    }

    /// Create a configuration from an unchecked frame count
    ///
    /// # Returns
    /// `ConfigError::ZeroFrames` when `frames` is zero
    pub fn try_new(algorithm: Algorithm, frames: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(frames)
            .map(|frames| Self::new(algorithm, frames))
            .ok_or(ConfigError::ZeroFrames)
    }

    /// Same frame budget under a different policy
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.get()
    }

    /// Total simulated physical memory in bytes
    pub fn physical_memory_bytes(&self) -> usize {
        self.frames.get() * PAGE_SIZE
    }
}

use super::components::run_stats::RunStats;
use super::event::AccessEvent;
use super::execution::config::{Algorithm, OutputFormat, SimulationConfig};
use super::execution::simulation_engine::SimulationObserver;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for AccessEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AccessEvent::Hit {
                address,
                page,
                frame,
            } => write!(f, "Access {} (page {:3}): HIT  -> frame {}", address, page, frame),
            AccessEvent::FaultLoaded {
                address,
                page,
                frame,
            } => write!(
                f,
                "Access {} (page {:3}): FAULT -> page in -> frame {}",
                address, page, frame
            ),
            AccessEvent::FaultReplaced {
                address,
                page,
                victim_page,
                frame,
            } => write!(
                f,
                "Access {} (page {:3}): FAULT -> REPLACE: page {} out (frame {}), page {} in",
                address, page, victim_page, frame, page
            ),
        }
    }
}

/// End-of-run summary block
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub frames: usize,
    pub physical_bytes: usize,
    #[serde(flatten)]
    pub stats: RunStats,
    pub hit_ratio: f64,
    pub fault_ratio: f64,
}

impl Summary {
    pub fn new(config: &SimulationConfig, stats: RunStats) -> Self {
        Self {
            algorithm: config.algorithm,
            frames: config.frame_count(),
            physical_bytes: config.physical_memory_bytes(),
            stats,
            hit_ratio: stats.hit_ratio(),
            fault_ratio: stats.fault_ratio(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Algorithm       : {}", self.algorithm)?;
        writeln!(
            f,
            "Frames          : {} (total physical = {} bytes)",
            self.frames, self.physical_bytes
        )?;
        writeln!(f, "Total accesses  : {}", self.stats.total_accesses)?;
        writeln!(f, "Page hits       : {}", self.stats.hits)?;
        writeln!(f, "Page faults     : {}", self.stats.faults)?;
        write!(f, "Replacements    : {}", self.stats.replacements)
    }
}

/// Writes one line per access and the summary to `out`.
///
/// Observer callbacks cannot fail, so the first write error is held and
/// surfaced by [`Reporter::finish`].
pub struct Reporter<W: Write> {
    out: W,
    config: SimulationConfig,
    format: OutputFormat,
    quiet: bool,
    error: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: &SimulationConfig) -> Self {
        Self {
            out,
            config: config.clone(),
            format: OutputFormat::Text,
            quiet: false,
            error: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Suppress per-access lines
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn write_summary(&mut self, stats: &RunStats) -> io::Result<()> {
        let summary = Summary::new(&self.config, *stats);
        match self.format {
            OutputFormat::Text => {
                if !self.quiet {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{}", summary)
            }
            OutputFormat::Json => {
                let json = summary.to_json().map_err(io::Error::other)?;
                writeln!(self.out, "{}", json)
            }
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    /// Flush and hand back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> SimulationObserver for Reporter<W> {
    fn on_access(&mut self, event: &AccessEvent) {
        if self.quiet || self.error.is_some() {
            return;
        }
        let result = writeln!(self.out, "{}", event);
        self.record(result);
    }

    fn on_complete(&mut self, stats: &RunStats) {
        if self.error.is_some() {
            return;
        }
        let result = self.write_summary(stats);
        self.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Address;

    #[test]
    fn test_event_lines() {
        let hit = AccessEvent::Hit {
            address: Address::new(0x01FF),
            page: 1,
            frame: 0,
        };
        assert_eq!(hit.to_string(), "Access 0x01FF (page   1): HIT  -> frame 0");

        let loaded = AccessEvent::FaultLoaded {
            address: Address::new(0x2A00),
            page: 42,
            frame: 3,
        };
        assert_eq!(
            loaded.to_string(),
            "Access 0x2A00 (page  42): FAULT -> page in -> frame 3"
        );

        let replaced = AccessEvent::FaultReplaced {
            address: Address::new(0xFF10),
            page: 255,
            victim_page: 7,
            frame: 1,
        };
        assert_eq!(
            replaced.to_string(),
            "Access 0xFF10 (page 255): FAULT -> REPLACE: page 7 out (frame 1), page 255 in"
        );
    }

    #[test]
    fn test_text_summary() {
        let config = SimulationConfig::try_new(Algorithm::Lru, 4).unwrap();
        let stats = RunStats {
            total_accesses: 10,
            hits: 6,
            faults: 4,
            replacements: 0,
        };
        let text = Summary::new(&config, stats).to_string();
        assert!(text.starts_with("=== Summary ===\n"));
        assert!(text.contains("Algorithm       : LRU\n"));
        assert!(text.contains("Frames          : 4 (total physical = 1024 bytes)\n"));
        assert!(text.contains("Page hits       : 6\n"));
        assert!(text.ends_with("Replacements    : 0"));
    }

    #[test]
    fn test_json_summary_fields() {
        let config = SimulationConfig::try_new(Algorithm::Optimal, 2).unwrap();
        let stats = RunStats {
            total_accesses: 4,
            hits: 1,
            faults: 3,
            replacements: 1,
        };
        let json = Summary::new(&config, stats).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "optimal");
        assert_eq!(value["frames"], 2);
        assert_eq!(value["physical_bytes"], 512);
        assert_eq!(value["faults"], 3);
        assert_eq!(value["replacements"], 1);
    }

    #[test]
    fn test_quiet_reporter_prints_only_summary() {
        let config = SimulationConfig::try_new(Algorithm::Fifo, 1).unwrap();
        let mut reporter = Reporter::new(Vec::new(), &config).quiet(true);
        reporter.on_access(&AccessEvent::Hit {
            address: Address::new(0),
            page: 0,
            frame: 0,
        });
        reporter.on_complete(&RunStats::new());
        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert!(out.starts_with("=== Summary ==="));
        assert!(!out.contains("Access"));
    }
}

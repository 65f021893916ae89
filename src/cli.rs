use crate::core::components::run_stats::RunStats;
use crate::core::execution::config::{Algorithm, OutputFormat, SimulationConfig};
use crate::core::execution::simulation_engine::ReplacementEngine;
use crate::core::memory::errors::{ConfigError, SimError};
use crate::core::report::Reporter;
use crate::core::trace::Trace;
use clap::Parser;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "vmsim",
    version,
    about = "Virtual memory page-replacement simulator (FIFO, LRU, Optimal)"
)]
pub struct Cli {
    /// Replacement algorithm
    #[arg(short = 'a', long, value_enum)]
    pub algorithm: Algorithm,
    /// Number of physical frames (256 bytes each)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,
    /// Trace file with one hex address per line
    #[arg(short = 'f', long = "file", value_name = "TRACE")]
    pub trace: PathBuf,
    /// Print only the summary
    #[arg(short, long)]
    pub quiet: bool,
    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Level to force on the logger, if any.
    ///
    /// `-v` always wins; otherwise an explicit `RUST_LOG` is left alone and
    /// only an unset one falls back to `warn`.
    pub fn log_level_override(&self, rust_log_set: bool) -> Option<LevelFilter> {
        if self.verbose > 0 || !rust_log_set {
            Some(self.log_level())
        } else {
            None
        }
    }

    pub fn config(&self) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::try_new(self.algorithm, self.frames as usize)
    }
}

/// Load the trace, replay it, and write the report to `out`.
///
/// Nothing is written unless the configuration and trace are both valid.
pub fn run<W: Write>(cli: &Cli, out: W) -> Result<RunStats, SimError> {
    let config = cli.config()?;
    let trace = Trace::load(&cli.trace)?;

    let mut reporter = Reporter::new(out, &config)
        .with_format(cli.format)
        .quiet(cli.quiet);
    let stats = ReplacementEngine::new(&config, &trace).run(&mut reporter);
    reporter.finish()?;
    Ok(stats)
}

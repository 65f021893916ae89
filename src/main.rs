use clap::Parser;
use std::io;
use std::process::ExitCode;
use vmsim::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    let rust_log_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    if let Some(level) = cli.log_level_override(rust_log_set) {
        logger.filter_level(level);
    }
    logger.format_timestamp(None).init();

    match cli::run(&cli, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

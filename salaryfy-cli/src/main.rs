use std::io;

use anyhow::Result;
use clap::Parser;

use salaryfy_cli::app::{self, Cli};
use salaryfy_cli::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging("warn");
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_console_enabled(false);
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli, &mut out)
}

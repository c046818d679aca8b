use anyhow::Result;
use clap::Parser;
use z4term::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Routes log::info!() etc. to /tmp/z4term_debug.log; with RUST_LOG set it
    // also mirrors to stderr. --log-level takes precedence over RUST_LOG.
    z4term::debug::init_log_bridge(cli.log_level);
    log::info!("z4term {}", z4term::VERSION);

    if let Err(e) = cli::run(&cli) {
        eprintln!("z4term: error: {e:#}");
        return Err(e);
    }
    Ok(())
}

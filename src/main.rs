//! CLI entry point for the wave function collapse solver

use clap::Parser;
use gridcollapse::io::cli::{Cli, Runner};

fn main() -> gridcollapse::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run()?;
    Ok(())
}

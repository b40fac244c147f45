//! CLI entry point for the Aztec diamond tiling generator

use aztec_shuffle::io::cli::{Cli, GrowthRunner};
use clap::Parser;

fn main() -> aztec_shuffle::Result<()> {
    let cli = Cli::parse();
    let runner = GrowthRunner::new(cli);
    runner.run()?;
    Ok(())
}

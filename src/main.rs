//! CLI entry point for the CMB x galaxy survey overlap tool

use clap::Parser;
use skyoverlap::io::cli::{Cli, OverlapProcessor, setup_logging};

fn main() -> skyoverlap::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut processor = OverlapProcessor::new(cli);
    processor.process()
}

//! CLI entry point for cross-stitch chart generation

use clap::Parser;
use stitchgrid::io::cli::{Cli, CommandRunner};

fn main() -> stitchgrid::Result<()> {
    let cli = Cli::parse();
    if cli.should_log() {
        stitchgrid::io::cli::init_tracing();
    }
    let runner = CommandRunner::new(cli);
    runner.run()
}

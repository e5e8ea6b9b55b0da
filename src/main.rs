//! CLI entry point for the sliding tile puzzle

use clap::Parser;
use tilemerge::io::cli::{Cli, GameRunner};
use tilemerge::io::logging::init_tracing;

fn main() -> tilemerge::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;
    GameRunner::new(cli).run()
}

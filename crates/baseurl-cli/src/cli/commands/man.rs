use anyhow::Result;
use clap::CommandFactory;
use std::io;

use crate::cli::Cli;

/// Render the man page for the top-level command.
pub fn run_man() -> Result<()> {
    clap_mangen::Man::new(Cli::command()).render(&mut io::stdout())?;
    Ok(())
}

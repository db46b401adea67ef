//! CLI for resolving an application's canonical base URL.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_completions, run_config_path, run_join, run_man, run_resolve};

/// Top-level CLI for baseurl.
#[derive(Debug, Parser)]
#[command(name = "baseurl")]
#[command(about = "Resolve the canonical base URL of a web application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Per-invocation replacements for the environment candidates.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceOverrides {
    /// Use this site URL instead of reading the site URL variable.
    #[arg(long, value_name = "URL")]
    pub site_url: Option<String>,
    /// Use this host instead of reading the platform host variable.
    #[arg(long, value_name = "HOST")]
    pub platform_host: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the resolved base URL.
    Resolve {
        #[command(flatten)]
        overrides: SourceOverrides,
        /// Print `{"base_url": ..., "source": ...}` instead of the bare URL.
        #[arg(long)]
        json: bool,
    },

    /// Print an absolute link to PATH under the resolved base URL.
    Join {
        /// Path relative to the base, e.g. `/blog/post` or `og.png`.
        path: String,
        #[command(flatten)]
        overrides: SourceOverrides,
    },

    /// Print the location of the config file.
    ConfigPath,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run()
    }

    fn run(self) -> Result<()> {
        match self {
            CliCommand::Resolve { overrides, json } => run_resolve(&overrides, json),
            CliCommand::Join { path, overrides } => run_join(&path, &overrides),
            CliCommand::ConfigPath => run_config_path(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

#[cfg(test)]
mod tests;

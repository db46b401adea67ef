//! Tests for config-path, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_config_path() {
    match parse(&["baseurl", "config-path"]) {
        CliCommand::ConfigPath => {}
        _ => panic!("expected ConfigPath"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["baseurl", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_rejects_unknown_shell() {
    assert!(Cli::try_parse_from(["baseurl", "completions", "tcsh"]).is_err());
}

#[test]
fn cli_parse_man() {
    match parse(&["baseurl", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["baseurl"]).is_err());
}

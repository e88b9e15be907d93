use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Interactive runner for multi-day safety training campaigns
///
/// A campaign is a sequence of day-by-day scenarios made of multiple-choice
/// safety questions. Vital questions must be answered correctly before a
/// day can be completed, and later days unlock as earlier ones are passed.
/// Without a subcommand an interactive session is started on stdin.
#[derive(Parser)]
#[command(version, about, name = "sitesafe")]
pub struct Args {
    /// Path to a JSON content dataset. Defaults to the built-in
    /// seven-day confined space campaign
    #[arg(long, global = true)]
    pub content_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the SiteSafe CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the scenarios of the dataset
    #[command(alias = "ls")]
    List,
    /// Show a scenario and its questions without revealing answers
    Show(ShowArgs),
    /// Validate a content dataset
    Validate(ValidateArgs),
    /// Print the JSON schema of the content dataset
    Schema,
    /// Play the campaign interactively (default)
    Play,
}

/// Show a single scenario
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Scenario key, e.g. `first-day`
    pub key: String,
}

/// Validate a dataset file
#[derive(ClapArgs)]
pub struct ValidateArgs {
    /// Dataset to validate. Defaults to `--content-file`, then the
    /// built-in campaign
    pub path: Option<PathBuf>,
}

//! SiteSafe CLI Application
//!
//! Command-line runner for multi-day safety training campaigns.

mod args;
mod cli;
mod renderer;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{print_schema, validate_content, Cli};
use log::info;
use renderer::TerminalRenderer;
use sitesafe_core::CampaignBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        content_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("SiteSafe started");

    match command.unwrap_or(Play) {
        Validate(args) => validate_content(args.path.or(content_file), &renderer),
        Schema => print_schema(&renderer),
        List => load_cli(content_file, renderer)?.list_scenarios(),
        Show(args) => load_cli(content_file, renderer)?.show_scenario(&args.key),
        Play => load_cli(content_file, renderer)?.play(),
    }
}

fn load_cli(content_file: Option<PathBuf>, renderer: TerminalRenderer) -> Result<Cli> {
    let campaign = CampaignBuilder::new()
        .with_content_path(content_file)
        .build()
        .context("Failed to load campaign content")?;
    Ok(Cli::new(campaign, renderer))
}

//! Command handling for the SiteSafe CLI
//!
//! [`Cli`] runs the one-shot commands (`list`, `show`, `validate`, `schema`)
//! and hands over to the interactive [`Session`] for `play`. The session's
//! own line commands are also defined here with clap derives, following the
//! parameter wrapper pattern:
//!
//! ```text
//! Session line → SessionCommand (clap) → Core Params → Handlers
//! ```
//!
//! Wrappers hold clap attributes and help text; core parameter types stay
//! free of them and are produced through `From` conversions.

use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use sitesafe_core::{
    display::ScenarioCatalog,
    models::CampaignContent,
    params::{OpenScenario, ReviewScenario},
    Campaign, CampaignError, ContentStore, OperationStatus,
};

use crate::{renderer::TerminalRenderer, session::Session};

/// One line of input in the interactive session
#[derive(Parser, Debug)]
#[command(
    name = "",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands available in the interactive session
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start (or restart) the campaign from the first day
    Start,
    /// Show every scenario with its status
    #[command(alias = "d")]
    Dashboard,
    /// Open a scenario card from the dashboard by its number
    #[command(alias = "o")]
    Open(OpenArgs),
    /// Review a scenario by key, read-only with feedback
    #[command(alias = "r")]
    Review(ReviewArgs),
    /// Return to the active scenario
    #[command(alias = "c")]
    Continue,
    /// Answer the current question with the option number shown
    #[command(alias = "a")]
    Answer(AnswerArgs),
    /// Go to the next question
    #[command(alias = "n")]
    Next,
    /// Go to the previous question
    #[command(alias = "p")]
    Prev,
    /// Complete the active scenario once every question is answered
    Complete,
    /// Show overall progress
    Progress,
    /// Print the full campaign state as JSON
    State,
    /// Discard all progress and return to the introduction
    Reset,
    /// Show this help
    #[command(alias = "h", alias = "?")]
    Help,
    /// Leave the session
    #[command(alias = "q", alias = "exit")]
    Quit,
}

/// Open a dashboard card
#[derive(Args, Debug, PartialEq, Eq)]
pub struct OpenArgs {
    /// Card number as shown on the dashboard (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,
}

impl From<OpenArgs> for OpenScenario {
    fn from(args: OpenArgs) -> Self {
        OpenScenario {
            index: args.number as usize - 1,
        }
    }
}

/// Review a scenario
#[derive(Args, Debug, PartialEq, Eq)]
pub struct ReviewArgs {
    /// Scenario key, e.g. `first-day`
    pub key: String,
}

impl From<ReviewArgs> for ReviewScenario {
    fn from(args: ReviewArgs) -> Self {
        ReviewScenario {
            scenario_key: args.key,
        }
    }
}

/// Answer the current question
#[derive(Args, Debug, PartialEq, Eq)]
pub struct AnswerArgs {
    /// Option number as shown under the question (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,
}

impl AnswerArgs {
    /// 0-based display position of the chosen option
    pub fn position(&self) -> usize {
        self.number as usize - 1
    }
}

/// Runs the top-level commands over a loaded campaign
pub struct Cli {
    campaign: Campaign,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(campaign: Campaign, renderer: TerminalRenderer) -> Self {
        Self { campaign, renderer }
    }

    /// List the dataset's scenarios
    pub fn list_scenarios(&self) -> Result<()> {
        let content = self.campaign.content();
        self.renderer.render(&format!("# {}\n\n", content.title()))?;
        self.renderer
            .render(&ScenarioCatalog(content.scenarios()).to_string())
    }

    /// Show one scenario
    pub fn show_scenario(&self, key: &str) -> Result<()> {
        let scenario = self
            .campaign
            .content()
            .scenario_by_key(key)
            .ok_or_else(|| CampaignError::ScenarioNotFound {
                key: key.to_string(),
            })?;
        self.renderer.render(&scenario.to_string())
    }

    /// Run the interactive session on stdin
    pub fn play(self) -> Result<()> {
        info!("Starting interactive session");
        let stdin = io::stdin();
        Session::new(self.campaign, self.renderer).run(stdin.lock())
    }
}

/// Validate a dataset file, or the built-in campaign when no path is given
pub fn validate_content(path: Option<PathBuf>, renderer: &TerminalRenderer) -> Result<()> {
    let (store, source) = match &path {
        Some(path) => (load_content(path)?, path.display().to_string()),
        None => (
            ContentStore::embedded().context("Built-in content is invalid")?,
            "built-in campaign".to_string(),
        ),
    };
    renderer.status(&OperationStatus::success(format!(
        "{source} is valid: {} scenario(s), {} question(s)",
        store.len(),
        store.total_steps()
    )))
}

fn load_content(path: &Path) -> Result<ContentStore> {
    ContentStore::from_path(path)
        .with_context(|| format!("Invalid content file {}", path.display()))
}

/// Print the JSON schema of the content dataset
pub fn print_schema(renderer: &TerminalRenderer) -> Result<()> {
    let schema = schemars::schema_for!(CampaignContent);
    let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    renderer.raw(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> std::result::Result<SessionCommand, clap::Error> {
        SessionLine::try_parse_from(line.split_whitespace()).map(|line| line.command)
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("start").unwrap(), SessionCommand::Start);
        assert_eq!(parse("n").unwrap(), SessionCommand::Next);
        assert_eq!(parse("exit").unwrap(), SessionCommand::Quit);
        assert_eq!(parse("help").unwrap(), SessionCommand::Help);
    }

    #[test]
    fn test_parse_commands_with_arguments() {
        assert_eq!(
            parse("answer 2").unwrap(),
            SessionCommand::Answer(AnswerArgs { number: 2 })
        );
        assert_eq!(
            parse("review first-day").unwrap(),
            SessionCommand::Review(ReviewArgs {
                key: "first-day".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse("answer 0").is_err());
        assert!(parse("answer x").is_err());
        assert!(parse("open").is_err());
        assert!(parse("dance").is_err());
    }

    #[test]
    fn test_open_args_into_params() {
        let params: OpenScenario = OpenArgs { number: 3 }.into();
        assert_eq!(params.index, 2);
    }

    #[test]
    fn test_answer_position() {
        assert_eq!(AnswerArgs { number: 1 }.position(), 0);
    }
}

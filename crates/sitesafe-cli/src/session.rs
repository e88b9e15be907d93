//! Interactive, line-oriented campaign session.
//!
//! Each input line is parsed into a [`SessionCommand`], applied to the owned
//! [`Campaign`] through the core handlers, and answered with the screen that
//! now applies: the introduction, a question, a review, the dashboard or the
//! completion summary. Refused actions print an error line and leave the
//! campaign untouched.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, warn};
use sitesafe_core::{
    display::{ReviewView, ScenarioSummaries, StepView},
    handlers::{
        handle_complete_scenario, handle_continue_scenario, handle_open_scenario,
        handle_review_scenario, handle_select_option,
    },
    params::SelectOption,
    shuffle::OptionOrder,
    Campaign, CampaignError, CampaignPhase, OperationStatus,
};

use crate::{
    cli::{AnswerArgs, SessionCommand, SessionLine},
    renderer::TerminalRenderer,
};

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session over one campaign
pub struct Session {
    campaign: Campaign,
    renderer: TerminalRenderer,
    order: OptionOrder,
}

impl Session {
    pub fn new(campaign: Campaign, renderer: TerminalRenderer) -> Self {
        Self {
            campaign,
            renderer,
            order: OptionOrder::new(),
        }
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead>(mut self, input: R) -> Result<()> {
        self.render_intro()?;
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match SessionLine::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => parsed.command,
                Err(err) => {
                    debug!("Unrecognized input: {line}");
                    self.renderer.render(&err.render().to_string())?;
                    continue;
                }
            };
            if self.execute(command)? == Flow::Quit {
                break;
            }
        }
        self.renderer.render("Goodbye!\n")
    }

    /// Apply one command and render the result
    pub fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Start => {
                self.campaign.start_campaign();
                self.success("Campaign started")?;
                self.render_screen()?;
            }
            SessionCommand::Dashboard => self.render_dashboard()?,
            SessionCommand::Open(args) => {
                match handle_open_scenario(&mut self.campaign, &args.into()) {
                    Ok(_) => self.render_screen()?,
                    Err(err) => self.failure(&err)?,
                }
            }
            SessionCommand::Review(args) => {
                match handle_review_scenario(&mut self.campaign, &args.into()) {
                    Ok(_) => self.render_screen()?,
                    Err(err) => self.failure(&err)?,
                }
            }
            SessionCommand::Continue => match handle_continue_scenario(&mut self.campaign) {
                Ok(_) => self.render_screen()?,
                Err(err) => self.failure(&err)?,
            },
            SessionCommand::Answer(args) => self.answer(&args)?,
            SessionCommand::Next => {
                self.campaign.next_step();
                self.render_screen()?;
            }
            SessionCommand::Prev => {
                self.campaign.prev_step();
                self.render_screen()?;
            }
            SessionCommand::Complete => match handle_complete_scenario(&mut self.campaign) {
                Ok(result) => {
                    self.renderer.render(&result.to_string())?;
                    self.renderer.render("\n")?;
                    self.render_screen()?;
                }
                Err(err) => self.failure(&err)?,
            },
            SessionCommand::Progress => self.render_progress()?,
            SessionCommand::State => {
                let json = serde_json::to_string_pretty(&self.campaign.snapshot())
                    .context("Failed to serialize campaign state")?;
                self.renderer.raw(&json)?;
            }
            SessionCommand::Reset => {
                self.campaign.reset_campaign();
                self.success("Campaign reset")?;
                self.render_intro()?;
            }
            SessionCommand::Help => {
                let help = SessionLine::command().render_help().to_string();
                self.renderer.render(&format!("{help}\n"))?;
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn answer(&mut self, args: &AnswerArgs) -> Result<()> {
        let Some(step) = self.campaign.current_step() else {
            return self.failure(&CampaignError::NotStarted);
        };
        let Some(option) = self.order.option_at(step, args.position()) else {
            warn!("Option {} does not exist for step '{}'", args.number, step.id);
            return self.renderer.status(&OperationStatus::failure(format!(
                "There is no option {} for this question",
                args.number
            )));
        };
        let params = SelectOption::new(&step.id, &option.id);

        match handle_select_option(&mut self.campaign, &params) {
            Ok(feedback) => {
                self.renderer.render(&feedback.to_string())?;
                self.renderer.render("\n")?;
                self.render_hint()
            }
            Err(err) => self.failure(&err),
        }
    }

    /// Suggest the next action after an answer
    fn render_hint(&self) -> Result<()> {
        let last = self
            .campaign
            .step_position()
            .is_some_and(|position| position.is_last());
        let hint = if self.campaign.can_complete_scenario() {
            "All questions are answered. Type `complete` to finish this day."
        } else if last {
            let outstanding = self.campaign.outstanding_vital_steps().len();
            if outstanding > 0 {
                "Some vital questions still need a correct answer. Use `prev` to revisit them."
            } else {
                "Some questions are still unanswered. Use `prev` to revisit them."
            }
        } else {
            "Type `next` for the next question."
        };
        self.renderer.render(&format!("*{hint}*\n"))
    }

    fn render_intro(&self) -> Result<()> {
        self.renderer.render(&self.campaign.content().to_string())?;
        self.renderer
            .render("\nType `start` to begin, or `help` for all commands.\n")
    }

    fn render_dashboard(&self) -> Result<()> {
        let content = self.campaign.content();
        self.renderer.render(&format!(
            "# {}\n\nProgress: {}\n\n",
            content.title(),
            self.campaign.progress()
        ))?;
        self.renderer
            .render(&ScenarioSummaries(self.campaign.summaries()).to_string())
    }

    fn render_progress(&self) -> Result<()> {
        let progress = self.campaign.progress();
        let mut text = format!("Progress: {progress}\n");
        if let Some(scenario) = self.campaign.active_scenario() {
            text.push_str(&format!(
                "Current day: {} ({} point(s))\n",
                scenario.title,
                self.campaign.current_scenario_points()
            ));
        }
        self.renderer.render(&text)
    }

    /// Render whatever the campaign state says is on screen
    fn render_screen(&mut self) -> Result<()> {
        match self.campaign.phase() {
            CampaignPhase::Intro => self.render_intro(),
            CampaignPhase::Complete if !self.campaign.is_in_review_mode() => {
                self.renderer.render(&format!(
                    "# Campaign Complete\n\nYou have completed every day of {}.\n\n",
                    self.campaign.content().title()
                ))?;
                self.render_dashboard()
            }
            _ if self.campaign.is_in_review_mode() => {
                match ReviewView::current(&self.campaign) {
                    Some(review) => self.renderer.render(&review.to_string())?,
                    None => self.renderer.render("No scenario selected.\n")?,
                }
                self.renderer
                    .render("*Review mode: answers are read-only. Type `continue` to resume.*\n")
            }
            _ => {
                let Some(scenario) = self.campaign.viewed_scenario() else {
                    return self.renderer.render("No scenario selected.\n");
                };
                let header = format!("# Day {}: {}\n\n", scenario.day, scenario.title);
                match StepView::current(&self.campaign, &mut self.order) {
                    Some(view) => {
                        let body = view.to_string();
                        self.renderer.render(&header)?;
                        self.renderer.render(&body)
                    }
                    None => self.renderer.render("No question selected.\n"),
                }
            }
        }
    }

    fn success(&self, message: &str) -> Result<()> {
        self.renderer.status(&OperationStatus::success(message))
    }

    fn failure(&self, err: &CampaignError) -> Result<()> {
        debug!("Refused: {err}");
        self.renderer.status(&OperationStatus::from(err))
    }
}

#[cfg(test)]
mod tests {
    use sitesafe_core::CampaignBuilder;

    use super::*;
    use crate::cli::{OpenArgs, ReviewArgs};

    fn create_session() -> Session {
        let campaign = CampaignBuilder::new().build().unwrap();
        Session::new(campaign, TerminalRenderer::new(false))
    }

    #[test]
    fn test_quit_stops_session() {
        let mut session = create_session();
        assert_eq!(session.execute(SessionCommand::Quit).unwrap(), Flow::Quit);
        assert_eq!(session.execute(SessionCommand::Help).unwrap(), Flow::Continue);
    }

    #[test]
    fn test_answer_uses_displayed_order() {
        let mut session = create_session();
        session.execute(SessionCommand::Start).unwrap();
        session.execute(SessionCommand::Next).unwrap();

        // ppe-selection displays its options as [1, 2, 0]
        let step = session.campaign.current_step().unwrap().clone();
        session
            .execute(SessionCommand::Answer(AnswerArgs { number: 3 }))
            .unwrap();
        assert_eq!(
            session.campaign.choice_for("first-day", "ppe-selection"),
            Some(step.options[0].id.as_str())
        );
    }

    #[test]
    fn test_refused_commands_leave_state() {
        let mut session = create_session();
        let before = session.campaign.snapshot();

        session
            .execute(SessionCommand::Answer(AnswerArgs { number: 1 }))
            .unwrap();
        session
            .execute(SessionCommand::Open(OpenArgs { number: 1 }))
            .unwrap();
        session
            .execute(SessionCommand::Review(ReviewArgs {
                key: "first-day".to_string(),
            }))
            .unwrap();
        session.execute(SessionCommand::Complete).unwrap();

        assert_eq!(session.campaign.snapshot(), before);
    }

    #[test]
    fn test_run_reads_until_quit() {
        let session = create_session();
        let input = "start\n\nanswer 1\nquit\nstart\n";
        assert!(session.run(input.as_bytes()).is_ok());
    }
}

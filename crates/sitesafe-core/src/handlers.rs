//! Core handler functions for unified campaign workflows.
//!
//! The [`Campaign`] commands are total: a request that does not apply is
//! silently ignored. Interfaces need to tell the learner *why* nothing
//! happened, so each handler checks the request first, returns a
//! [`CampaignError`] describing the refusal with the state left untouched,
//! and otherwise runs the command and returns structured data for display.
//!
//! ```text
//! Interface → Handler → Campaign (commands + queries) → Models
//! ```
//!
//! - **Handlers**: request checks and result shaping (this module)
//! - **Parameters**: request parameters ([`crate::params`])
//! - **Campaign**: the progression state machine ([`crate::campaign`])
//! - **Models**: content and projections ([`crate::models`])
//!
//! # Examples
//!
//! ```rust
//! use sitesafe_core::{
//!     handlers::{handle_complete_scenario, handle_select_option},
//!     params::SelectOption,
//!     CampaignBuilder, CampaignError,
//! };
//!
//! let mut campaign = CampaignBuilder::new().build()?;
//! campaign.start_campaign();
//!
//! let feedback = handle_select_option(
//!     &mut campaign,
//!     &SelectOption::new("permit-review", "permit-correct"),
//! )?;
//! assert!(feedback.correct);
//! assert_eq!(feedback.points, 1);
//!
//! // Two steps are still unanswered
//! let refused = handle_complete_scenario(&mut campaign);
//! assert!(matches!(
//!     refused,
//!     Err(CampaignError::VitalStepsIncomplete { outstanding: 2, .. })
//! ));
//! # Ok::<(), sitesafe_core::CampaignError>(())
//! ```

use log::debug;
use serde::Serialize;

use crate::{
    campaign::Campaign,
    error::{CampaignError, Result},
    models::{Scenario, ScenarioStatus},
    params::{OpenScenario, ReviewScenario, SelectOption},
};

/// Outcome of answering a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    /// Step that was answered
    pub step_id: String,
    /// Option that was recorded
    pub option_id: String,
    /// Whether the recorded option is correct
    pub correct: bool,
    /// Feedback text of the recorded option
    pub feedback: String,
    /// Points now held for the scenario the step belongs to
    pub points: u32,
}

/// Outcome of completing the active scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    /// Key of the scenario that was completed
    pub scenario_key: String,
    /// Points held for that scenario at completion
    pub points: u32,
    /// Key of the scenario that became active, if the campaign advanced
    pub next_scenario: Option<String>,
    /// Whether every scenario is now completed
    pub campaign_complete: bool,
}

/// Handle answering a step of the viewed scenario.
///
/// # Errors
///
/// * `CampaignError::NotStarted` - The campaign has not been started
/// * `CampaignError::AnswersLocked` - The viewed scenario is in review mode
/// * `CampaignError::StepNotFound` - The step is not part of the viewed scenario
/// * `CampaignError::OptionNotFound` - The option does not belong to the step
pub fn handle_select_option(
    campaign: &mut Campaign,
    params: &SelectOption,
) -> Result<AnswerFeedback> {
    if campaign.current_scenario_index().is_none() {
        return Err(CampaignError::NotStarted);
    }
    let step_not_found = || CampaignError::StepNotFound {
        step_id: params.step_id.clone(),
    };
    let scenario = campaign.viewed_scenario().ok_or_else(step_not_found)?;
    if campaign.is_in_review_mode() {
        return Err(CampaignError::AnswersLocked {
            scenario_key: scenario.scenario_key.clone(),
        });
    }
    let step = scenario.step(&params.step_id).ok_or_else(step_not_found)?;
    if step.option(&params.option_id).is_none() {
        return Err(CampaignError::OptionNotFound {
            step_id: params.step_id.clone(),
            option_id: params.option_id.clone(),
        });
    }
    let scenario_key = scenario.scenario_key.clone();

    let (correct, feedback) = campaign
        .select_option(&params.step_id, &params.option_id)
        .map(|option| (option.correct, option.feedback.clone()))
        .ok_or_else(step_not_found)?;

    Ok(AnswerFeedback {
        step_id: params.step_id.clone(),
        option_id: params.option_id.clone(),
        correct,
        feedback,
        points: campaign.scenario_points(&scenario_key),
    })
}

/// Handle completing the active scenario, gated on
/// [`Campaign::can_complete_scenario`].
///
/// # Errors
///
/// * `CampaignError::NotStarted` - There is no active scenario
/// * `CampaignError::VitalStepsIncomplete` - Steps are unanswered or a vital
///   step is answered wrongly; `outstanding` counts those steps
pub fn handle_complete_scenario(campaign: &mut Campaign) -> Result<CompletionResult> {
    let scenario = campaign.active_scenario().ok_or(CampaignError::NotStarted)?;
    let scenario_key = scenario.scenario_key.clone();

    if !campaign.can_complete_scenario() {
        let vital: Vec<&str> = campaign
            .outstanding_vital_steps()
            .iter()
            .map(|step| step.id.as_str())
            .collect();
        let unanswered_other = campaign
            .unanswered_steps()
            .iter()
            .filter(|step| !vital.contains(&step.id.as_str()))
            .count();
        debug!("Refusing completion of '{scenario_key}'");
        return Err(CampaignError::VitalStepsIncomplete {
            scenario_key,
            outstanding: vital.len() + unanswered_other,
        });
    }

    let points = campaign.current_scenario_points();
    let before = campaign.current_scenario_index();
    campaign.complete_current_scenario();
    let next_scenario = if campaign.current_scenario_index() != before {
        campaign
            .active_scenario()
            .map(|scenario| scenario.scenario_key.clone())
    } else {
        None
    };

    Ok(CompletionResult {
        scenario_key,
        points,
        next_scenario,
        campaign_complete: campaign.is_all_scenarios_completed(),
    })
}

/// Handle reviewing a scenario by key.
///
/// Only scenarios that are not locked can be reviewed.
///
/// # Errors
///
/// * `CampaignError::ScenarioNotFound` - No scenario has the key
/// * `CampaignError::ScenarioLocked` - The scenario lies ahead of the learner
pub fn handle_review_scenario<'c>(
    campaign: &'c mut Campaign,
    params: &ReviewScenario,
) -> Result<&'c Scenario> {
    let index = campaign
        .content()
        .index_of_key(&params.scenario_key)
        .ok_or_else(|| CampaignError::ScenarioNotFound {
            key: params.scenario_key.clone(),
        })?;
    if campaign.is_scenario_locked(index) {
        return Err(CampaignError::ScenarioLocked { index });
    }
    campaign.set_scenario_for_review(&params.scenario_key);
    campaign
        .viewed_scenario()
        .ok_or_else(|| CampaignError::ScenarioNotFound {
            key: params.scenario_key.clone(),
        })
}

/// Handle returning to the active scenario.
///
/// # Errors
///
/// * `CampaignError::NotStarted` - There is no active scenario
pub fn handle_continue_scenario(campaign: &mut Campaign) -> Result<&Scenario> {
    if campaign.active_scenario().is_none() {
        return Err(CampaignError::NotStarted);
    }
    campaign.continue_active_scenario();
    campaign.active_scenario().ok_or(CampaignError::NotStarted)
}

/// Handle the action of a dashboard card.
///
/// The active scenario is continued and a completed scenario is reviewed.
/// Returns the card's status before the action.
///
/// # Errors
///
/// * `CampaignError::NotStarted` - The campaign has not been started
/// * `CampaignError::ScenarioLocked` - The index is ahead of the active
///   scenario and not completed, or out of range
pub fn handle_open_scenario(
    campaign: &mut Campaign,
    params: &OpenScenario,
) -> Result<ScenarioStatus> {
    if campaign.current_scenario_index().is_none() {
        return Err(CampaignError::NotStarted);
    }
    let index = params.index;
    let status = campaign
        .scenario_status(index)
        .ok_or(CampaignError::ScenarioLocked { index })?;

    if campaign.current_scenario_index() == Some(index) {
        if campaign.viewing_scenario_index() != Some(index) {
            campaign.reset_steps();
        }
        campaign.continue_active_scenario();
        return Ok(status);
    }

    // Completion is the only way past a scenario, so every card before the
    // active one is completed and every other card lies ahead of it.
    if status != ScenarioStatus::Completed {
        return Err(CampaignError::ScenarioLocked { index });
    }
    let key = campaign
        .content()
        .scenario_by_index(index)
        .map(|scenario| scenario.scenario_key.clone())
        .ok_or(CampaignError::ScenarioLocked { index })?;
    campaign.set_scenario_for_review(&key);
    Ok(status)
}

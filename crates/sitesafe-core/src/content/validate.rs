//! Load-time validation of campaign datasets.
//!
//! Rules enforced:
//!
//! - scenario keys are non-empty and unique
//! - scenarios are ordered by non-decreasing day
//! - every scenario has at least one step
//! - step ids are non-empty and unique within their scenario
//! - every step has at least two options with unique, non-empty ids
//! - every step has exactly one correct option

use std::collections::HashSet;

use crate::{
    error::{CampaignError, Result},
    models::{CampaignContent, SafetyStep},
};

/// Validates a dataset, returning the first violation found.
pub fn validate_content(content: &CampaignContent) -> Result<()> {
    let mut keys = HashSet::new();
    let mut previous_day = None;

    for (index, scenario) in content.scenarios.iter().enumerate() {
        let field = format!("scenarios[{index}]");

        if scenario.scenario_key.trim().is_empty() {
            return Err(CampaignError::invalid_content(format!("{field}.scenarioKey"))
                .with_reason("scenario key must not be empty"));
        }
        if !keys.insert(scenario.scenario_key.as_str()) {
            return Err(CampaignError::invalid_content(format!("{field}.scenarioKey"))
                .with_reason(format!(
                    "duplicate scenario key '{}'",
                    scenario.scenario_key
                )));
        }
        if let Some(previous) = previous_day
            && scenario.day < previous
        {
            return Err(CampaignError::invalid_content(format!("{field}.day"))
                .with_reason(format!(
                    "day {} comes after day {previous}; scenarios must be ordered by day",
                    scenario.day
                )));
        }
        previous_day = Some(scenario.day);

        if scenario.steps.is_empty() {
            return Err(CampaignError::invalid_content(format!("{field}.steps"))
                .with_reason("a scenario needs at least one step"));
        }

        let mut step_ids = HashSet::new();
        for (step_index, step) in scenario.steps.iter().enumerate() {
            let step_field = format!("{field}.steps[{step_index}]");
            if step.id.trim().is_empty() {
                return Err(CampaignError::invalid_content(format!("{step_field}.id"))
                    .with_reason("step id must not be empty"));
            }
            if !step_ids.insert(step.id.as_str()) {
                return Err(CampaignError::invalid_content(format!("{step_field}.id"))
                    .with_reason(format!(
                        "duplicate step id '{}' in scenario '{}'",
                        step.id, scenario.scenario_key
                    )));
            }
            validate_options(&step_field, step)?;
        }
    }

    Ok(())
}

fn validate_options(field: &str, step: &SafetyStep) -> Result<()> {
    if step.options.len() < 2 {
        return Err(CampaignError::invalid_content(format!("{field}.options"))
            .with_reason(format!(
                "step '{}' needs at least two options, found {}",
                step.id,
                step.options.len()
            )));
    }

    let mut option_ids = HashSet::new();
    for (option_index, option) in step.options.iter().enumerate() {
        if option.id.trim().is_empty() {
            return Err(
                CampaignError::invalid_content(format!("{field}.options[{option_index}].id"))
                    .with_reason("option id must not be empty"),
            );
        }
        if !option_ids.insert(option.id.as_str()) {
            return Err(
                CampaignError::invalid_content(format!("{field}.options[{option_index}].id"))
                    .with_reason(format!(
                        "duplicate option id '{}' in step '{}'",
                        option.id, step.id
                    )),
            );
        }
    }

    let correct = step.options.iter().filter(|option| option.correct).count();
    if correct != 1 {
        return Err(CampaignError::invalid_content(format!("{field}.options"))
            .with_reason(format!(
                "step '{}' must have exactly one correct option, found {correct}",
                step.id
            )));
    }

    Ok(())
}

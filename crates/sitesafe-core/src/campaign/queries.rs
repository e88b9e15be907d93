//! Read-only queries over the campaign state.
//!
//! Gating ([`Campaign::can_complete_scenario`]) and completion
//! ([`Campaign::is_all_scenarios_completed`]) are answered here and only
//! here, so interfaces never recompute them.

use super::{Campaign, ChoiceKey};
use crate::models::{
    CampaignPhase, CampaignProgress, SafetyStep, Scenario, ScenarioStatus, ScenarioSummary,
    StepOption, StepPosition,
};

impl Campaign {
    /// The active scenario, if the campaign has started and the index is in
    /// range.
    pub fn active_scenario(&self) -> Option<&Scenario> {
        self.current_scenario
            .and_then(|index| self.content.scenario_by_index(index))
    }

    /// The scenario on screen, if any.
    pub fn viewed_scenario(&self) -> Option<&Scenario> {
        self.viewing_scenario
            .and_then(|index| self.content.scenario_by_index(index))
    }

    /// The step on screen, if any.
    pub fn current_step(&self) -> Option<&SafetyStep> {
        self.viewed_scenario()
            .and_then(|scenario| scenario.steps.get(self.current_step))
    }

    /// "Step i of n" position within the viewed scenario.
    pub fn step_position(&self) -> Option<StepPosition> {
        self.viewed_scenario().map(|scenario| StepPosition {
            index: self.current_step,
            total: scenario.steps.len(),
        })
    }

    /// Recorded option id for a step of a given scenario.
    pub fn choice_for(&self, scenario_key: &str, step_id: &str) -> Option<&str> {
        self.choices
            .get(&ChoiceKey::new(scenario_key, step_id))
            .map(String::as_str)
    }

    /// Recorded option for step `step_id` of the viewed scenario.
    pub fn selected_option(&self, step_id: &str) -> Option<&StepOption> {
        let scenario = self.viewed_scenario()?;
        let step = scenario.step(step_id)?;
        let option_id = self.choice_for(&scenario.scenario_key, step_id)?;
        step.option(option_id)
    }

    fn is_answered_correctly(&self, scenario: &Scenario, step: &SafetyStep) -> bool {
        self.choice_for(&scenario.scenario_key, &step.id)
            .is_some_and(|option_id| step.is_correct(option_id))
    }

    /// Vital steps of the active scenario that lack a correct answer.
    pub fn outstanding_vital_steps(&self) -> Vec<&SafetyStep> {
        let Some(scenario) = self.active_scenario() else {
            return Vec::new();
        };
        scenario
            .vital_steps()
            .filter(|step| !self.is_answered_correctly(scenario, step))
            .collect()
    }

    /// Steps of the active scenario without any recorded answer.
    pub fn unanswered_steps(&self) -> Vec<&SafetyStep> {
        let Some(scenario) = self.active_scenario() else {
            return Vec::new();
        };
        scenario
            .steps
            .iter()
            .filter(|step| self.choice_for(&scenario.scenario_key, &step.id).is_none())
            .collect()
    }

    /// Whether the active scenario may be completed: every vital step
    /// answered correctly and every step answered.
    ///
    /// This always refers to the active scenario, never the viewed one.
    pub fn can_complete_scenario(&self) -> bool {
        self.active_scenario().is_some()
            && self.outstanding_vital_steps().is_empty()
            && self.unanswered_steps().is_empty()
    }

    /// Points of the active scenario.
    pub fn current_scenario_points(&self) -> u32 {
        self.active_scenario()
            .map_or(0, |scenario| self.scenario_points(&scenario.scenario_key))
    }

    /// Points held for `scenario_key`; 0 if never scored.
    pub fn scenario_points(&self, scenario_key: &str) -> u32 {
        self.points.get(scenario_key).copied().unwrap_or(0)
    }

    /// Recounts, from the recorded answers, how many steps of `scenario_key`
    /// are currently answered correctly.
    pub fn correct_answer_count(&self, scenario_key: &str) -> u32 {
        self.content
            .scenario_by_key(scenario_key)
            .map_or(0, |scenario| {
                scenario
                    .steps
                    .iter()
                    .filter(|step| self.is_answered_correctly(scenario, step))
                    .count() as u32
            })
    }

    /// Whether every scenario of a non-empty campaign is completed.
    pub fn is_all_scenarios_completed(&self) -> bool {
        !self.content.is_empty()
            && self.completed.len() == self.content.len()
            && self.content.keys().all(|key| self.completed.contains(key))
    }

    /// Whether `index` is locked for direct selection: ahead of the active
    /// scenario and not completed. Out-of-range indices are locked.
    pub fn is_scenario_locked(&self, index: usize) -> bool {
        let Some(scenario) = self.content.scenario_by_index(index) else {
            return true;
        };
        let ahead = self.current_scenario.is_none_or(|current| index > current);
        ahead && !self.completed.contains(&scenario.scenario_key)
    }

    /// Dashboard state of the scenario at `index`.
    pub fn scenario_status(&self, index: usize) -> Option<ScenarioStatus> {
        let scenario = self.content.scenario_by_index(index)?;
        let status = if self.completed.contains(&scenario.scenario_key) {
            ScenarioStatus::Completed
        } else if self.current_scenario == Some(index) {
            ScenarioStatus::Active
        } else if self.is_scenario_locked(index) {
            ScenarioStatus::Locked
        } else {
            ScenarioStatus::Available
        };
        Some(status)
    }

    /// One summary per scenario, in campaign order.
    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.content
            .scenarios()
            .iter()
            .enumerate()
            .map(|(index, scenario)| {
                let status = self
                    .scenario_status(index)
                    .unwrap_or(ScenarioStatus::Locked);
                ScenarioSummary::from_scenario(
                    index,
                    scenario,
                    status,
                    self.scenario_points(&scenario.scenario_key),
                )
            })
            .collect()
    }

    /// Completed versus total scenario counts.
    pub fn progress(&self) -> CampaignProgress {
        let completed = self
            .content
            .keys()
            .filter(|key| self.completed.contains(*key))
            .count();
        CampaignProgress {
            completed,
            total: self.content.len(),
        }
    }

    /// Which top-level screen applies.
    pub fn phase(&self) -> CampaignPhase {
        if self.current_scenario.is_none() {
            CampaignPhase::Intro
        } else if self.is_all_scenarios_completed() {
            CampaignPhase::Complete
        } else {
            CampaignPhase::InProgress
        }
    }
}

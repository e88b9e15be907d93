//! State-changing commands of the campaign.
//!
//! Every command is total: inputs that do not apply to the current state
//! (unknown keys, out-of-range indices, answers during review) leave the
//! state untouched instead of failing.

use log::debug;

use super::{Campaign, ChoiceKey};
use crate::models::StepOption;

impl Campaign {
    /// Moves to the first scenario and discards all answers and points.
    ///
    /// Calling this mid-campaign is a hard reset of progression data; the
    /// set of completed scenarios is kept.
    pub fn start_campaign(&mut self) {
        debug!("Starting campaign");
        self.current_scenario = Some(0);
        self.viewing_scenario = Some(0);
        self.current_step = 0;
        self.choices.clear();
        self.points.clear();
        self.review_mode = false;
    }

    /// Records `option_id` as the answer to step `step_id` of the viewed
    /// scenario and updates that scenario's points.
    ///
    /// Returns the recorded option, or `None` when the selection was ignored:
    /// in review mode, before the campaign starts, or when the step or option
    /// is not part of the viewed scenario.
    pub fn select_option(&mut self, step_id: &str, option_id: &str) -> Option<&StepOption> {
        if self.review_mode {
            debug!("Ignoring answer for step '{step_id}': review mode");
            return None;
        }
        let Some(scenario) = self
            .viewing_scenario
            .and_then(|index| self.content.scenario_by_index(index))
        else {
            debug!("Ignoring answer for step '{step_id}': no scenario in view");
            return None;
        };
        let Some(step) = scenario.step(step_id) else {
            debug!(
                "Ignoring answer: step '{step_id}' is not in scenario '{}'",
                scenario.scenario_key
            );
            return None;
        };
        let Some(option) = step.option(option_id) else {
            debug!("Ignoring answer: option '{option_id}' is not in step '{step_id}'");
            return None;
        };

        let key = ChoiceKey::new(&scenario.scenario_key, step_id);
        let previous = self.choices.insert(key, option_id.to_string());

        let mut delta: i64 = 0;
        match previous.as_deref() {
            // Re-selecting the same option never changes the score
            Some(prev) if prev == option_id => {}
            prev => {
                if prev.is_some_and(|prev| step.is_correct(prev)) {
                    delta -= 1;
                }
                if option.correct {
                    delta += 1;
                }
            }
        }

        let bucket = self
            .points
            .entry(scenario.scenario_key.clone())
            .or_insert(0);
        *bucket = (i64::from(*bucket) + delta).max(0) as u32;

        debug!(
            "Recorded '{option_id}' for step '{step_id}' in '{}' (delta {delta}, points {})",
            scenario.scenario_key, *bucket
        );
        Some(option)
    }

    /// Advances to the next step of the viewed scenario, if there is one.
    pub fn next_step(&mut self) {
        let total = self.viewed_scenario().map_or(0, |scenario| scenario.steps.len());
        if self.current_step + 1 < total {
            self.current_step += 1;
        }
    }

    /// Goes back one step, if not already at the first.
    pub fn prev_step(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    /// Returns to the first step.
    pub fn reset_steps(&mut self) {
        self.current_step = 0;
    }

    /// Marks the active scenario completed and moves on to the next one.
    ///
    /// This does not check [`Campaign::can_complete_scenario`]; interfaces
    /// gate the action on that query (see
    /// [`crate::handlers::handle_complete_scenario`]). On the last scenario
    /// the indices stay put and the campaign is complete once every key is
    /// recorded.
    ///
    /// Calling it twice in a row advances twice: the second call completes
    /// the newly active scenario. Only the gated handler refuses a repeated
    /// completion, since the new scenario has no answers yet.
    pub fn complete_current_scenario(&mut self) {
        let Some(index) = self.current_scenario else {
            debug!("Ignoring completion: campaign not started");
            return;
        };
        let Some(scenario) = self.content.scenario_by_index(index) else {
            debug!("Ignoring completion: active index {index} out of range");
            return;
        };

        if self.completed.insert(scenario.scenario_key.clone()) {
            debug!("Completed scenario '{}'", scenario.scenario_key);
        }

        if index + 1 < self.content.len() {
            self.current_scenario = Some(index + 1);
            self.viewing_scenario = Some(index + 1);
            self.review_mode = false;
        }
        self.current_step = 0;
    }

    /// Views the scenario `scenario_key` read-only with feedback shown.
    ///
    /// Returns `false` and leaves state unchanged if the key is unknown.
    pub fn set_scenario_for_review(&mut self, scenario_key: &str) -> bool {
        let Some(index) = self.content.index_of_key(scenario_key) else {
            debug!("Ignoring review: unknown scenario '{scenario_key}'");
            return false;
        };
        self.viewing_scenario = Some(index);
        self.current_step = 0;
        self.review_mode = true;
        true
    }

    /// Returns the view to the active scenario and leaves review mode.
    pub fn continue_active_scenario(&mut self) {
        self.viewing_scenario = self.current_scenario;
        self.review_mode = false;
    }

    /// Views an unlocked scenario by index without entering review mode.
    ///
    /// Returns `false` and leaves state unchanged for locked or out-of-range
    /// indices.
    pub fn view_scenario(&mut self, index: usize) -> bool {
        if index >= self.content.len() || self.is_scenario_locked(index) {
            debug!("Ignoring view of scenario {index}: locked or out of range");
            return false;
        }
        self.viewing_scenario = Some(index);
        self.current_step = 0;
        self.review_mode = false;
        true
    }

    /// Restores every field to its initial, not-started value.
    pub fn reset_campaign(&mut self) {
        debug!("Resetting campaign");
        self.current_scenario = None;
        self.viewing_scenario = None;
        self.current_step = 0;
        self.choices.clear();
        self.points.clear();
        self.completed.clear();
        self.review_mode = false;
    }
}

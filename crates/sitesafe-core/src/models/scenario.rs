//! Scenario model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SafetyStep;

/// One day of the campaign: an ordered list of safety steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Scenario {
    /// Title of the scenario
    pub title: String,

    /// Campaign day; scenarios are ordered by day
    pub day: u32,

    /// Stable identity used for completion tracking and review
    pub scenario_key: String,

    /// Short introduction shown above the questions
    pub description: String,

    /// Steps in the order they are presented
    pub steps: Vec<SafetyStep>,
}

impl Scenario {
    /// Looks up a step of this scenario by id.
    pub fn step(&self, step_id: &str) -> Option<&SafetyStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    /// Iterates over the vital steps of this scenario.
    pub fn vital_steps(&self) -> impl Iterator<Item = &SafetyStep> {
        self.steps.iter().filter(|step| step.vital)
    }
}

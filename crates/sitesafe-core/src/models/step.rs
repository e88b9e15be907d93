//! Safety step model definition and related functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StepOption;

/// A single question within a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SafetyStep {
    /// Identifier of the step, unique within its scenario
    pub id: String,

    /// The question asked
    pub description: String,

    /// A vital step must be answered correctly before the scenario can be
    /// completed
    #[serde(default)]
    pub vital: bool,

    /// Candidate answers in authored order
    pub options: Vec<StepOption>,
}

impl SafetyStep {
    /// Looks up an option of this step by id.
    pub fn option(&self, option_id: &str) -> Option<&StepOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Returns the option marked correct, if any.
    pub fn correct_option(&self) -> Option<&StepOption> {
        self.options.iter().find(|option| option.correct)
    }

    /// Whether `option_id` names a correct option of this step.
    ///
    /// Unknown option ids are never correct.
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.option(option_id).is_some_and(|option| option.correct)
    }
}

//! Answer option model.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One multiple-choice answer of a safety step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepOption {
    /// Identifier of the option, unique within its step
    pub id: String,

    /// Answer text shown to the learner
    pub text: String,

    /// Whether this is the correct answer
    pub correct: bool,

    /// Explanation shown once the option has been selected
    pub feedback: String,
}

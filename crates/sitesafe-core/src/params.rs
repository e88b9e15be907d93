//! Parameter structures for campaign operations
//!
//! These structures are shared by every interface that drives a campaign
//! (the terminal session, tests, future front ends) without framework-specific
//! derives. Interface layers wrap them with their own derives (`clap::Args`
//! in the CLI) and convert into these types before calling a handler in
//! [`crate::handlers`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Session input  │    │  Core Params    │    │    Handlers     │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│ (Campaign ops)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for these types is available behind the `schema`
//! feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for answering a step of the viewed scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectOption {
    /// Id of the step being answered
    pub step_id: String,
    /// Id of the chosen option
    pub option_id: String,
}

impl SelectOption {
    /// Convenience constructor.
    pub fn new(step_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            step_id: step_id.into(),
            option_id: option_id.into(),
        }
    }
}

/// Parameters for reviewing a scenario by its key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReviewScenario {
    /// Stable key of the scenario to review
    pub scenario_key: String,
}

/// Parameters for opening a scenario card on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OpenScenario {
    /// Position of the scenario in the campaign (0-indexed)
    pub index: usize,
}

//! Error types for the campaign library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for content loading and handler operations.
///
/// The state machine commands themselves never fail; these errors are
/// produced while loading a dataset or by the handler layer when it refuses
/// a request and needs to tell the interface why.
#[derive(Error, Debug)]
pub enum CampaignError {
    /// Content dataset failed validation
    #[error("Invalid content for field '{field}': {reason}")]
    InvalidContent { field: String, reason: String },
    /// Scenario not found for the given key
    #[error("Scenario with key '{key}' not found")]
    ScenarioNotFound { key: String },
    /// Step not found in the viewed scenario
    #[error("Step '{step_id}' is not part of the scenario being viewed")]
    StepNotFound { step_id: String },
    /// Option not found in the given step
    #[error("Option '{option_id}' is not an option of step '{step_id}'")]
    OptionNotFound { step_id: String, option_id: String },
    /// Scenario cannot be opened yet
    #[error("Scenario {} is locked until the previous days are completed", .index + 1)]
    ScenarioLocked { index: usize },
    /// Campaign has not been started
    #[error("The campaign has not been started yet")]
    NotStarted,
    /// Answers cannot change while reviewing
    #[error("Answers for scenario '{scenario_key}' cannot be changed in review mode")]
    AnswersLocked { scenario_key: String },
    /// Completion refused because steps are unanswered or vital steps are wrong
    #[error(
        "Scenario '{scenario_key}' cannot be completed: {outstanding} step(s) still need attention"
    )]
    VitalStepsIncomplete {
        scenario_key: String,
        outstanding: usize,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating content validation errors.
pub struct InvalidContentBuilder {
    field: String,
}

impl InvalidContentBuilder {
    /// Create a new invalid content error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CampaignError {
        CampaignError::InvalidContent {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CampaignError {
    /// Creates a builder for content validation errors.
    pub fn invalid_content(field: impl Into<String>) -> InvalidContentBuilder {
        InvalidContentBuilder::new(field)
    }
}

/// Result type alias for campaign operations
pub type Result<T> = std::result::Result<T, CampaignError>;

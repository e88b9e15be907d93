//! Status enumerations for scenarios and the campaign as a whole.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the state of a scenario card on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    /// Scenario has been finished and passed gating
    Completed,

    /// Scenario is the learner's current position in the campaign
    Active,

    /// Scenario can be opened but is neither completed nor active
    Available,

    /// Scenario lies ahead of the learner's position
    Locked,
}

impl ScenarioStatus {
    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for finished scenarios
    /// - `➤ Active` - Arrow for the scenario in progress
    /// - `○ Available` - Circle for openable scenarios
    /// - `✗ Locked` - Cross for scenarios not reached yet
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sitesafe_core::models::ScenarioStatus;
    ///
    /// assert_eq!(ScenarioStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ScenarioStatus::Locked.with_icon(), "✗ Locked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ScenarioStatus::Completed => "✓ Completed",
            ScenarioStatus::Active => "➤ Active",
            ScenarioStatus::Available => "○ Available",
            ScenarioStatus::Locked => "✗ Locked",
        }
    }

    /// Label of the action offered for a scenario in this state.
    pub fn action_label(&self) -> &'static str {
        match self {
            ScenarioStatus::Completed => "Review",
            ScenarioStatus::Active => "Continue",
            ScenarioStatus::Available => "Start",
            ScenarioStatus::Locked => "Locked",
        }
    }
}

/// Which top-level screen the campaign is in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignPhase {
    /// Not started; the intro screen is shown
    Intro,

    /// Started and not every scenario is completed
    InProgress,

    /// Every scenario has been completed
    Complete,
}

//! Summary and progress projections of the campaign state.

use serde::{Deserialize, Serialize};

use super::{Scenario, ScenarioStatus};

/// Summary information about a scenario for dashboard listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioSummary {
    /// Position of the scenario in the campaign (0-indexed)
    pub index: usize,
    /// Campaign day
    pub day: u32,
    /// Stable scenario key
    pub scenario_key: String,
    /// Title of the scenario
    pub title: String,
    /// Short description
    pub description: String,
    /// Dashboard state
    pub status: ScenarioStatus,
    /// Points currently held for this scenario
    pub points: u32,
    /// Total number of steps
    pub total_steps: u32,
    /// Number of vital steps
    pub vital_steps: u32,
}

impl ScenarioSummary {
    /// Create a summary from a scenario, its position, state and points.
    pub fn from_scenario(
        index: usize,
        scenario: &Scenario,
        status: ScenarioStatus,
        points: u32,
    ) -> Self {
        Self {
            index,
            day: scenario.day,
            scenario_key: scenario.scenario_key.clone(),
            title: scenario.title.clone(),
            description: scenario.description.clone(),
            status,
            points,
            total_steps: scenario.steps.len() as u32,
            vital_steps: scenario.vital_steps().count() as u32,
        }
    }
}

/// Campaign-wide completion counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignProgress {
    /// Number of completed scenarios
    pub completed: usize,
    /// Number of scenarios in the campaign
    pub total: usize,
}

impl CampaignProgress {
    /// Completion percentage rounded to the nearest integer; 0 for an empty
    /// campaign.
    ///
    /// ```rust
    /// use sitesafe_core::models::CampaignProgress;
    ///
    /// assert_eq!(CampaignProgress { completed: 2, total: 7 }.percent(), 29);
    /// assert_eq!(CampaignProgress { completed: 0, total: 0 }.percent(), 0);
    /// ```
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }
}

/// Position of the current step within the viewed scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepPosition {
    /// Current step index (0-indexed)
    pub index: usize,
    /// Number of steps in the viewed scenario
    pub total: usize,
}

impl StepPosition {
    /// 1-based step number for "Step i of n" labels.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Whether the current step is the final one.
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

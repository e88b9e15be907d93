//! Serializable snapshot of the progression state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Campaign;
use crate::models::CampaignPhase;

/// One recorded answer in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordedChoice {
    pub scenario_key: String,
    pub step_id: String,
    pub option_id: String,
}

/// Point-in-time copy of every mutable field, with deterministic ordering.
///
/// Snapshots are for rendering and comparison only; there is no way to
/// restore a campaign from one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub phase: CampaignPhase,
    pub current_scenario_index: Option<usize>,
    pub viewing_scenario_index: Option<usize>,
    pub current_step_index: usize,
    pub review_mode: bool,
    pub completed_scenarios: Vec<String>,
    pub points: BTreeMap<String, u32>,
    pub choices: Vec<RecordedChoice>,
}

impl Campaign {
    /// Captures the current state.
    pub fn snapshot(&self) -> CampaignSnapshot {
        let mut choices: Vec<RecordedChoice> = self
            .choices
            .iter()
            .map(|(key, option_id)| RecordedChoice {
                scenario_key: key.scenario_key.clone(),
                step_id: key.step_id.clone(),
                option_id: option_id.clone(),
            })
            .collect();
        choices.sort();

        CampaignSnapshot {
            phase: self.phase(),
            current_scenario_index: self.current_scenario,
            viewing_scenario_index: self.viewing_scenario,
            current_step_index: self.current_step,
            review_mode: self.review_mode,
            completed_scenarios: self.completed.iter().cloned().collect(),
            points: self
                .points
                .iter()
                .map(|(key, points)| (key.clone(), *points))
                .collect(),
            choices,
        }
    }
}

//! Campaign progression state machine.
//!
//! A [`Campaign`] owns the validated content and every piece of mutable
//! progression state for one campaign attempt. Commands (in [`commands`])
//! mutate it atomically; queries (in [`queries`]) are pure reads. There is
//! no global instance: construct one per session and pass it explicitly.
//!
//! ```text
//!  ┌──────────────┐  commands   ┌──────────────┐  queries   ┌──────────────┐
//!  │  Interface   │────────────▶│   Campaign   │───────────▶│  Summaries,  │
//!  │ (CLI, tests) │             │    state     │            │  snapshots   │
//!  └──────────────┘             └──────────────┘            └──────────────┘
//!                                      │
//!                                      ▼
//!                               ContentStore (read-only)
//! ```
//!
//! Two indices are tracked separately: the *active* scenario (the learner's
//! position in the campaign, which only moves forward) and the *viewed*
//! scenario (what is on screen, which may be an earlier one under review).
//! Scoring follows the viewed scenario; completion gating always refers to
//! the active one.
//!
//! # Example
//!
//! ```rust
//! use sitesafe_core::CampaignBuilder;
//!
//! let mut campaign = CampaignBuilder::new().build()?;
//! campaign.start_campaign();
//!
//! campaign.select_option("permit-review", "permit-correct");
//! campaign.select_option("ppe-selection", "ppe-correct");
//! campaign.select_option("ppe-inspection", "inspection-correct");
//! assert_eq!(campaign.scenario_points("first-day"), 3);
//! assert!(campaign.can_complete_scenario());
//!
//! campaign.complete_current_scenario();
//! assert_eq!(campaign.current_scenario_index(), Some(1));
//! # Ok::<(), sitesafe_core::CampaignError>(())
//! ```

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::content::ContentStore;

pub mod builder;
pub mod commands;
pub mod queries;
pub mod snapshot;


pub use builder::CampaignBuilder;
pub use snapshot::{CampaignSnapshot, RecordedChoice};

/// Identity of a recorded answer: a step within a specific scenario.
///
/// Keying by the pair keeps answers from bleeding between scenarios that
/// happen to reuse a step id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceKey {
    pub scenario_key: String,
    pub step_id: String,
}

impl ChoiceKey {
    pub fn new(scenario_key: impl Into<String>, step_id: impl Into<String>) -> Self {
        Self {
            scenario_key: scenario_key.into(),
            step_id: step_id.into(),
        }
    }
}

/// Progression state of a single campaign attempt.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub(crate) content: ContentStore,
    /// Active scenario; `None` before the campaign starts
    pub(crate) current_scenario: Option<usize>,
    /// Scenario on screen; `None` before the campaign starts
    pub(crate) viewing_scenario: Option<usize>,
    /// Step index within the viewed scenario
    pub(crate) current_step: usize,
    /// Last selected option per step
    pub(crate) choices: HashMap<ChoiceKey, String>,
    /// Points per scenario key
    pub(crate) points: HashMap<String, u32>,
    /// Keys of scenarios that have been completed
    pub(crate) completed: BTreeSet<String>,
    pub(crate) review_mode: bool,
}

impl Campaign {
    /// Creates a campaign in its initial, not-started state.
    pub fn new(content: ContentStore) -> Self {
        Self {
            content,
            current_scenario: None,
            viewing_scenario: None,
            current_step: 0,
            choices: HashMap::new(),
            points: HashMap::new(),
            completed: BTreeSet::new(),
            review_mode: false,
        }
    }

    /// The read-only content this campaign runs over.
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Index of the active scenario, `None` before the campaign starts.
    pub fn current_scenario_index(&self) -> Option<usize> {
        self.current_scenario
    }

    /// Index of the scenario on screen, `None` before the campaign starts.
    pub fn viewing_scenario_index(&self) -> Option<usize> {
        self.viewing_scenario
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step
    }

    pub fn is_in_review_mode(&self) -> bool {
        self.review_mode
    }

    /// Keys of completed scenarios.
    pub fn completed_scenarios(&self) -> &BTreeSet<String> {
        &self.completed
    }

    /// Points per scenario key; scenarios never scored are absent.
    pub fn user_points(&self) -> &HashMap<String, u32> {
        &self.points
    }

    /// Every recorded answer.
    pub fn user_choices(&self) -> &HashMap<ChoiceKey, String> {
        &self.choices
    }
}

//! Read-only content store over the static scenario list.
//!
//! A [`ContentStore`] is built once from a validated [`CampaignContent`] and
//! never mutated afterwards. Lookups that miss return `None`; callers decide
//! how to degrade.
//!
//! ```rust
//! use sitesafe_core::ContentStore;
//!
//! let store = ContentStore::embedded()?;
//! assert_eq!(store.len(), 7);
//! assert_eq!(store.index_of_key("first-day"), Some(0));
//! assert_eq!(store.scenario_by_index(0).map(|s| s.day), Some(1));
//! assert!(store.scenario_by_key("no-such-day").is_none());
//! # Ok::<(), sitesafe_core::CampaignError>(())
//! ```

pub mod loader;
pub mod validate;

pub use validate::validate_content;

use crate::{
    error::Result,
    models::{CampaignContent, Scenario},
};

/// Title used when a dataset does not name itself.
pub const DEFAULT_TITLE: &str = "Safety Training Campaign";

/// Immutable, validated campaign content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    title: Option<String>,
    introduction: Option<String>,
    scenarios: Vec<Scenario>,
}

impl ContentStore {
    /// Validates `content` and freezes it into a store.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::InvalidContent` naming the first offending
    /// field if the dataset violates a content rule.
    pub fn new(content: CampaignContent) -> Result<Self> {
        validate_content(&content)?;
        let CampaignContent {
            title,
            introduction,
            scenarios,
        } = content;
        Ok(Self {
            title,
            introduction,
            scenarios,
        })
    }

    /// Campaign title, falling back to [`DEFAULT_TITLE`].
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Optional welcome text for the intro screen.
    pub fn introduction(&self) -> Option<&str> {
        self.introduction.as_deref()
    }

    /// All scenarios in completion order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the dataset has no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn scenario_by_index(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn scenario_by_key(&self, key: &str) -> Option<&Scenario> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.scenario_key == key)
    }

    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.scenarios
            .iter()
            .position(|scenario| scenario.scenario_key == key)
    }

    /// Iterates over every scenario key in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scenarios
            .iter()
            .map(|scenario| scenario.scenario_key.as_str())
    }

    /// Total number of steps across all scenarios.
    pub fn total_steps(&self) -> usize {
        self.scenarios.iter().map(|scenario| scenario.steps.len()).sum()
    }
}

impl From<&ContentStore> for CampaignContent {
    fn from(store: &ContentStore) -> Self {
        CampaignContent {
            title: store.title.clone(),
            introduction: store.introduction.clone(),
            scenarios: store.scenarios.clone(),
        }
    }
}

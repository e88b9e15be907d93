//! Collection wrapper types for displaying groups of scenarios.

use std::{fmt, ops::Index};

use crate::models::{Scenario, ScenarioSummary};

/// Newtype wrapper for displaying the dashboard: one card per scenario.
///
/// # Examples
///
/// ```rust
/// use sitesafe_core::{display::ScenarioSummaries, CampaignBuilder};
///
/// let mut campaign = CampaignBuilder::new().build()?;
/// campaign.start_campaign();
///
/// let dashboard = ScenarioSummaries(campaign.summaries());
/// let output = format!("{dashboard}");
/// assert!(output.contains("## 1. Day 1: First Day on Site (➤ Active)"));
/// assert!(output.contains("## 2. Day 2: Permit System Introduction (✗ Locked)"));
/// # Ok::<(), sitesafe_core::CampaignError>(())
/// ```
pub struct ScenarioSummaries(pub Vec<ScenarioSummary>);

impl ScenarioSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ScenarioSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ScenarioSummaries {
    type Output = ScenarioSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ScenarioSummaries {
    type Item = ScenarioSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScenarioSummaries {
    type Item = &'a ScenarioSummary;
    type IntoIter = std::slice::Iter<'a, ScenarioSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ScenarioSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No scenarios found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// Compact listing of a dataset's scenarios, independent of any progress.
pub struct ScenarioCatalog<'a>(pub &'a [Scenario]);

impl fmt::Display for ScenarioCatalog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No scenarios found.");
        }
        for scenario in self.0 {
            writeln!(
                f,
                "- Day {} `{}`: {} ({} steps, {} vital)",
                scenario.day,
                scenario.scenario_key,
                scenario.title,
                scenario.steps.len(),
                scenario.vital_steps().count()
            )?;
        }
        Ok(())
    }
}

//! Root of a campaign content dataset.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Scenario;

/// A complete campaign dataset as supplied at startup.
///
/// This is the on-disk JSON shape; it is validated and frozen into a
/// [`crate::content::ContentStore`] before any state machine uses it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CampaignContent {
    /// Name of the campaign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Welcome text shown before the campaign starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,

    /// Scenarios in required completion order
    pub scenarios: Vec<Scenario>,
}

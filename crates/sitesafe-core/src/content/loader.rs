//! Loading campaign datasets from JSON.

use std::path::Path;

use log::{debug, info};

use super::ContentStore;
use crate::{
    error::{CampaignError, Result},
    models::CampaignContent,
};

/// The seven-day confined space campaign shipped with the library.
const EMBEDDED_CAMPAIGN: &str = include_str!("campaign.json");

impl ContentStore {
    /// Loads the embedded default campaign.
    pub fn embedded() -> Result<Self> {
        debug!("Loading embedded campaign content");
        Self::from_json_str(EMBEDDED_CAMPAIGN)
    }

    /// Parses and validates a JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::Serialization` for malformed JSON and
    /// `CampaignError::InvalidContent` for datasets that break a content rule.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: CampaignContent = serde_json::from_str(json)?;
        Self::new(content)
    }

    /// Reads, parses and validates a JSON dataset from disk.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::FileSystem` if the file cannot be read, plus
    /// the errors of [`ContentStore::from_json_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CampaignError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let store = Self::from_json_str(&json)?;
        info!(
            "Loaded {} scenario(s) from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }
}

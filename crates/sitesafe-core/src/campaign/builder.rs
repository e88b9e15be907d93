//! Builder for creating and configuring Campaign instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Campaign;
use crate::{content::ContentStore, error::Result};

/// Builder for creating and configuring Campaign instances.
#[derive(Debug, Clone, Default)]
pub struct CampaignBuilder {
    content_path: Option<PathBuf>,
    content: Option<ContentStore>,
}

impl CampaignBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a JSON content file to load.
    ///
    /// If not specified, the embedded seven-day campaign is used.
    pub fn with_content_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.content_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded content store. Takes precedence over a path.
    pub fn with_content(mut self, content: ContentStore) -> Self {
        self.content = Some(content);
        self
    }

    /// Builds a campaign in its initial, not-started state.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::FileSystem` if the content file cannot be read
    /// Returns `CampaignError::Serialization` or
    /// `CampaignError::InvalidContent` if the dataset is malformed
    pub fn build(self) -> Result<Campaign> {
        let content = match (self.content, self.content_path) {
            (Some(content), _) => content,
            (None, Some(path)) => {
                debug!("Loading campaign content from {}", path.display());
                ContentStore::from_path(&path)?
            }
            (None, None) => ContentStore::embedded()?,
        };
        Ok(Campaign::new(content))
    }
}

//! Markdown display for content, campaign progress and handler results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and composite screens use newtype wrappers so that each
//! output context gets a consistent layout.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Campaign state  │    │ Views & wrappers│    │    Markdown     │
//! │ (queries)       │───▶│ (this module)   │───▶│ (terminal)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: dashboard and catalog wrappers (ScenarioSummaries,
//!   ScenarioCatalog)
//! - [`question`]: the step question view and the scenario review
//! - [`results`]: answer feedback and completion results
//! - [`status`]: success/failure lines (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use sitesafe_core::{display::StepView, shuffle::OptionOrder, CampaignBuilder};
//!
//! let mut campaign = CampaignBuilder::new().build()?;
//! campaign.start_campaign();
//!
//! let mut order = OptionOrder::new();
//! let view = StepView::current(&campaign, &mut order).expect("step on screen");
//! let output = view.to_string();
//! assert!(output.starts_with("## Step 1 of 3 **VITAL**"));
//! assert!(output.contains("1. "));
//! # Ok::<(), sitesafe_core::CampaignError>(())
//! ```

pub mod collections;
pub mod models;
pub mod question;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{ScenarioCatalog, ScenarioSummaries};
pub use question::{ReviewView, StepView};
pub use status::OperationStatus;

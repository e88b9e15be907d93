//! Core library for the SiteSafe safety training campaign.
//!
//! A campaign is a linear sequence of day-by-day scenarios, each made of
//! multiple-choice safety questions ("steps"). This crate holds the content
//! model and its loading and validation, the progression state machine that
//! tracks answers, points, completion, locking and review, the seeded option
//! shuffle used for display, and Markdown formatting of all of it.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Dashboard, question and review views
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use sitesafe_core::{
//!     display::ScenarioSummaries, handlers::handle_select_option, params::SelectOption,
//!     CampaignBuilder,
//! };
//!
//! // Build a campaign over the embedded seven-day dataset
//! let mut campaign = CampaignBuilder::new().build()?;
//! campaign.start_campaign();
//!
//! let feedback = handle_select_option(
//!     &mut campaign,
//!     &SelectOption::new("permit-review", "permit-correct"),
//! )?;
//! println!("{feedback}");
//!
//! // Dashboard cards
//! println!("{}", ScenarioSummaries(campaign.summaries()));
//! # Ok::<(), sitesafe_core::CampaignError>(())
//! ```

pub mod campaign;
pub mod content;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;
pub mod shuffle;

// Re-export commonly used types
pub use campaign::{Campaign, CampaignBuilder, CampaignSnapshot, ChoiceKey, RecordedChoice};
pub use content::ContentStore;
pub use display::{OperationStatus, ReviewView, ScenarioCatalog, ScenarioSummaries, StepView};
pub use error::{CampaignError, Result};
pub use handlers::{AnswerFeedback, CompletionResult};
pub use models::{
    CampaignContent, CampaignPhase, CampaignProgress, SafetyStep, Scenario, ScenarioStatus,
    ScenarioSummary, StepOption, StepPosition,
};
pub use params::{OpenScenario, ReviewScenario, SelectOption};

//! Data models for campaign content and derived progress views.
//!
//! The content models ([`Scenario`], [`SafetyStep`], [`StepOption`]) mirror
//! the dataset supplied at startup and are never mutated after loading. The
//! remaining types ([`ScenarioStatus`], [`ScenarioSummary`],
//! [`CampaignProgress`], ...) are read-only projections computed by the
//! campaign state machine for the presentation layer.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use sitesafe_core::models::{SafetyStep, StepOption};
//!
//! let step = SafetyStep {
//!     id: "ppe-inspection".to_string(),
//!     description: "Before using your PPE, what should you do?".to_string(),
//!     vital: true,
//!     options: vec![
//!         StepOption {
//!             id: "inspect".to_string(),
//!             text: "Inspect all PPE for damage".to_string(),
//!             correct: true,
//!             feedback: "Correct!".to_string(),
//!         },
//!         StepOption {
//!             id: "skip".to_string(),
//!             text: "Put it on immediately".to_string(),
//!             correct: false,
//!             feedback: "Incorrect.".to_string(),
//!         },
//!     ],
//! };
//!
//! assert!(step.is_correct("inspect"));
//! assert!(!step.is_correct("skip"));
//! assert_eq!(step.correct_option().map(|o| o.id.as_str()), Some("inspect"));
//! ```

pub mod content;
pub mod option;
pub mod scenario;
pub mod status;
pub mod step;
pub mod summary;


// Re-export all public types at the models level
pub use content::CampaignContent;
pub use option::StepOption;
pub use scenario::Scenario;
pub use status::{CampaignPhase, ScenarioStatus};
pub use step::SafetyStep;
pub use summary::{CampaignProgress, ScenarioSummary, StepPosition};

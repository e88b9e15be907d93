//! Display implementations for handler results.

use std::fmt;

use crate::handlers::{AnswerFeedback, CompletionResult};

impl fmt::Display for AnswerFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.correct { "✓" } else { "✗" };
        writeln!(f, "{icon} {}", self.feedback)?;
        writeln!(f)?;
        writeln!(f, "Scenario points: {}", self.points)
    }
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Completed scenario '{}' with {} point(s).",
            self.scenario_key, self.points
        )?;
        if let Some(next) = &self.next_scenario {
            writeln!(f, "Next up: '{next}'.")?;
        }
        if self.campaign_complete {
            writeln!(f)?;
            writeln!(f, "**All scenarios completed. The campaign is complete!**")?;
        }
        Ok(())
    }
}

//! Display implementations for domain models.
//!
//! These implementations live apart from the model definitions so that data
//! structures stay free of presentation. All output is Markdown.

use std::fmt;

use crate::{
    content::ContentStore,
    models::{
        CampaignPhase, CampaignProgress, SafetyStep, Scenario, ScenarioStatus, ScenarioSummary,
        StepPosition,
    },
};

/// Badge appended to the heading of vital steps.
pub const VITAL_BADGE: &str = "**VITAL**";

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioStatus::Completed => "completed",
            ScenarioStatus::Active => "active",
            ScenarioStatus::Available => "available",
            ScenarioStatus::Locked => "locked",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for CampaignPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CampaignPhase::Intro => "intro",
            CampaignPhase::InProgress => "in progress",
            CampaignPhase::Complete => "complete",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title())?;
        writeln!(f)?;
        if let Some(intro) = self.introduction() {
            writeln!(f, "{intro}")?;
            writeln!(f)?;
        }
        writeln!(f, "- Scenarios: {}", self.len())?;
        writeln!(f, "- Questions: {}", self.total_steps())?;
        Ok(())
    }
}

impl SafetyStep {
    /// Heading, description and options in dataset order, without revealing
    /// which option is correct.
    fn fmt_question(&self, f: &mut fmt::Formatter<'_>, number: Option<usize>) -> fmt::Result {
        let badge = if self.vital {
            format!(" {VITAL_BADGE}")
        } else {
            String::new()
        };
        match number {
            Some(number) => writeln!(f, "### {number}. {}{badge}", self.id)?,
            None => writeln!(f, "### {}{badge}", self.id)?,
        }
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for option in &self.options {
            writeln!(f, "- {}", option.text)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for SafetyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_question(f, None)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Day {}: {}", self.day, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Key: {}", self.scenario_key)?;
        writeln!(
            f,
            "- Steps: {} ({} vital)",
            self.steps.len(),
            self.vital_steps().count()
        )?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo questions in this scenario.")?;
        } else {
            writeln!(f, "\n## Questions")?;
            writeln!(f)?;
            for (index, step) in self.steps.iter().enumerate() {
                step.fmt_question(f, Some(index + 1))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ScenarioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. Day {}: {} ({})",
            self.index + 1,
            self.day,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        writeln!(f, "- **Key**: {}", self.scenario_key)?;
        writeln!(f, "- **Points**: {}/{}", self.points, self.total_steps)?;
        writeln!(f, "- **Action**: {}", self.status.action_label())?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for CampaignProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} scenarios completed ({}%)",
            self.completed,
            self.total,
            self.percent()
        )
    }
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.number(), self.total)
    }
}

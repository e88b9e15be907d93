//! Question views: a single step with numbered, shuffled options, and the
//! all-steps review of a scenario.

use std::fmt;

use super::models::VITAL_BADGE;
use crate::{
    campaign::Campaign,
    models::{SafetyStep, Scenario, StepOption, StepPosition},
    shuffle::{shuffled, OptionOrder},
};

/// A step rendered as a question.
///
/// Options are numbered `1..n` in the order given, which callers take from
/// the seeded shuffle so that the numbers stay stable for the step. When an
/// option has been selected it is marked and its feedback is shown.
#[derive(Debug, Clone)]
pub struct StepView<'a> {
    pub step: &'a SafetyStep,
    pub options: Vec<&'a StepOption>,
    pub position: Option<StepPosition>,
    pub selected: Option<&'a str>,
}

impl<'a> StepView<'a> {
    /// Create a view over `step` with `options` in display order.
    pub fn new(step: &'a SafetyStep, options: Vec<&'a StepOption>) -> Self {
        Self {
            step,
            options,
            position: None,
            selected: None,
        }
    }

    /// Show a "Step i of n" heading.
    pub fn with_position(mut self, position: StepPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Mark `option_id` as the learner's answer.
    pub fn with_selection(mut self, option_id: Option<&'a str>) -> Self {
        self.selected = option_id;
        self
    }

    /// View of the campaign's current step, ordered through `order`.
    ///
    /// Returns `None` when no step is on screen.
    pub fn current(campaign: &'a Campaign, order: &mut OptionOrder) -> Option<Self> {
        let step = campaign.current_step()?;
        let options = order.options_for(step);
        let mut view = Self::new(step, options)
            .with_selection(campaign.selected_option(&step.id).map(|o| o.id.as_str()));
        if let Some(position) = campaign.step_position() {
            view = view.with_position(position);
        }
        Some(view)
    }

    fn selected_option(&self) -> Option<&'a StepOption> {
        let selected = self.selected?;
        self.options.iter().copied().find(|option| option.id == selected)
    }
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.position {
            Some(position) => position.to_string(),
            None => self.step.id.clone(),
        };
        if self.step.vital {
            writeln!(f, "## {heading} {VITAL_BADGE}")?;
        } else {
            writeln!(f, "## {heading}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.step.description)?;
        writeln!(f)?;

        for (number, option) in self.options.iter().enumerate() {
            if self.selected == Some(option.id.as_str()) {
                writeln!(f, "{}. **{}** ← your answer", number + 1, option.text)?;
            } else {
                writeln!(f, "{}. {}", number + 1, option.text)?;
            }
        }

        if let Some(option) = self.selected_option() {
            let icon = if option.correct { "✓" } else { "✗" };
            writeln!(f)?;
            writeln!(f, "> {icon} {}", option.feedback)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

/// Every step of the viewed scenario at once, read-only, with feedback.
#[derive(Debug, Clone)]
pub struct ReviewView<'a> {
    pub scenario: &'a Scenario,
    pub steps: Vec<StepView<'a>>,
    pub points: u32,
}

impl<'a> ReviewView<'a> {
    /// Review of the campaign's viewed scenario, or `None` when nothing is
    /// on screen.
    pub fn current(campaign: &'a Campaign) -> Option<Self> {
        let scenario = campaign.viewed_scenario()?;
        let total = scenario.steps.len();
        let steps = scenario
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let selected = campaign
                    .choice_for(&scenario.scenario_key, &step.id);
                StepView::new(step, shuffled(&step.options, &step.id))
                    .with_position(StepPosition { index, total })
                    .with_selection(selected)
            })
            .collect();
        Some(Self {
            scenario,
            steps,
            points: campaign.scenario_points(&scenario.scenario_key),
        })
    }
}

impl fmt::Display for ReviewView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Review: Day {}: {}",
            self.scenario.day, self.scenario.title
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Points: {}/{}",
            self.points,
            self.scenario.steps.len()
        )?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CampaignBuilder;

    fn create_test_step(vital: bool) -> SafetyStep {
        SafetyStep {
            id: "ppe-selection".to_string(),
            description: "Which PPE do you need?".to_string(),
            vital,
            options: ["a", "b", "c"]
                .iter()
                .enumerate()
                .map(|(i, id)| StepOption {
                    id: id.to_string(),
                    text: format!("Option {id}"),
                    correct: i == 0,
                    feedback: format!("Feedback {id}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_step_view_numbers_options_in_given_order() {
        let step = create_test_step(true);
        let view = StepView::new(&step, shuffled(&step.options, &step.id))
            .with_position(StepPosition { index: 0, total: 3 });
        let output = format!("{view}");

        assert!(output.contains("## Step 1 of 3 **VITAL**"));
        assert!(output.contains("Which PPE do you need?"));
        // ppe-selection shuffles three options to [1, 2, 0]
        assert!(output.contains("1. Option b\n2. Option c\n3. Option a\n"));
        assert!(!output.contains('>'));
    }

    #[test]
    fn test_step_view_shows_selection_feedback() {
        let step = create_test_step(false);
        let view = StepView::new(&step, step.options.iter().collect()).with_selection(Some("b"));
        let output = format!("{view}");

        assert!(output.starts_with("## ppe-selection\n"));
        assert!(!output.contains("VITAL"));
        assert!(output.contains("2. **Option b** ← your answer"));
        assert!(output.contains("> ✗ Feedback b"));
    }

    #[test]
    fn test_step_view_current_uses_cache() {
        let mut campaign = CampaignBuilder::new().build().unwrap();
        let mut order = OptionOrder::new();
        assert!(StepView::current(&campaign, &mut order).is_none());

        campaign.start_campaign();
        campaign.select_option("permit-review", "permit-correct");
        let view = StepView::current(&campaign, &mut order).unwrap();
        assert_eq!(view.position.map(|p| p.number()), Some(1));
        assert_eq!(view.selected, Some("permit-correct"));
        assert_eq!(order.cached_step(), Some("permit-review"));
        assert!(format!("{view}").contains("> ✓ Correct!"));
    }

    #[test]
    fn test_review_view_lists_all_steps() {
        let mut campaign = CampaignBuilder::new().build().unwrap();
        campaign.start_campaign();
        campaign.select_option("permit-review", "permit-correct");
        campaign.select_option("ppe-selection", "ppe-wrong1");
        campaign.set_scenario_for_review("first-day");

        let review = ReviewView::current(&campaign).unwrap();
        assert_eq!(review.steps.len(), 3);
        let output = format!("{review}");
        assert!(output.starts_with("# Review: Day 1: First Day on Site\n"));
        assert!(output.contains("- Points: 1/3"));
        assert!(output.contains("## Step 1 of 3 **VITAL**"));
        assert!(output.contains("## Step 3 of 3 **VITAL**"));
        assert!(output.contains("> ✓"));
        assert!(output.contains("> ✗"));
    }
}

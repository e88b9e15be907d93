mod common;

use common::{
    answer_viewed_correctly, create_started_campaign, create_test_campaign, write_content_file,
    SMALL_CONTENT,
};
use sitesafe_core::{
    handlers::{handle_complete_scenario, handle_open_scenario, handle_select_option},
    shuffle::shuffle_indices,
    CampaignBuilder, CampaignError, CampaignPhase, ContentStore, OpenScenario, ScenarioStatus,
    SelectOption,
};

#[test]
fn test_first_day_walkthrough() {
    let mut campaign = create_started_campaign();

    assert_eq!(campaign.current_scenario_index(), Some(0));
    let scenario = campaign.active_scenario().expect("active scenario");
    assert_eq!(scenario.title, "First Day on Site");
    assert_eq!(scenario.steps.len(), 3);

    campaign.select_option("permit-review", "permit-correct");
    assert_eq!(campaign.user_points().get("first-day"), Some(&1));

    campaign.select_option("permit-review", "permit-wrong1");
    assert_eq!(campaign.user_points().get("first-day"), Some(&0));

    campaign.next_step();
    campaign.select_option("ppe-selection", "ppe-correct");
    campaign.next_step();
    campaign.select_option("ppe-inspection", "inspection-correct");
    assert_eq!(campaign.user_points().get("first-day"), Some(&2));

    campaign.reset_steps();
    campaign.select_option("permit-review", "permit-correct");
    assert_eq!(campaign.user_points().get("first-day"), Some(&3));
    assert!(campaign.can_complete_scenario());

    campaign.complete_current_scenario();
    let completed: Vec<&str> = campaign
        .completed_scenarios()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(completed, vec!["first-day"]);
    assert_eq!(campaign.current_scenario_index(), Some(1));
}

#[test]
fn test_review_after_first_day() {
    let mut campaign = create_started_campaign();
    answer_viewed_correctly(&mut campaign);
    campaign.complete_current_scenario();
    campaign.next_step();

    assert!(campaign.set_scenario_for_review("first-day"));
    assert_eq!(campaign.viewing_scenario_index(), Some(0));
    assert!(campaign.is_in_review_mode());
    assert_eq!(campaign.current_step_index(), 0);

    let before = campaign.snapshot();
    campaign.select_option("permit-review", "permit-wrong2");
    campaign.select_option("ppe-selection", "ppe-wrong1");
    assert_eq!(campaign.snapshot(), before);
}

#[test]
fn test_points_always_match_correct_answers() {
    let mut campaign = create_started_campaign();
    let answers = [
        ("permit-review", "permit-correct"),
        ("permit-review", "permit-correct"),
        ("ppe-selection", "ppe-wrong2"),
        ("permit-review", "permit-wrong1"),
        ("ppe-inspection", "inspection-correct"),
        ("ppe-selection", "ppe-correct"),
        ("ppe-selection", "ppe-correct"),
        ("permit-review", "permit-wrong2"),
        ("permit-review", "permit-correct"),
        ("ppe-inspection", "inspection-wrong1"),
        ("ppe-inspection", "inspection-wrong2"),
        ("ppe-inspection", "inspection-correct"),
    ];

    for (step_id, option_id) in answers {
        campaign.select_option(step_id, option_id);
        assert_eq!(
            campaign.scenario_points("first-day"),
            campaign.correct_answer_count("first-day"),
            "after selecting {option_id} for {step_id}"
        );
    }
    assert_eq!(campaign.scenario_points("first-day"), 3);
}

#[test]
fn test_gating_cases() {
    let (_temp_dir, path) = write_content_file(SMALL_CONTENT);
    let mut campaign = CampaignBuilder::new()
        .with_content_path(Some(&path))
        .build()
        .expect("Failed to build campaign");
    campaign.start_campaign();
    answer_viewed_correctly(&mut campaign);
    campaign.complete_current_scenario();

    // All vital correct, non-vital unanswered
    campaign.select_option("contact", "three");
    assert!(!campaign.can_complete_scenario());

    // All answered, vital wrong
    campaign.select_option("tools", "hand");
    campaign.select_option("contact", "one");
    assert!(!campaign.can_complete_scenario());

    // All answered, all vital correct
    campaign.select_option("contact", "three");
    assert!(campaign.can_complete_scenario());
}

#[test]
fn test_completion_progression() {
    let mut campaign = create_started_campaign();
    let total = campaign.content().len();

    for expected in 1..total {
        campaign.next_step();
        campaign.complete_current_scenario();
        assert_eq!(campaign.current_scenario_index(), Some(expected));
        assert_eq!(campaign.current_step_index(), 0);
    }

    campaign.next_step();
    campaign.complete_current_scenario();
    assert_eq!(campaign.current_scenario_index(), Some(total - 1));
    assert_eq!(campaign.current_step_index(), 0);
    assert!(campaign.is_all_scenarios_completed());
}

#[test]
fn test_repeated_completion_on_last_scenario() {
    let (_temp_dir, path) = write_content_file(SMALL_CONTENT);
    let mut campaign = CampaignBuilder::new()
        .with_content_path(Some(&path))
        .build()
        .unwrap();
    campaign.start_campaign();
    campaign.complete_current_scenario();
    campaign.complete_current_scenario();
    campaign.complete_current_scenario();

    assert_eq!(campaign.current_scenario_index(), Some(1));
    assert_eq!(campaign.completed_scenarios().len(), 2);
}

#[test]
fn test_gated_completion_does_not_skip_ahead() {
    let mut campaign = create_started_campaign();
    answer_viewed_correctly(&mut campaign);

    handle_complete_scenario(&mut campaign).expect("first completion");
    let refused = handle_complete_scenario(&mut campaign);

    assert!(matches!(
        refused,
        Err(CampaignError::VitalStepsIncomplete { .. })
    ));
    assert_eq!(campaign.current_scenario_index(), Some(1));
    assert_eq!(campaign.completed_scenarios().len(), 1);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut campaign = create_test_campaign();
    let initial = campaign.snapshot();

    campaign.start_campaign();
    answer_viewed_correctly(&mut campaign);
    campaign.complete_current_scenario();
    campaign.select_option("permit-components", "components-correct");
    campaign.next_step();
    campaign.set_scenario_for_review("first-day");

    campaign.reset_campaign();

    assert_eq!(campaign.snapshot(), initial);
    assert_eq!(campaign.current_scenario_index(), None);
    assert_eq!(campaign.viewing_scenario_index(), None);
    assert_eq!(campaign.current_step_index(), 0);
    assert!(campaign.user_choices().is_empty());
    assert!(campaign.user_points().is_empty());
    assert!(campaign.completed_scenarios().is_empty());
    assert!(!campaign.is_in_review_mode());
}

#[test]
fn test_option_order_is_stable_per_step() {
    let campaign = create_started_campaign();
    let scenario = campaign.active_scenario().unwrap();

    let orders: Vec<Vec<usize>> = scenario
        .steps
        .iter()
        .map(|step| shuffle_indices(step.options.len(), &step.id))
        .collect();
    for (step, order) in scenario.steps.iter().zip(&orders) {
        assert_eq!(order, &shuffle_indices(step.options.len(), &step.id));
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..step.options.len()).collect::<Vec<_>>());
    }
    assert_ne!(orders[1], orders[2]);
}

#[test]
fn test_full_campaign_through_handlers() {
    let mut campaign = create_started_campaign();
    let total = campaign.content().len();

    for index in 0..total {
        let steps: Vec<(String, String)> = campaign
            .active_scenario()
            .unwrap()
            .steps
            .iter()
            .map(|step| {
                (
                    step.id.clone(),
                    step.correct_option().unwrap().id.clone(),
                )
            })
            .collect();
        for (step_id, option_id) in &steps {
            let feedback =
                handle_select_option(&mut campaign, &SelectOption::new(step_id, option_id))
                    .expect("answer accepted");
            assert!(feedback.correct);
        }
        let result = handle_complete_scenario(&mut campaign).expect("completion accepted");
        assert_eq!(result.points as usize, steps.len());
        assert_eq!(result.campaign_complete, index + 1 == total);
        assert_eq!(result.next_scenario.is_none(), index + 1 == total);
    }

    assert_eq!(campaign.phase(), CampaignPhase::Complete);
    assert_eq!(campaign.progress().percent(), 100);
    assert!(
        campaign
            .summaries()
            .iter()
            .all(|summary| summary.status == ScenarioStatus::Completed)
    );

    // Every completed card opens in review
    let status = handle_open_scenario(&mut campaign, &OpenScenario { index: 2 }).unwrap();
    assert_eq!(status, ScenarioStatus::Completed);
    assert!(campaign.is_in_review_mode());
}

#[test]
fn test_custom_content_file() {
    let (_temp_dir, path) = write_content_file(SMALL_CONTENT);
    let store = ContentStore::from_path(&path).expect("Failed to load content");

    assert_eq!(store.title(), "Ladder Safety");
    assert_eq!(store.len(), 2);
    assert_eq!(store.total_steps(), 3);
}

#[test]
fn test_invalid_content_file_is_rejected() {
    let json = SMALL_CONTENT.replace(r#""scenarioKey": "climbing""#, r#""scenarioKey": "setup""#);
    let (_temp_dir, path) = write_content_file(&json);

    let result = CampaignBuilder::new().with_content_path(Some(&path)).build();
    match result {
        Err(CampaignError::InvalidContent { field, .. }) => {
            assert_eq!(field, "scenarios[1].scenarioKey");
        }
        other => panic!("Expected InvalidContent, got {other:?}"),
    }
}

#[test]
fn test_missing_content_file() {
    let result = CampaignBuilder::new()
        .with_content_path(Some("/definitely/not/here.json"))
        .build();
    assert!(matches!(result, Err(CampaignError::FileSystem { .. })));
}

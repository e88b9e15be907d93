#![allow(dead_code)]

use std::path::PathBuf;

use sitesafe_core::{Campaign, CampaignBuilder};
use tempfile::TempDir;

/// Helper function to create a campaign over the embedded content
pub fn create_test_campaign() -> Campaign {
    CampaignBuilder::new()
        .build()
        .expect("Failed to build campaign")
}

/// Helper function to create a started campaign
pub fn create_started_campaign() -> Campaign {
    let mut campaign = create_test_campaign();
    campaign.start_campaign();
    campaign
}

/// Answers every step of the viewed scenario with its correct option
pub fn answer_viewed_correctly(campaign: &mut Campaign) {
    let answers: Vec<(String, String)> = campaign
        .viewed_scenario()
        .expect("Expected a scenario on screen")
        .steps
        .iter()
        .filter_map(|step| {
            step.correct_option()
                .map(|option| (step.id.clone(), option.id.clone()))
        })
        .collect();
    for (step_id, option_id) in answers {
        campaign.select_option(&step_id, &option_id);
    }
}

/// A two-scenario dataset where the second day has a non-vital step
pub const SMALL_CONTENT: &str = r#"{
  "title": "Ladder Safety",
  "scenarios": [
    {
      "title": "Setting Up",
      "day": 1,
      "scenarioKey": "setup",
      "description": "Place the ladder",
      "steps": [
        {
          "id": "angle",
          "description": "What angle should the ladder stand at?",
          "vital": true,
          "options": [
            {"id": "angle-ok", "text": "One out for every four up", "correct": true, "feedback": "Correct!"},
            {"id": "angle-bad", "text": "As steep as possible", "correct": false, "feedback": "Incorrect."}
          ]
        }
      ]
    },
    {
      "title": "Climbing",
      "day": 2,
      "scenarioKey": "climbing",
      "description": "Go up safely",
      "steps": [
        {
          "id": "contact",
          "description": "How many points of contact?",
          "vital": true,
          "options": [
            {"id": "three", "text": "Three", "correct": true, "feedback": "Correct!"},
            {"id": "one", "text": "One", "correct": false, "feedback": "Incorrect."}
          ]
        },
        {
          "id": "tools",
          "description": "How do you carry tools?",
          "options": [
            {"id": "belt", "text": "In a tool belt", "correct": true, "feedback": "Correct!"},
            {"id": "hand", "text": "In your hand", "correct": false, "feedback": "Incorrect."}
          ]
        }
      ]
    }
  ]
}"#;

/// Writes `json` to a content file inside a fresh temporary directory
pub fn write_content_file(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("content.json");
    std::fs::write(&path, json).expect("Failed to write content file");
    (temp_dir, path)
}

//! Integration tests for the request-to-export pipeline

use chrono::TimeZone;

use storygen::core::{
    compose, count_words, evaluate, format_for_export, load_config, load_request_file, summarize,
    system_prompt,
};
use storygen::error::StoryGenError;
use storygen::models::{Catalogs, GenerationRequest};

mod common;

use common::{create_request_file, create_test_project};

#[test]
fn test_request_file_to_instruction() {
    let (_temp_dir, project_root) = create_test_project("");

    let path = create_request_file(
        &project_root,
        "request.md",
        r#"---
genre: Comedy
tone: Uplifting
length: Short
---
A dragon opens a coffee shop"#,
    );

    let catalogs = Catalogs::builtin();
    let request = load_request_file(&path).unwrap();
    request.validate(&catalogs).unwrap();

    let instruction = compose(&request, &catalogs).unwrap();
    assert!(instruction.contains("A dragon opens a coffee shop"));
    assert!(instruction.contains("humorous situations, witty dialogue, and funny characters"));
    assert!(instruction.contains("inspire and uplift with positive themes"));
    assert!(instruction.contains("approximately 200 words"));
}

#[test]
fn test_config_extras_flow_into_compose() {
    let (_temp_dir, project_root) = create_test_project(
        r#"
[genres]
Western = "frontier towns, outlaws, and dusty showdowns"
"#,
    );

    let config = load_config(&project_root, None, None, None, false).unwrap();
    let catalogs = config.catalogs();

    let request = GenerationRequest::new("A sheriff with amnesia", "Western", "Serious", "Medium");
    request.validate(&catalogs).unwrap();

    let instruction = compose(&request, &catalogs).unwrap();
    assert!(instruction.contains("western story"));
    assert!(instruction.contains("frontier towns, outlaws, and dusty showdowns"));
    assert!(instruction.contains("approximately 500 words"));
}

#[test]
fn test_unknown_selection_is_rejected_not_defaulted() {
    let catalogs = Catalogs::builtin();
    let request = GenerationRequest::new("An idea", "Cyberpunk", "Serious", "Short");

    match request.validate(&catalogs) {
        Err(StoryGenError::InvalidSelection { key, .. }) => assert_eq!(key, "Cyberpunk"),
        other => panic!("Expected InvalidSelection, got {:?}", other.err()),
    }
}

#[test]
fn test_full_pipeline_story_to_export() {
    let request = GenerationRequest::new(
        "The last person on Earth receives a phone call",
        "Sci-Fi",
        "Mysterious",
        "Short",
    );
    let catalogs = Catalogs::builtin();
    request.validate(&catalogs).unwrap();

    let target_words = catalogs.target_words(&request.length).unwrap();
    let story = vec!["word"; 180].join(" ");
    let result = evaluate(story, target_words);

    assert_eq!(result.word_count, 180);
    assert_eq!(result.target_word_count, 200);
    assert_eq!(result.accuracy_percent, 90);

    let generated_at = chrono::Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let document = format_for_export(&result.story_text, &request, generated_at);

    assert!(document.contains("The last person on Earth receives a phone call"));
    assert!(document.contains("Genre: Sci-Fi"));
    assert!(document.contains("Tone: Mysterious"));
    assert!(document.contains("Length: Short"));
    assert!(document.contains(&result.story_text));
    assert!(document.contains("Generated on: 2024-06-01 12:00:00"));
}

#[test]
fn test_summarize_matches_prompt_word_count() {
    // The displayed prompt word count and story word count use one tokenizer
    let text = "Two rival magicians must work together to save the world";
    assert_eq!(count_words(text), 10);
    assert_eq!(summarize(text, 500).word_count, 10);
}

#[test]
fn test_system_prompt_tracks_request() {
    let catalogs = Catalogs::builtin();
    let request = GenerationRequest::new("A story", "Mystery", "Dramatic", "Long");
    let target_words = catalogs.target_words(&request.length).unwrap();

    let system = system_prompt(&request.genre, &request.tone, target_words);
    assert!(system.contains("mystery stories"));
    assert!(system.contains("approximately 1000 words"));
    assert!(system.contains("dramatic tone"));
}

#[test]
fn test_empty_story_degrades_gracefully() {
    // A malformed or empty provider response is a valid zero-word story
    let result = evaluate(String::new(), 1000);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.accuracy_percent, 0);
    assert_eq!(result.story_text, "");
}

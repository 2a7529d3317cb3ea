//! Prompt composition and story post-processing.
//!
//! Every function here is a pure transformation: selections in, instruction
//! text out; story text in, metrics or an export document out. The provider
//! call sits between compose and summarize and is handled elsewhere.

use chrono::{DateTime, Local};
use regex::Regex;

use crate::error::StoryGenError;
use crate::models::{Catalogs, GenerationRequest, GenerationResult};

/// Word count and length accuracy for a generated story
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorySummary {
    pub word_count: usize,
    pub accuracy_percent: u32,
}

/// Build the instruction text sent to the text-generation provider.
///
/// Deterministic: identical requests produce byte-identical output. Fails
/// only when a selection key is missing from its catalog, which is a
/// precondition violation by the caller.
pub fn compose(request: &GenerationRequest, catalogs: &Catalogs) -> Result<String, StoryGenError> {
    let genre_desc = catalogs.genre_description(&request.genre)?;
    let tone_desc = catalogs.tone_directive(&request.tone)?;
    let target_words = catalogs.target_words(&request.length)?;

    Ok(format!(
        r#"Write a creative {genre} story based on this prompt: "{prompt}"

Genre requirements: {genre_desc}
Tone: {tone_desc}

Make the story engaging with:
- Well-developed characters
- A clear beginning, middle, and end
- Vivid descriptions
- Compelling dialogue where appropriate
- A satisfying conclusion

The story should be approximately {target_words} words long.

Story prompt: {prompt}"#,
        genre = request.genre.to_lowercase(),
        prompt = request.prompt,
    ))
}

/// Count word tokens: maximal runs of word characters (alphanumerics and
/// underscore, Unicode-aware).
///
/// Punctuation and whitespace delimit tokens, so contractions split:
/// "robot's" counts as two tokens ("robot", "s"). The same rule counts
/// words in the user's prompt and in the generated story, keeping the two
/// displayed counts comparable.
pub fn count_words(text: &str) -> usize {
    let word_re = Regex::new(r"\w+").unwrap();
    word_re.find_iter(text).count()
}

/// Word count and length accuracy for a story against its target.
///
/// accuracy_percent = min(100, round(100 * word_count / target_words));
/// an empty story yields zero for both. Overshooting the target caps at
/// 100 rather than exceeding it.
pub fn summarize(story_text: &str, target_words: u32) -> StorySummary {
    let word_count = count_words(story_text);
    if word_count == 0 {
        return StorySummary {
            word_count: 0,
            accuracy_percent: 0,
        };
    }
    let ratio = word_count as f64 / target_words as f64;
    let accuracy = (ratio * 100.0).round() as u32;
    StorySummary {
        word_count,
        accuracy_percent: accuracy.min(100),
    }
}

/// Package a raw provider response into an immutable result
pub fn evaluate(story_text: String, target_words: u32) -> GenerationResult {
    let summary = summarize(&story_text, target_words);
    GenerationResult {
        story_text,
        word_count: summary.word_count,
        target_word_count: target_words,
        accuracy_percent: summary.accuracy_percent,
    }
}

/// Format a story as a plain-text export document.
///
/// Fixed header and footer around a generation timestamp, the verbatim
/// original prompt, the selected genre/tone/length labels, and the story
/// text unmodified, in that order.
pub fn format_for_export(
    story_text: &str,
    request: &GenerationRequest,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        r#"AI GENERATED STORY
==================

Generated on: {timestamp}
Original Prompt: {prompt}
Genre: {genre}
Tone: {tone}
Length: {length}

STORY:
------

{story}

==================
Generated by StoryGen
"#,
        timestamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
        prompt = request.prompt,
        genre = request.genre,
        tone = request.tone,
        length = request.length,
        story = story_text,
    )
}

/// Timestamped filename for an export document
pub fn export_filename(generated_at: DateTime<Local>) -> String {
    format!("ai_story_{}.txt", generated_at.format("%Y%m%d_%H%M%S"))
}

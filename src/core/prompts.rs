//! System prompt and built-in example prompts.
//!
//! The system prompt sets the model's behavior via the chat API; the
//! story-specific instruction text built by the composer goes in the user
//! message.

/// System message for story generation, parameterized by the selections
pub fn system_prompt(genre: &str, tone: &str, target_words: u32) -> String {
    format!(
        "You are a creative writing assistant specializing in {} stories. \
         Generate a complete story of approximately {} words. \
         Ensure the story has proper structure, engaging characters, and fits the {} tone requested.",
        genre.to_lowercase(),
        target_words,
        tone.to_lowercase()
    )
}

/// Canned story ideas offered to users who want inspiration.
/// Selected via `generate --example N` (1-based).
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "A time traveler visits ancient Egypt",
    "A detective solves crimes using cooking skills",
    "The last person on Earth receives a phone call",
    "A dragon opens a coffee shop in modern times",
    "Two rival magicians must work together to save the world",
];

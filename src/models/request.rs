//! Generation request and result types

use serde::{Deserialize, Serialize};

use crate::error::StoryGenError;
use crate::models::catalog::{DEFAULT_GENRE, DEFAULT_LENGTH, DEFAULT_TONE};
use crate::models::Catalogs;

/// A single story generation request.
///
/// Transient: constructed per user action, validated against the catalogs,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Free-text story idea
    pub prompt: String,
    /// Genre catalog key
    pub genre: String,
    /// Tone catalog key
    pub tone: String,
    /// Length catalog key
    pub length: String,
}

impl GenerationRequest {
    pub fn new(
        prompt: impl Into<String>,
        genre: impl Into<String>,
        tone: impl Into<String>,
        length: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            genre: genre.into(),
            tone: tone.into(),
            length: length.into(),
        }
    }

    /// Reject empty prompts and selection keys missing from the catalogs
    pub fn validate(&self, catalogs: &Catalogs) -> Result<(), StoryGenError> {
        if self.prompt.trim().is_empty() {
            return Err(StoryGenError::EmptyPrompt);
        }
        catalogs.genre_description(&self.genre)?;
        catalogs.tone_directive(&self.tone)?;
        catalogs.length_spec(&self.length)?;
        Ok(())
    }
}

/// YAML frontmatter of a request file.
///
/// Every field is optional; missing fields fall back to the first option
/// of each catalog, matching the interactive picker defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestMetadata {
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_length")]
    pub length: String,
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self {
            genre: default_genre(),
            tone: default_tone(),
            length: default_length(),
        }
    }
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_length() -> String {
    DEFAULT_LENGTH.to_string()
}

impl RequestMetadata {
    /// Combine frontmatter selections with the request file body
    pub fn into_request(self, prompt: String) -> GenerationRequest {
        GenerationRequest {
            prompt,
            genre: self.genre,
            tone: self.tone,
            length: self.length,
        }
    }
}

/// A generated story with its derived metrics. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// The story text as returned by the provider
    pub story_text: String,
    /// Word tokens in the story
    pub word_count: usize,
    /// Target word count from the length catalog
    pub target_word_count: u32,
    /// min(100, round(100 * word_count / target)), capped even on overshoot
    pub accuracy_percent: u32,
}

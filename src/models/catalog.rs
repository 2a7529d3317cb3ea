//! Selection catalogs for genre, tone, and story length

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{SelectionKind, StoryGenError};

/// Default selections when a request file omits a field.
/// These match the first options offered by the interactive picker.
pub const DEFAULT_GENRE: &str = "Fantasy";
pub const DEFAULT_TONE: &str = "Serious";
pub const DEFAULT_LENGTH: &str = "Short";

/// Target word count and display description for a story length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthSpec {
    /// Target word count, always > 0
    pub words: u32,
    /// Human-readable description
    pub description: String,
}

impl LengthSpec {
    fn new(words: u32, description: &str) -> Self {
        Self {
            words,
            description: description.to_string(),
        }
    }
}

/// Immutable lookup tables for the selectable story parameters.
///
/// Genre and tone are open dictionaries: config files can merge in extra
/// entries. Lengths are fixed. Lookups on unknown keys fail loudly rather
/// than defaulting, since only catalog keys are ever offered as input.
#[derive(Debug, Clone)]
pub struct Catalogs {
    genres: BTreeMap<String, String>,
    tones: BTreeMap<String, String>,
    lengths: BTreeMap<String, LengthSpec>,
}

impl Catalogs {
    /// The built-in catalogs
    pub fn builtin() -> Self {
        let genres = [
            (
                "Fantasy",
                "magical realms, mythical creatures, and epic adventures",
            ),
            (
                "Sci-Fi",
                "futuristic technology, space exploration, and scientific concepts",
            ),
            (
                "Romance",
                "love stories, relationships, and emotional connections",
            ),
            (
                "Mystery",
                "puzzles, detective work, and suspenseful revelations",
            ),
            (
                "Horror",
                "scary elements, supernatural occurrences, and spine-chilling moments",
            ),
            (
                "Adventure",
                "exciting journeys, daring exploits, and thrilling experiences",
            ),
            (
                "Literary Fiction",
                "character-driven narratives with deep themes and realistic settings",
            ),
            (
                "Comedy",
                "humorous situations, witty dialogue, and funny characters",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let tones = [
            ("Serious", "maintain a serious, thoughtful tone throughout"),
            ("Humorous", "include humor and light-hearted elements"),
            ("Dark", "create a darker, more intense atmosphere"),
            ("Uplifting", "inspire and uplift with positive themes"),
            ("Mysterious", "maintain an air of mystery and intrigue"),
            ("Dramatic", "emphasize emotional intensity and conflict"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let lengths = [
            ("Short", LengthSpec::new(200, "Quick read, ~200 words")),
            ("Medium", LengthSpec::new(500, "Standard story, ~500 words")),
            ("Long", LengthSpec::new(1000, "Extended narrative, ~1000 words")),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            genres,
            tones,
            lengths,
        }
    }

    /// Merge extra genre/tone entries over the built-ins.
    /// An entry with a built-in key replaces the built-in phrase.
    pub fn with_extras(
        mut self,
        genres: BTreeMap<String, String>,
        tones: BTreeMap<String, String>,
    ) -> Self {
        self.genres.extend(genres);
        self.tones.extend(tones);
        self
    }

    /// Descriptive phrase for a genre
    pub fn genre_description(&self, key: &str) -> Result<&str, StoryGenError> {
        self.genres.get(key).map(String::as_str).ok_or_else(|| {
            StoryGenError::invalid_selection(SelectionKind::Genre, key, self.genre_names())
        })
    }

    /// Directive phrase for a tone
    pub fn tone_directive(&self, key: &str) -> Result<&str, StoryGenError> {
        self.tones.get(key).map(String::as_str).ok_or_else(|| {
            StoryGenError::invalid_selection(SelectionKind::Tone, key, self.tone_names())
        })
    }

    /// Full spec for a length label
    pub fn length_spec(&self, key: &str) -> Result<&LengthSpec, StoryGenError> {
        self.lengths.get(key).ok_or_else(|| {
            StoryGenError::invalid_selection(SelectionKind::Length, key, self.length_names())
        })
    }

    /// Target word count for a length label
    pub fn target_words(&self, key: &str) -> Result<u32, StoryGenError> {
        self.length_spec(key).map(|spec| spec.words)
    }

    /// Genre names, alphabetical
    pub fn genre_names(&self) -> Vec<String> {
        self.genres.keys().cloned().collect()
    }

    /// Tone names, alphabetical
    pub fn tone_names(&self) -> Vec<String> {
        self.tones.keys().cloned().collect()
    }

    /// Length labels, shortest first
    pub fn length_names(&self) -> Vec<String> {
        let mut names: Vec<(&String, u32)> = self
            .lengths
            .iter()
            .map(|(name, spec)| (name, spec.words))
            .collect();
        names.sort_by_key(|(_, words)| *words);
        names.into_iter().map(|(name, _)| name.clone()).collect()
    }

    /// Iterate genres as (name, descriptive phrase)
    pub fn genres(&self) -> impl Iterator<Item = (&str, &str)> {
        self.genres.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate tones as (name, directive phrase)
    pub fn tones(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tones.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate lengths as (label, spec), shortest first
    pub fn lengths(&self) -> impl Iterator<Item = (String, &LengthSpec)> + '_ {
        self.length_names().into_iter().map(move |name| {
            let spec = &self.lengths[&name];
            (name, spec)
        })
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_genres() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.genre_names().len(), 8);
        assert_eq!(
            catalogs.genre_description("Comedy").unwrap(),
            "humorous situations, witty dialogue, and funny characters"
        );
        assert_eq!(
            catalogs.genre_description("Fantasy").unwrap(),
            "magical realms, mythical creatures, and epic adventures"
        );
    }

    #[test]
    fn test_builtin_tones() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.tone_names().len(), 6);
        assert_eq!(
            catalogs.tone_directive("Uplifting").unwrap(),
            "inspire and uplift with positive themes"
        );
    }

    #[test]
    fn test_builtin_lengths() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.target_words("Short").unwrap(), 200);
        assert_eq!(catalogs.target_words("Medium").unwrap(), 500);
        assert_eq!(catalogs.target_words("Long").unwrap(), 1000);
    }

    #[test]
    fn test_length_names_sorted_by_words() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.length_names(), vec!["Short", "Medium", "Long"]);
    }

    #[test]
    fn test_all_targets_positive() {
        let catalogs = Catalogs::builtin();
        for (_, spec) in catalogs.lengths() {
            assert!(spec.words > 0);
        }
    }

    #[test]
    fn test_unknown_genre_fails_loudly() {
        let catalogs = Catalogs::builtin();
        let error = catalogs.genre_description("Western").unwrap_err();
        let display = error.to_string();
        assert!(display.contains("Unknown genre 'Western'"));
        assert!(display.contains("Fantasy"));
    }

    #[test]
    fn test_unknown_length_fails_loudly() {
        let catalogs = Catalogs::builtin();
        assert!(catalogs.target_words("Epic").is_err());
    }

    #[test]
    fn test_with_extras_adds_and_overrides() {
        let mut genres = BTreeMap::new();
        genres.insert(
            "Western".to_string(),
            "frontier towns, outlaws, and dusty showdowns".to_string(),
        );
        genres.insert(
            "Comedy".to_string(),
            "slapstick and absurd situations".to_string(),
        );
        let catalogs = Catalogs::builtin().with_extras(genres, BTreeMap::new());

        assert_eq!(
            catalogs.genre_description("Western").unwrap(),
            "frontier towns, outlaws, and dusty showdowns"
        );
        assert_eq!(
            catalogs.genre_description("Comedy").unwrap(),
            "slapstick and absurd situations"
        );
        assert_eq!(catalogs.genre_names().len(), 9);
    }

    #[test]
    fn test_defaults_exist_in_catalogs() {
        let catalogs = Catalogs::builtin();
        assert!(catalogs.genre_description(DEFAULT_GENRE).is_ok());
        assert!(catalogs.tone_directive(DEFAULT_TONE).is_ok());
        assert!(catalogs.length_spec(DEFAULT_LENGTH).is_ok());
    }
}

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Which catalog a selection key was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Genre,
    Tone,
    Length,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionKind::Genre => "genre",
            SelectionKind::Tone => "tone",
            SelectionKind::Length => "length",
        };
        write!(f, "{}", name)
    }
}

/// Main error type for StoryGen
#[derive(Error, Debug)]
pub enum StoryGenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request file error: {0}")]
    RequestParsing(#[from] RequestParseError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Unknown {} '{}'. Available options: {}", .kind, .key, .available.join(", "))]
    InvalidSelection {
        kind: SelectionKind,
        key: String,
        available: Vec<String>,
    },

    #[error("Story prompt is empty. Describe the story you want generated.")]
    EmptyPrompt,

    #[error("No example prompt #{index}: choose between 1 and {count}")]
    UnknownExample { index: usize, count: usize },

    #[error("No API key provided. Pass --api-key or set the {0} environment variable.")]
    MissingApiKey(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoryGenError {
    /// Build an InvalidSelection error listing the keys the catalog accepts
    pub fn invalid_selection<I, S>(kind: SelectionKind, key: &str, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StoryGenError::InvalidSelection {
            kind,
            key: key.to_string(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }
}

/// Errors related to request file parsing
#[derive(Error, Debug)]
pub enum RequestParseError {
    #[error("Failed to read request file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Invalid YAML in {0}: {1}")]
    YamlError(PathBuf, String),
}

/// Errors surfaced by the text-generation provider.
///
/// These are passed through to the user as opaque text; StoryGen never
/// retries or interprets them.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Stream error: {0}")]
    StreamError(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(0)
        } else if err.is_connect() {
            ProviderError::ConnectionRefused(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ProviderError::RequestFailed(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, StoryGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_kind_display() {
        assert_eq!(SelectionKind::Genre.to_string(), "genre");
        assert_eq!(SelectionKind::Tone.to_string(), "tone");
        assert_eq!(SelectionKind::Length.to_string(), "length");
    }

    #[test]
    fn test_invalid_selection_lists_options() {
        let error = StoryGenError::invalid_selection(
            SelectionKind::Genre,
            "Western",
            vec!["Comedy", "Fantasy"],
        );

        let display = error.to_string();
        assert!(display.contains("Unknown genre 'Western'"));
        assert!(display.contains("Comedy, Fantasy"));
    }

    #[test]
    fn test_unknown_example_display() {
        let error = StoryGenError::UnknownExample { index: 9, count: 5 };
        assert_eq!(
            error.to_string(),
            "No example prompt #9: choose between 1 and 5"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let error = ProviderError::HttpError {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("401"));
        assert!(display.contains("Incorrect API key provided"));
    }

    #[test]
    fn test_missing_api_key_names_env_var() {
        let error = StoryGenError::MissingApiKey("OPENAI_API_KEY".to_string());
        assert!(error.to_string().contains("OPENAI_API_KEY"));
    }
}

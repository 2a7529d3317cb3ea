//! Request file loading.
//!
//! A request file is markdown with optional YAML frontmatter holding the
//! genre/tone/length selections; the body is the free-text story prompt.

use gray_matter::engine::YAML;
use gray_matter::Matter;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{RequestParseError, StoryGenError};
use crate::models::{GenerationRequest, RequestMetadata};

/// Parse a request file into a GenerationRequest.
///
/// Selections are NOT validated against the catalogs here; the caller
/// validates the assembled request before composing.
pub fn load_request_file(path: &Path) -> Result<GenerationRequest, StoryGenError> {
    let content = fs::read_to_string(path)
        .map_err(|e| RequestParseError::ReadError(path.to_path_buf(), e))?;

    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(&content);

    // Files without frontmatter use the default selections
    let metadata: RequestMetadata = match parsed.data {
        Some(data) => data
            .deserialize()
            .map_err(|e| RequestParseError::YamlError(path.to_path_buf(), e.to_string()))?,
        None => RequestMetadata::default(),
    };

    let prompt = parsed.content.trim().to_string();

    debug!(
        "Parsed request file '{}': genre={}, tone={}, length={}",
        path.display(),
        metadata.genre,
        metadata.tone,
        metadata.length
    );

    Ok(metadata.into_request(prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_request(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_request_with_frontmatter() {
        let dir = TempDir::new().unwrap();
        let path = write_request(
            &dir,
            "request.md",
            r#"---
genre: Mystery
tone: Dark
length: Long
---
A detective solves crimes using cooking skills"#,
        );

        let request = load_request_file(&path).unwrap();
        assert_eq!(request.genre, "Mystery");
        assert_eq!(request.tone, "Dark");
        assert_eq!(request.length, "Long");
        assert_eq!(
            request.prompt,
            "A detective solves crimes using cooking skills"
        );
    }

    #[test]
    fn test_load_request_partial_frontmatter() {
        let dir = TempDir::new().unwrap();
        let path = write_request(
            &dir,
            "request.md",
            "---\ngenre: Horror\n---\nThe lighthouse keeper hears knocking",
        );

        let request = load_request_file(&path).unwrap();
        assert_eq!(request.genre, "Horror");
        assert_eq!(request.tone, "Serious");
        assert_eq!(request.length, "Short");
    }

    #[test]
    fn test_load_request_without_frontmatter() {
        let dir = TempDir::new().unwrap();
        let path = write_request(&dir, "request.md", "A robot discovers emotions");

        let request = load_request_file(&path).unwrap();
        assert_eq!(request.prompt, "A robot discovers emotions");
        assert_eq!(request.genre, "Fantasy");
    }

    #[test]
    fn test_load_request_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.md");
        assert!(load_request_file(&path).is_err());
    }
}

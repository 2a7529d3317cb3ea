use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::error::StoryGenError;

const DEFAULT_CONFIG: &str = r#"# StoryGen configuration

[provider]
# Any OpenAI-compatible chat completions API
url = "https://api.openai.com/v1"
model = "gpt-3.5-turbo"
timeout_seconds = 300
# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"
temperature = 0.8
top_p = 0.9

[behavior]
stream_output = true
save_output = true

# Extra catalog entries merge over the built-ins:
# [genres]
# Western = "frontier towns, outlaws, and dusty showdowns"
#
# [tones]
# Whimsical = "keep things playful and lightly absurd"
"#;

const EXAMPLE_REQUEST: &str = r#"---
genre: Comedy
tone: Uplifting
length: Short
---
A dragon opens a coffee shop in modern times
"#;

/// Initialize a StoryGen project: default config plus an example request file
pub fn init_project(project_root: &PathBuf) -> Result<(), StoryGenError> {
    info!("Initializing StoryGen project");

    create_file_if_not_exists(&project_root.join("storygen.toml"), DEFAULT_CONFIG)?;
    create_file_if_not_exists(&project_root.join("example_request.md"), EXAMPLE_REQUEST)?;

    print_next_steps(project_root);

    Ok(())
}

fn create_file_if_not_exists(path: &PathBuf, content: &str) -> Result<(), StoryGenError> {
    if !path.exists() {
        fs::write(path, content)?;
        info!("Created file: {}", path.display());
    } else {
        info!("File already exists: {}", path.display());
    }
    Ok(())
}

fn print_next_steps(project_root: &PathBuf) {
    println!("StoryGen project initialized at {}", project_root.display());
    println!("\nNext steps:");
    println!("1. Set your provider API key: export OPENAI_API_KEY=...");
    println!("2. Edit storygen.toml to pick a model or add genres/tones");
    println!("3. Run 'storygen catalogs' to see the available selections");
    println!("4. Run 'storygen generate \"your story idea\"' or");
    println!("   'storygen generate --from-file example_request.md'");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        init_project(&root).unwrap();

        assert!(root.join("storygen.toml").exists());
        assert!(root.join("example_request.md").exists());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        let config_path = root.join("storygen.toml");

        fs::write(&config_path, "# custom").unwrap();
        init_project(&root).unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# custom");
    }

    #[test]
    fn test_default_config_parses() {
        let config: crate::models::Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.provider.model, "gpt-3.5-turbo");
        assert!(config.behavior.stream_output);
    }
}

use std::path::PathBuf;

use crate::core::{load_config, EXAMPLE_PROMPTS};
use crate::error::StoryGenError;

/// List the selectable genres, tones, lengths, and example prompts.
/// Includes any extras merged in from storygen.toml.
pub fn list_catalogs(project_root: &PathBuf) -> Result<(), StoryGenError> {
    let config = load_config(project_root, None, None, None, false)?;
    let catalogs = config.catalogs();

    println!("Genres:");
    for (name, description) in catalogs.genres() {
        println!("  {:<18} {}", name, description);
    }

    println!("\nTones:");
    for (name, directive) in catalogs.tones() {
        println!("  {:<18} {}", name, directive);
    }

    println!("\nLengths:");
    for (name, spec) in catalogs.lengths() {
        println!("  {:<18} {} (target: {} words)", name, spec.description, spec.words);
    }

    println!("\nExample prompts (use `generate --example N`):");
    for (i, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
        println!("  {}. {}", i + 1, prompt);
    }

    Ok(())
}

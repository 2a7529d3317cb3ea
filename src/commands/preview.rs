use std::path::PathBuf;

use crate::commands::generate::build_request;
use crate::core::{compose, count_words, load_config, system_prompt};
use crate::error::StoryGenError;

/// Preview options
pub struct PreviewOptions {
    pub prompt: Option<String>,
    pub example: Option<usize>,
    pub from_file: Option<PathBuf>,
    pub genre: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
}

/// Show the instruction text and system prompt for a request without
/// calling the provider
pub fn preview_request(
    project_root: &PathBuf,
    options: PreviewOptions,
) -> Result<(), StoryGenError> {
    let config = load_config(project_root, None, None, None, false)?;
    let catalogs = config.catalogs();

    let request = build_request(
        options.prompt,
        options.example,
        options.from_file,
        options.genre,
        options.tone,
        options.length,
        &catalogs,
        false,
    )?;
    request.validate(&catalogs)?;

    let target_words = catalogs.target_words(&request.length)?;
    let instruction = compose(&request, &catalogs)?;
    let system = system_prompt(&request.genre, &request.tone, target_words);

    println!("=== REQUEST PREVIEW ===\n");
    println!("Prompt:  {}", request.prompt);
    println!("Genre:   {}", request.genre);
    println!("Tone:    {}", request.tone);
    println!("Length:  {} (~{} words)", request.length, target_words);
    println!("Prompt words: {}", count_words(&request.prompt));

    println!("\n=== SYSTEM PROMPT ===\n{}", system);
    println!("\n=== INSTRUCTION ===\n{}", instruction);

    // Rough estimate: 4 chars per token
    let token_estimate = (system.len() + instruction.len()) / 4;
    println!("\n=== METADATA ===");
    println!("Model: {}", config.provider.model);
    println!("Estimated input tokens: ~{}", token_estimate);
    println!("Max output tokens: {}", target_words * 2);
    println!("Timeout: {}s", config.provider.timeout_seconds);

    Ok(())
}

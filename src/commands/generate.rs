use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::core::{
    compose, count_words, evaluate, export_filename, format_for_export, load_config,
    load_request_file, resolve_api_key, system_prompt, OpenAiClient, StoryProvider,
    EXAMPLE_PROMPTS,
};
use crate::error::StoryGenError;
use crate::models::{Catalogs, GenerationRequest};

/// Generate options
pub struct GenerateOptions {
    /// Free-text story prompt (interactive when absent)
    pub prompt: Option<String>,
    /// 1-based index into the built-in example prompts
    pub example: Option<usize>,
    /// Request file to read instead of CLI arguments
    pub from_file: Option<PathBuf>,
    /// Genre catalog key
    pub genre: Option<String>,
    /// Tone catalog key
    pub tone: Option<String>,
    /// Length catalog key
    pub length: Option<String>,
    /// Provider API key override
    pub api_key: Option<String>,
    /// Model override
    pub model: Option<String>,
    /// Provider URL override
    pub url: Option<String>,
    /// Timeout override
    pub timeout: Option<u64>,
    /// Disable streaming output
    pub no_stream: bool,
    /// Export document path (defaults to a timestamped filename)
    pub output: Option<PathBuf>,
    /// Skip writing the export document
    pub no_save: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            prompt: None,
            example: None,
            from_file: None,
            genre: None,
            tone: None,
            length: None,
            api_key: None,
            model: None,
            url: None,
            timeout: None,
            no_stream: false,
            output: None,
            no_save: false,
        }
    }
}

/// Generate a story from the request and write the export document
pub async fn generate_story(
    project_root: &PathBuf,
    options: GenerateOptions,
) -> Result<(), StoryGenError> {
    let config = load_config(
        project_root,
        options.model.clone(),
        options.url.clone(),
        options.timeout,
        options.no_stream,
    )?;
    let catalogs = config.catalogs();

    let request = build_request(
        options.prompt,
        options.example,
        options.from_file,
        options.genre,
        options.tone,
        options.length,
        &catalogs,
        true,
    )?;
    request.validate(&catalogs)?;

    let target_words = catalogs.target_words(&request.length)?;
    let instruction = compose(&request, &catalogs)?;
    let system = system_prompt(&request.genre, &request.tone, target_words);

    println!("Prompt words: {}", count_words(&request.prompt));
    println!(
        "Genre: {} | Tone: {} | Length: {} (~{} words)",
        request.genre, request.tone, request.length, target_words
    );

    let api_key = resolve_api_key(options.api_key, &config)?;
    let mut client = OpenAiClient::new(config.provider.clone(), api_key)?;
    let model = client.resolve_model().await?;
    info!("Generating {} story with model {}", request.genre, model);

    println!("\nGenerating your {} story...\n", request.genre.to_lowercase());

    // Allow extra tokens beyond the target for formatting
    let max_tokens = target_words * 2;
    let story = client
        .generate(&system, &instruction, max_tokens, config.behavior.stream_output)
        .await?;

    let result = evaluate(story, target_words);

    if !config.behavior.stream_output {
        println!("=== Your Generated Story ===\n");
        println!("{}\n", result.story_text);
    }

    println!("=== Story Metrics ===");
    println!("Word count: {}", result.word_count);
    println!("Target:     {}", result.target_word_count);
    println!("Accuracy:   {}%", result.accuracy_percent);

    if options.no_save || !config.behavior.save_output {
        return Ok(());
    }

    let generated_at = Local::now();
    let document = format_for_export(&result.story_text, &request, generated_at);
    let output_path = options
        .output
        .unwrap_or_else(|| PathBuf::from(export_filename(generated_at)));
    fs::write(&output_path, document)?;
    println!("\nStory saved to {}", output_path.display());

    Ok(())
}

/// Assemble a GenerationRequest from a request file, CLI arguments, a
/// built-in example, or interactive prompts (in that order of precedence).
/// Explicit genre/tone/length flags override request file frontmatter.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_request(
    prompt: Option<String>,
    example: Option<usize>,
    from_file: Option<PathBuf>,
    genre: Option<String>,
    tone: Option<String>,
    length: Option<String>,
    catalogs: &Catalogs,
    interactive: bool,
) -> Result<GenerationRequest, StoryGenError> {
    let mut request = if let Some(path) = from_file {
        load_request_file(&path)?
    } else {
        let prompt_text = match (prompt, example) {
            (Some(p), _) => p,
            (None, Some(index)) => example_prompt(index)?,
            (None, None) if interactive => return prompt_interactively(catalogs),
            (None, None) => return Err(StoryGenError::EmptyPrompt),
        };
        GenerationRequest {
            prompt: prompt_text,
            genre: crate::models::catalog::DEFAULT_GENRE.to_string(),
            tone: crate::models::catalog::DEFAULT_TONE.to_string(),
            length: crate::models::catalog::DEFAULT_LENGTH.to_string(),
        }
    };

    if let Some(g) = genre {
        request.genre = g;
    }
    if let Some(t) = tone {
        request.tone = t;
    }
    if let Some(l) = length {
        request.length = l;
    }

    Ok(request)
}

/// Look up a built-in example prompt by 1-based index
fn example_prompt(index: usize) -> Result<String, StoryGenError> {
    if index == 0 || index > EXAMPLE_PROMPTS.len() {
        return Err(StoryGenError::UnknownExample {
            index,
            count: EXAMPLE_PROMPTS.len(),
        });
    }
    Ok(EXAMPLE_PROMPTS[index - 1].to_string())
}

/// Ask for the prompt and selections interactively
fn prompt_interactively(catalogs: &Catalogs) -> Result<GenerationRequest, StoryGenError> {
    let theme = ColorfulTheme::default();

    let prompt: String = Input::with_theme(&theme)
        .with_prompt("Story prompt")
        .interact_text()
        .map_err(|e| StoryGenError::Input(format!("Failed to read prompt: {}", e)))?;

    let genre = select_from(&theme, "Genre", &catalogs.genre_names())?;
    let tone = select_from(&theme, "Tone", &catalogs.tone_names())?;
    let length = select_from(&theme, "Length", &catalogs.length_names())?;

    Ok(GenerationRequest::new(prompt, genre, tone, length))
}

fn select_from(
    theme: &ColorfulTheme,
    label: &str,
    items: &[String],
) -> Result<String, StoryGenError> {
    let selection = Select::with_theme(theme)
        .with_prompt(label)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| {
            StoryGenError::Input(format!("Failed to read {}: {}", label.to_lowercase(), e))
        })?;
    Ok(items[selection].clone())
}

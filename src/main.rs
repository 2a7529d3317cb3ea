use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod core;
mod error;
mod models;

use commands::{
    generate_story, init_project, list_catalogs, preview_request, GenerateOptions, PreviewOptions,
};

/// StoryGen - LLM-powered story generator
#[derive(Parser)]
#[command(name = "storygen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new StoryGen project
    Init {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Generate a story
    Generate {
        /// Free-text story prompt (interactive when omitted)
        prompt: Option<String>,

        /// Use a built-in example prompt (1-based, see `catalogs`)
        #[arg(long)]
        example: Option<usize>,

        /// Read the request from a markdown file with YAML frontmatter
        #[arg(long = "from-file", short = 'f')]
        from_file: Option<PathBuf>,

        /// Genre catalog key
        #[arg(long, short = 'g')]
        genre: Option<String>,

        /// Tone catalog key
        #[arg(long)]
        tone: Option<String>,

        /// Length catalog key (Short, Medium, Long)
        #[arg(long, short = 'l')]
        length: Option<String>,

        /// Provider API key (falls back to the configured env var)
        #[arg(long)]
        api_key: Option<String>,

        /// Override the model to use
        #[arg(long)]
        model: Option<String>,

        /// Override the provider base URL
        #[arg(long)]
        url: Option<String>,

        /// Override the timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Disable streaming output
        #[arg(long)]
        no_stream: bool,

        /// Where to write the export document
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Skip writing the export document
        #[arg(long)]
        no_save: bool,
    },

    /// Preview the instruction text without calling the provider
    Preview {
        /// Free-text story prompt
        prompt: Option<String>,

        /// Use a built-in example prompt (1-based, see `catalogs`)
        #[arg(long)]
        example: Option<usize>,

        /// Read the request from a markdown file with YAML frontmatter
        #[arg(long = "from-file", short = 'f')]
        from_file: Option<PathBuf>,

        /// Genre catalog key
        #[arg(long, short = 'g')]
        genre: Option<String>,

        /// Tone catalog key
        #[arg(long)]
        tone: Option<String>,

        /// Length catalog key (Short, Medium, Long)
        #[arg(long, short = 'l')]
        length: Option<String>,
    },

    /// List available genres, tones, lengths, and example prompts
    Catalogs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Init { path } => {
            let project_root = path.unwrap_or_else(|| std::env::current_dir().unwrap());
            init_project(&project_root)
        }

        Commands::Generate {
            prompt,
            example,
            from_file,
            genre,
            tone,
            length,
            api_key,
            model,
            url,
            timeout,
            no_stream,
            output,
            no_save,
        } => {
            let project_root = std::env::current_dir().unwrap();
            let options = GenerateOptions {
                prompt,
                example,
                from_file,
                genre,
                tone,
                length,
                api_key,
                model,
                url,
                timeout,
                no_stream,
                output,
                no_save,
            };
            generate_story(&project_root, options).await
        }

        Commands::Preview {
            prompt,
            example,
            from_file,
            genre,
            tone,
            length,
        } => {
            let project_root = std::env::current_dir().unwrap();
            let options = PreviewOptions {
                prompt,
                example,
                from_file,
                genre,
                tone,
                length,
            };
            preview_request(&project_root, options)
        }

        Commands::Catalogs => {
            let project_root = std::env::current_dir().unwrap();
            list_catalogs(&project_root)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

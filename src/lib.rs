//! StoryGen - LLM-powered story generator
//!
//! StoryGen turns a free-text story idea plus genre/tone/length selections
//! into an instruction for a hosted text-generation provider, then reports
//! word-count metrics on the result and writes a plain-text export document.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (init, generate, preview, catalogs)
//! - **core**: Core functionality (prompt composer, provider client, request files)
//! - **models**: Data structures (catalogs, config, requests)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, StoryGenError};

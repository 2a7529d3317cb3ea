//! Capability interface for hosted text-generation providers

use async_trait::async_trait;

use crate::error::ProviderError;

/// A hosted text-generation backend.
///
/// Instruction text goes out, raw story text comes back. Failures are
/// opaque: callers surface the error text to the user unmodified, with no
/// retries or classification. An empty response is a valid story of zero
/// words, not an error.
#[async_trait]
pub trait StoryProvider {
    /// Send a generation request and return the complete response text.
    ///
    /// When `stream_to_stdout` is set, response tokens are echoed to the
    /// terminal as they arrive.
    async fn generate(
        &self,
        system_prompt: &str,
        instruction: &str,
        max_tokens: u32,
        stream_to_stdout: bool,
    ) -> Result<String, ProviderError>;
}

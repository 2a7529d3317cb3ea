use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::provider::StoryProvider;
use crate::error::ProviderError;
use crate::models::ProviderConfig;

/// Client for OpenAI-compatible chat-completion APIs
pub struct OpenAiClient {
    client: Client,
    config: ProviderConfig,
    api_key: String,
}

/// Chat message for the completions API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

/// Non-streaming completion response
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChatMessage,
}

/// One server-sent chunk of a streaming completion
#[derive(Debug, Deserialize)]
struct ChatChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Response from the model listing endpoint
#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

impl OpenAiClient {
    /// Create a new client with the given configuration and API key
    pub fn new(config: ProviderConfig, api_key: String) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// The model generation requests will use
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn chat_request(
        &self,
        system_prompt: &str,
        instruction: &str,
        max_tokens: u32,
        stream: bool,
    ) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(instruction),
            ],
            max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            stream,
        }
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<reqwest::Response, ProviderError> {
        let url = format!("{}/chat/completions", self.config.url);

        debug!("Sending chat request to {}", url);
        debug!(
            "Using model: {}, max_tokens: {}, stream: {}",
            request.model, request.max_tokens, request.stream
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionRefused(format!(
                        "Could not connect to provider at {}",
                        self.config.url
                    ))
                } else if e.is_timeout() {
                    ProviderError::Timeout(self.config.timeout_seconds)
                } else {
                    ProviderError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            // Provider error bodies are passed through verbatim for display
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::HttpError { status, message });
        }

        Ok(response)
    }

    async fn generate_blocking(
        &self,
        system_prompt: &str,
        instruction: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let request = self.chat_request(system_prompt, instruction, max_tokens, false);
        let response = self.send_chat(&request).await?;

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        // An empty choices array is treated as a zero-word story
        let story = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        info!("Generated {} characters", story.len());
        Ok(story)
    }

    async fn generate_streaming(
        &self,
        system_prompt: &str,
        instruction: &str,
        max_tokens: u32,
        stream_to_stdout: bool,
    ) -> Result<String, ProviderError> {
        let request = self.chat_request(system_prompt, instruction, max_tokens, true);
        let response = self.send_chat(&request).await?;

        let mut full_response = String::new();
        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut generation_done = false;
        let mut chunk_count = 0usize;
        let mut last_progress_log = std::time::Instant::now();
        let progress_interval = std::time::Duration::from_secs(10);

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| ProviderError::StreamError(e.to_string()))?;

            // SSE: newline-delimited "data: {json}" lines, "data: [DONE]" last
            let chunk_str = String::from_utf8_lossy(&chunk);
            buffer.push_str(&chunk_str);

            while let Some(newline_pos) = buffer.find('\n') {
                let line = buffer[..newline_pos].trim().to_string();
                buffer = buffer[newline_pos + 1..].to_string();

                let Some(data) = line.strip_prefix("data:") else {
                    continue;
                };
                let data = data.trim();

                if data == "[DONE]" {
                    generation_done = true;
                    if stream_to_stdout {
                        println!(); // Final newline
                    }
                    break;
                }

                let parsed: ChatChunk = match serde_json::from_str(data) {
                    Ok(p) => p,
                    Err(e) => {
                        // A parse error after content has arrived is a
                        // malformed trailing chunk; ignore it
                        if !full_response.is_empty() {
                            debug!("Ignoring parse error on chunk: {}", e);
                            continue;
                        }
                        return Err(ProviderError::ParseError(format!(
                            "Failed to parse: {} - {}",
                            if data.len() > 200 { &data[..200] } else { data },
                            e
                        )));
                    }
                };

                let Some(choice) = parsed.choices.first() else {
                    continue;
                };
                let content = choice.delta.content.as_deref().unwrap_or("");
                full_response.push_str(content);
                chunk_count += 1;

                if !stream_to_stdout && last_progress_log.elapsed() > progress_interval {
                    info!(
                        "Generation in progress: {} chunks, {} chars so far...",
                        chunk_count,
                        full_response.len()
                    );
                    last_progress_log = std::time::Instant::now();
                }

                if stream_to_stdout {
                    print!("{}", content);
                    io::stdout().flush().ok();
                }

                if choice.finish_reason.is_some() {
                    debug!("Finish reason: {:?}", choice.finish_reason);
                }
            }

            if generation_done {
                break;
            }
        }

        info!("Generated {} characters", full_response.len());
        Ok(full_response.trim().to_string())
    }

    /// List the models the provider offers
    pub async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/models", self.config.url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionRefused(format!(
                        "Could not connect to provider at {}",
                        self.config.url
                    ))
                } else {
                    ProviderError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::HttpError { status, message });
        }

        let list: ModelList = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(list.data.into_iter().map(|m| m.id).collect())
    }

    /// Confirm the configured model exists, falling back to the first model
    /// the provider lists when it does not. Returns the model that will be
    /// used. Providers without a model listing endpoint keep the configured
    /// model.
    pub async fn resolve_model(&mut self) -> Result<String, ProviderError> {
        let models = match self.list_models().await {
            Ok(models) => models,
            Err(e) => {
                debug!("Model listing unavailable ({}), keeping '{}'", e, self.config.model);
                return Ok(self.config.model.clone());
            }
        };

        if models.iter().any(|m| m == &self.config.model) {
            return Ok(self.config.model.clone());
        }

        match models.first() {
            Some(fallback) => {
                warn!(
                    "Model '{}' not found, falling back to '{}'",
                    self.config.model, fallback
                );
                self.config.model = fallback.clone();
                Ok(self.config.model.clone())
            }
            None => {
                warn!("Provider lists no models, keeping '{}'", self.config.model);
                Ok(self.config.model.clone())
            }
        }
    }
}

#[async_trait]
impl StoryProvider for OpenAiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        instruction: &str,
        max_tokens: u32,
        stream_to_stdout: bool,
    ) -> Result<String, ProviderError> {
        if stream_to_stdout {
            self.generate_streaming(system_prompt, instruction, max_tokens, true)
                .await
        } else {
            self.generate_blocking(system_prompt, instruction, max_tokens)
                .await
        }
    }
}

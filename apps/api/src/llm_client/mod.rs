/// LLM Client: the single point of entry for every oracle call in the service.
///
/// ARCHITECTURAL RULE: No other module may talk to a chat API directly.
/// Callers build a `ChatRequest` and go through the `Oracle` trait, which the
/// matching and analysis modules treat as "submit messages, receive text".
///
/// Backends: `LlmClient` (Anthropic Messages API) and `ProxyOracle` (any chat
/// proxy replying with a raw string or `{"message": {"content": ...}}`).
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
pub mod readiness;

pub use readiness::OracleReadiness;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Model used for keyword extraction and analysis.
pub const MODEL: &str = "claude-sonnet-4-5";
/// Cheaper model used for the resume classification check.
pub const LIGHT_MODEL: &str = "claude-haiku-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Model selection. Each backend maps a tier onto its own model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelTier {
    #[default]
    Standard,
    Light,
}

/// One oracle call: an ordered list of role-tagged messages plus model choice.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub tier: ModelTier,
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            tier: ModelTier::Standard,
            temperature: None,
        }
    }

    pub fn with_tier(mut self, tier: ModelTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// What an oracle hands back: either bare text or a message object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OracleReply {
    Text(String),
    Structured(StructuredReply),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructuredReply {
    pub message: ReplyMessage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplyMessage {
    pub content: String,
}

impl OracleReply {
    pub fn content(&self) -> &str {
        match self {
            OracleReply::Text(text) => text,
            OracleReply::Structured(reply) => &reply.message.content,
        }
    }
}

/// Opaque text-completion oracle. One attempt per call; callers decide
/// whether to retry.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<OracleReply, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Anthropic backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<AnthropicMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: std::time::Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }

    fn model_for(tier: ModelTier) -> &'static str {
        match tier {
            ModelTier::Standard => MODEL,
            ModelTier::Light => LIGHT_MODEL,
        }
    }

    /// Makes a single call to the Messages API, returning the full response object.
    pub async fn call(&self, request: &ChatRequest) -> Result<LlmResponse, LlmError> {
        let request_body = build_anthropic_request(request);

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

/// System messages are folded into Anthropic's top-level `system` field.
fn build_anthropic_request(request: &ChatRequest) -> AnthropicRequest<'_> {
    let system: Vec<&str> = request
        .messages
        .iter()
        .filter(|m| m.role == ChatRole::System)
        .map(|m| m.content.as_str())
        .collect();

    AnthropicRequest {
        model: LlmClient::model_for(request.tier),
        max_tokens: MAX_TOKENS,
        system: (!system.is_empty()).then(|| system.join("\n\n")),
        messages: request
            .messages
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .map(|m| AnthropicMessage {
                role: "user",
                content: &m.content,
            })
            .collect(),
        temperature: request.temperature,
    }
}

#[async_trait]
impl Oracle for LlmClient {
    async fn chat(&self, request: &ChatRequest) -> Result<OracleReply, LlmError> {
        let response = self.call(request).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(OracleReply::Structured(StructuredReply {
            message: ReplyMessage {
                content: text.to_string(),
            },
        }))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generic chat proxy backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Posts the message list to a chat proxy and accepts either reply shape.
#[derive(Clone)]
pub struct ProxyOracle {
    client: Client,
    url: String,
}

impl ProxyOracle {
    pub fn new(url: String, timeout: std::time::Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
        })
    }

    fn model_for(tier: ModelTier) -> &'static str {
        match tier {
            ModelTier::Standard => "gpt-4o",
            ModelTier::Light => "gpt-4o-mini",
        }
    }
}

#[async_trait]
impl Oracle for ProxyOracle {
    async fn chat(&self, request: &ChatRequest) -> Result<OracleReply, LlmError> {
        let body = ProxyRequest {
            model: Self::model_for(request.tier),
            messages: &request.messages,
            temperature: request.temperature,
        };

        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        // A JSON string or message object decodes as such; anything else is
        // taken as the raw reply text.
        Ok(serde_json::from_str::<OracleReply>(&text).unwrap_or(OracleReply::Text(text)))
    }
}

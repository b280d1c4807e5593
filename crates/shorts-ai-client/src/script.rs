//! Script generation client.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint in JSON mode and
//! asks for a narrated script plus descriptive visual prompts. Models are
//! tried in order until one succeeds.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use shorts_models::ScriptResult;

use crate::error::{AiError, AiResult};
use crate::retry::with_retry;

const SYSTEM_PROMPT: &str = "You are an experienced video director who makes viral short videos.\n\
\n\
YOUR TASK:\n\
1. Read the provided source text.\n\
2. Write an exciting narrated script of about 60 seconds (roughly 150 words).\n\
\n\
ABOUT THE IMAGES (visual_prompts):\n\
Do not return abstract words like \"success\" or \"future\"; the image \
generator does not understand them. Return 5 to 7 DESCRIPTIVE PROMPTS of \
physical scenes, in English.\n\
\n\
BAD: [\"happiness\", \"technology\", \"future\"]\n\
GOOD: [\"a happy woman smiling holding a trophy\", \"a futuristic glowing \
microchip close up\", \"a cyberpunk city skyline at night\"]\n\
\n\
Respond with ONLY a JSON object with keys \"script_text\" (string) and \
\"visual_prompts\" (array of strings).";

/// Script client configuration.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Base URL of the chat-completions service.
    pub base_url: String,
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Models to try, in order.
    pub models: Vec<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Max retries per model on transient failures.
    pub max_retries: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            models: vec!["gpt-4o".to_string(), "gpt-4o-mini".to_string()],
            timeout: Duration::from_secs(60),
            max_retries: 1,
        }
    }
}

impl ScriptConfig {
    /// Create config from environment variables.
    pub fn from_env() -> AiResult<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| AiError::NotConfigured("OPENAI_API_KEY"))?;

        let models = std::env::var("SHORTS_SCRIPT_MODELS")
            .map(|v| v.split(',').map(|m| m.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["gpt-4o".to_string(), "gpt-4o-mini".to_string()]);

        Ok(Self {
            base_url: std::env::var("SHORTS_SCRIPT_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            api_key,
            models,
            timeout: Duration::from_secs(
                std::env::var("SHORTS_SCRIPT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            max_retries: 1,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the script generation service.
pub struct ScriptClient {
    http: Client,
    config: ScriptConfig,
}

impl ScriptClient {
    /// Create a new script client.
    pub fn new(config: ScriptConfig) -> AiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AiResult<Self> {
        Self::new(ScriptConfig::from_env()?)
    }

    /// Generate the narration script and visual prompts for `article`.
    pub async fn generate_script(&self, article: &str) -> AiResult<ScriptResult> {
        let mut last_error = None;

        for model in &self.config.models {
            info!(model = %model, "Requesting script generation");
            match self.call_model(model, article).await {
                Ok(result) => {
                    info!(
                        model = %model,
                        prompts = result.visual_prompts.len(),
                        "Script generated"
                    );
                    return Ok(result);
                }
                Err(e) => {
                    warn!(model = %model, "Script generation failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AiError::request_failed("No script models configured")))
    }

    async fn call_model(&self, model: &str, article: &str) -> AiResult<ScriptResult> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let user_content = format!("Source text:\n\n{}", article);

        let response = with_retry(self.config.max_retries, "script_generation", || async {
            let request = ChatRequest {
                model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: SYSTEM_PROMPT,
                    },
                    ChatMessage {
                        role: "user",
                        content: &user_content,
                    },
                ],
                response_format: ResponseFormat {
                    format_type: "json_object",
                },
            };

            self.http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .json(&request)
                .send()
                .await
                .map_err(AiError::Network)
        })
        .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::request_failed(format!(
                "Script service returned {}: {}",
                status, body
            )));
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or(AiError::EmptyResponse)?;

        let result: ScriptResult = serde_json::from_str(strip_code_fences(content))?;
        Ok(result)
    }
}

/// Strip a surrounding markdown code fence, if present.
///
/// Some models wrap JSON-mode output in ```json fences anyway.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

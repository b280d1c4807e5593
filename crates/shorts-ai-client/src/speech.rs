//! Speech synthesis and word-timestamp transcription client.
//!
//! Two calls against an OpenAI-compatible audio API: text-to-speech
//! producing the narration audio, then a word-granularity transcription of
//! that audio producing the caption units the timeline is built from.

use std::time::Duration;

use base64::Engine as _;
use reqwest::multipart;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use shorts_models::CaptionUnit;

use crate::error::{AiError, AiResult};
use crate::retry::with_retry;

/// Speech client configuration.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Base URL of the audio service.
    pub base_url: String,
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Text-to-speech model.
    pub tts_model: String,
    /// Narration voice.
    pub voice: String,
    /// Transcription model.
    pub transcribe_model: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Max retries on transient failures.
    pub max_retries: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            tts_model: "tts-1".to_string(),
            voice: "alloy".to_string(),
            transcribe_model: "whisper-1".to_string(),
            timeout: Duration::from_secs(120),
            max_retries: 1,
        }
    }
}

impl SpeechConfig {
    /// Create config from environment variables.
    pub fn from_env() -> AiResult<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| AiError::NotConfigured("OPENAI_API_KEY"))?;

        Ok(Self {
            base_url: std::env::var("SHORTS_SPEECH_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            api_key,
            tts_model: std::env::var("SHORTS_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            voice: std::env::var("SHORTS_TTS_VOICE").unwrap_or_else(|_| "alloy".to_string()),
            transcribe_model: std::env::var("SHORTS_TRANSCRIBE_MODEL")
                .unwrap_or_else(|_| "whisper-1".to_string()),
            timeout: Duration::from_secs(
                std::env::var("SHORTS_SPEECH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
            max_retries: 1,
        })
    }
}

/// Synthesized narration audio.
#[derive(Debug, Clone)]
pub struct NarrationAudio {
    /// Raw MP3 bytes, kept for the transcription upload.
    pub bytes: Vec<u8>,
    /// The audio as a `data:audio/mp3;base64,..` URL for the player.
    pub data_url: String,
}

#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    words: Vec<TranscribedWord>,
}

#[derive(Debug, Deserialize)]
struct TranscribedWord {
    word: String,
    start: f64,
    end: f64,
}

/// Client for the speech service.
pub struct SpeechClient {
    http: Client,
    config: SpeechConfig,
}

impl SpeechClient {
    /// Create a new speech client.
    pub fn new(config: SpeechConfig) -> AiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AiResult<Self> {
        Self::new(SpeechConfig::from_env()?)
    }

    /// Synthesize narration audio for `text`.
    pub async fn synthesize(&self, text: &str) -> AiResult<NarrationAudio> {
        let url = format!("{}/v1/audio/speech", self.config.base_url);

        info!(chars = text.len(), "Synthesizing narration");

        let response = with_retry(self.config.max_retries, "speech_synthesis", || async {
            self.http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .json(&TtsRequest {
                    model: &self.config.tts_model,
                    voice: &self.config.voice,
                    input: text,
                })
                .send()
                .await
                .map_err(AiError::Network)
        })
        .await?;

        if !response.status().is_success() {
            return Err(AiError::request_failed(format!(
                "Speech service returned {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(AiError::EmptyResponse);
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Ok(NarrationAudio {
            data_url: format!("data:audio/mp3;base64,{}", encoded),
            bytes,
        })
    }

    /// Transcribe narration audio into word-level caption units.
    pub async fn transcribe(&self, audio: &NarrationAudio) -> AiResult<Vec<CaptionUnit>> {
        let url = format!("{}/v1/audio/transcriptions", self.config.base_url);

        info!(bytes = audio.bytes.len(), "Transcribing narration");

        let response = with_retry(self.config.max_retries, "transcription", || async {
            let part = multipart::Part::bytes(audio.bytes.clone())
                .file_name("narration.mp3")
                .mime_str("audio/mpeg")
                .map_err(AiError::Network)?;

            let form = multipart::Form::new()
                .part("file", part)
                .text("model", self.config.transcribe_model.clone())
                .text("response_format", "verbose_json")
                .text("timestamp_granularities[]", "word");

            self.http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .multipart(form)
                .send()
                .await
                .map_err(AiError::Network)
        })
        .await?;

        if !response.status().is_success() {
            return Err(AiError::request_failed(format!(
                "Transcription service returned {}",
                response.status()
            )));
        }

        let transcription: TranscriptionResponse = response.json().await?;
        Ok(transcription
            .words
            .into_iter()
            .map(|w| CaptionUnit::new(w.word, w.start, w.end))
            .collect())
    }

    /// Synthesize and transcribe in one step.
    pub async fn narrate(&self, text: &str) -> AiResult<(NarrationAudio, Vec<CaptionUnit>)> {
        let audio = self.synthesize(text).await?;
        let captions = self.transcribe(&audio).await?;
        Ok((audio, captions))
    }
}

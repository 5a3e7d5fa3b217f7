use crate::domain::ports::{SuggestionService, SuggestionTask};
use crate::utils::error::{Result, SeoError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_EXCERPT_CHARS: usize = 1000;

pub const UNAVAILABLE_MESSAGE: &str =
    "AI services are currently unavailable. Please check configuration.";
pub const FAILURE_MESSAGE: &str = "Could not generate AI suggestions at this time.";
pub const EMPTY_MESSAGE: &str = "No suggestions available.";

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
    /// Only this many leading chars of the content are sent.
    pub excerpt_chars: usize,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

pub struct GeminiClient {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    pub fn build_prompt(&self, content: &str, task: SuggestionTask) -> String {
        let excerpt: String = content.chars().take(self.settings.excerpt_chars).collect();
        format!(
            "{}\n\nContent excerpt:\n{}...",
            task.instruction(),
            excerpt
        )
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        );
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!("Making suggestion request to: {}", url);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.settings.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Suggestion response status: {}", status);
        if !status.is_success() {
            return Err(SeoError::SuggestionError {
                message: format!("service answered with HTTP {}", status),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

#[async_trait]
impl SuggestionService for GeminiClient {
    async fn suggest(&self, content: &str, task: SuggestionTask) -> String {
        let prompt = self.build_prompt(content, task);
        match self.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => EMPTY_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!("❌ Suggestion request failed: {}", e);
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Suggestion handle passed to whoever needs it. `Unconfigured` answers
/// every request with a fixed notice instead of calling out.
pub enum SuggestionClient {
    Unconfigured,
    Gemini(GeminiClient),
}

impl SuggestionClient {
    pub fn from_settings(settings: Option<GeminiSettings>) -> Result<Self> {
        match settings {
            Some(settings) if !settings.api_key.trim().is_empty() => {
                Ok(SuggestionClient::Gemini(GeminiClient::new(settings)?))
            }
            _ => Ok(SuggestionClient::Unconfigured),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, SuggestionClient::Gemini(_))
    }
}

#[async_trait]
impl SuggestionService for SuggestionClient {
    async fn suggest(&self, content: &str, task: SuggestionTask) -> String {
        match self {
            SuggestionClient::Unconfigured => {
                tracing::warn!("Suggestion service is not configured");
                UNAVAILABLE_MESSAGE.to_string()
            }
            SuggestionClient::Gemini(client) => client.suggest(content, task).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_truncates_excerpt() {
        let mut settings = GeminiSettings::new("key");
        settings.excerpt_chars = 5;
        let client = GeminiClient::new(settings).unwrap();

        let prompt = client.build_prompt("abcdefghij", SuggestionTask::Audit);
        assert_eq!(
            prompt,
            "Provide a quick SEO checklist for this content regarding structure, readability, and intent.\n\nContent excerpt:\nabcde..."
        );
    }

    #[test]
    fn test_blank_key_is_unconfigured() {
        let client = SuggestionClient::from_settings(Some(GeminiSettings::new("  "))).unwrap();
        assert!(!client.is_configured());
        let client = SuggestionClient::from_settings(None).unwrap();
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_returns_notice() {
        let answer = SuggestionClient::Unconfigured
            .suggest("text", SuggestionTask::Keyword)
            .await;
        assert_eq!(answer, UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let parsed: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "one "}, {"text": "two"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.text(), "one two");
        assert_eq!(GenerateContentResponse::default().text(), "");
    }
}

//! LLM Client — the single point of entry for every Gemini call in Team Selector.
//!
//! No other module talks to the generation service directly. Callers go through
//! `complete_or_fallback`, which always yields text and reports failures on a
//! side channel instead of propagating them.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Hardcoded model for every completion.
pub const MODEL: &str = "gemini-pro";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Text substituted for the completion whenever generation fails.
pub const FALLBACK_TEXT: &str = "Sorry, I couldn't process your request.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("GOOGLE_API_KEY is not configured")]
    MissingCredential,

    #[error("Authentication failed (status {status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Model returned empty content")]
    EmptyContent,
}

/// A text-generation backend. Implement this to swap providers or stub the
/// service out in tests.
///
/// Carried in `AppState` as `Arc<dyn CompletionClient>`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Outcome of one generation attempt. `text` is always usable; `error` is set
/// when `text` is the fallback.
#[derive(Debug)]
pub struct Completion {
    pub text: String,
    pub error: Option<CompletionError>,
}

/// Runs one completion and converts any failure into `FALLBACK_TEXT`.
pub async fn complete_or_fallback(client: &dyn CompletionClient, prompt: &str) -> Completion {
    match client.complete(prompt).await {
        Ok(text) => Completion { text, error: None },
        Err(e) => {
            warn!("Completion failed, substituting fallback text: {e}");
            Completion {
                text: FALLBACK_TEXT.to_string(),
                error: Some(e),
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Gemini `generateContent` client. The key comes from the environment and is
/// only checked when a call is made.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(CompletionError::MissingCredential)?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(classify_error(status, &body));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::Malformed(e.to_string()))?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Completion succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.text().ok_or(CompletionError::EmptyContent)
    }
}

/// Maps a non-2xx response onto a typed failure.
/// Gemini reports a bad key as 400 `INVALID_ARGUMENT`, so the message is checked too.
fn classify_error(status: u16, body: &str) -> CompletionError {
    let (message, reason) = match serde_json::from_str::<GeminiError>(body) {
        Ok(e) => (e.error.message, e.error.status.unwrap_or_default()),
        Err(_) => (body.to_string(), String::new()),
    };

    let bad_key = message.to_lowercase().contains("api key");
    if status == 401 || status == 403 || reason == "UNAUTHENTICATED" || bad_key {
        CompletionError::Authentication { status, message }
    } else {
        CompletionError::Service { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::Service {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            Ok(format!("echo: {prompt}"))
        }
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Recommended Role: "}, {"text": "Team Lead"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5}
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Recommended Role: Team Lead"));
        assert_eq!(parsed.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(parsed.text().is_none());
    }

    #[test]
    fn test_classify_error_invalid_key_is_authentication() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            classify_error(400, body),
            CompletionError::Authentication { status: 400, .. }
        ));
    }

    #[test]
    fn test_classify_error_forbidden_is_authentication() {
        assert!(matches!(
            classify_error(403, "forbidden"),
            CompletionError::Authentication { status: 403, .. }
        ));
    }

    #[test]
    fn test_classify_error_server_error_is_service() {
        let body = r#"{"error": {"code": 500, "message": "Internal error", "status": "INTERNAL"}}"#;
        match classify_error(500, body) {
            CompletionError::Service { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_credential_is_reported_without_network() {
        let client = GeminiClient::new(None).unwrap();
        let err = client.complete("hello").await.unwrap_err();
        assert!(matches!(err, CompletionError::MissingCredential));
    }

    #[tokio::test]
    async fn test_fallback_substitutes_text_and_reports_error() {
        let completion = complete_or_fallback(&FailingClient, "prompt").await;
        assert_eq!(completion.text, FALLBACK_TEXT);
        assert!(matches!(
            completion.error,
            Some(CompletionError::Service { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fallback_passes_through_success() {
        let completion = complete_or_fallback(&EchoClient, "hi").await;
        assert_eq!(completion.text, "echo: hi");
        assert!(completion.error.is_none());
    }
}

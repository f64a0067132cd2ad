// Gemini `generateContent` client for group names.
//
// Asks for a JSON array of strings via a response schema and pulls the text of
// the first candidate out of the reply.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::NamingError;
use crate::namer::{GroupNamer, NamingRequest};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

// ---------------------------------------------------------------------------
// GeminiNamer
// ---------------------------------------------------------------------------

/// Group namer backed by the Gemini API.
pub struct GeminiNamer {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiNamer {
    /// Create a namer with the given API key and model identifier.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the namer at a different API base URL.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl GroupNamer for GeminiNamer {
    async fn suggest_names(&self, request: &NamingRequest) -> Result<Vec<String>, NamingError> {
        if self.api_key.is_empty() {
            return Err(NamingError::Disabled);
        }

        let body = request_body(&request.instruction);
        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NamingError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let names = extract_text(&text)
            .ok_or_else(|| NamingError::MalformedResponse("no candidate text".to_string()))
            .and_then(|t| parse_names(&t))?;
        debug!(requested = request.count, received = names.len(), "group names received");
        Ok(names)
    }
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

/// Build the `generateContent` request body.
pub(crate) fn request_body(instruction: &str) -> Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": instruction }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        }
    })
}

/// Extract `candidates[0].content.parts[0].text` from a response body.
pub(crate) fn extract_text(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

/// Parse a JSON array of strings.
pub(crate) fn parse_names(text: &str) -> Result<Vec<String>, NamingError> {
    let v: Value = serde_json::from_str(text)
        .map_err(|e| NamingError::MalformedResponse(format!("not JSON: {e}")))?;
    let items = v
        .as_array()
        .ok_or_else(|| NamingError::MalformedResponse("expected a JSON array".to_string()))?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(|s| s.to_string()).ok_or_else(|| {
                NamingError::MalformedResponse(format!("non-string element: {item}"))
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

//! The group-naming capability.
//!
//! Naming is an optional, best-effort step: a [`GroupNamer`] either returns
//! an ordered list of display names or a [`NamingError`], and the caller falls
//! back to the existing names on any error.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::NamingConfig;
use crate::error::NamingError;
use crate::gemini::GeminiNamer;

/// The flavor of names to ask for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamingStyle {
    /// Language the names should be written in.
    pub language: String,
    /// Adjectives describing the tone of the names.
    pub tone: String,
    /// What the groups are for.
    pub occasion: String,
}

impl Default for NamingStyle {
    fn default() -> Self {
        Self {
            language: "Traditional Chinese".to_string(),
            tone: "fun, professional, and energetic".to_string(),
            occasion: "an HR team building event".to_string(),
        }
    }
}

/// A request for `count` group names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRequest {
    /// How many names are wanted.
    pub count: usize,
    /// Natural-language instruction sent to the service.
    pub instruction: String,
}

impl NamingRequest {
    /// Build a request for `count` names in the given style.
    pub fn new(count: usize, style: &NamingStyle) -> Self {
        let instruction = format!(
            "I have {count} groups of people for {occasion}. \
             Please generate {count} {tone} team names in {language}. \
             Return as a JSON array of strings.",
            occasion = style.occasion,
            tone = style.tone,
            language = style.language,
        );
        Self { count, instruction }
    }
}

/// Something that can suggest display names for groups.
#[async_trait]
pub trait GroupNamer: Send + Sync {
    /// Suggest names in group order. The list may be shorter than requested.
    async fn suggest_names(&self, request: &NamingRequest) -> Result<Vec<String>, NamingError>;
}

/// A configured naming service, or none at all.
pub enum NamerClient {
    /// A Gemini-backed namer is configured.
    Active(GeminiNamer),
    /// Naming is turned off or has no API key.
    Disabled,
}

impl NamerClient {
    /// Build a client from naming configuration.
    ///
    /// Returns `Disabled` when naming is off or the API key is missing.
    pub fn from_config(config: &NamingConfig) -> Self {
        match &config.api_key {
            Some(key) if config.enabled && !key.is_empty() => NamerClient::Active(
                GeminiNamer::new(key.clone(), config.model.clone())
                    .with_endpoint(config.endpoint.clone()),
            ),
            _ => NamerClient::Disabled,
        }
    }

    /// Whether a naming service is configured.
    pub fn is_active(&self) -> bool {
        matches!(self, NamerClient::Active(_))
    }
}

#[async_trait]
impl GroupNamer for NamerClient {
    async fn suggest_names(&self, request: &NamingRequest) -> Result<Vec<String>, NamingError> {
        match self {
            NamerClient::Active(namer) => namer.suggest_names(request).await,
            NamerClient::Disabled => Err(NamingError::Disabled),
        }
    }
}

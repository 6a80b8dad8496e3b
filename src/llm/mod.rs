//! Gemini text-generation client.
//!
//! This module provides the HTTP client used by the excuse and apology
//! generators: it forwards a string prompt to the Gemini `generateContent`
//! endpoint and extracts the first candidate's text. No retry or backoff is
//! performed; a failed call surfaces as a [`GenerationError`] and the
//! callers decide how to degrade.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Production endpoint for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Errors that can occur during a generation call.
#[derive(Debug)]
pub enum GenerationError {
    /// Network error occurred while talking to the model endpoint.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other transport-level issues.
    Network(String),

    /// The call exceeded the configured timeout.
    Timeout,

    /// The API answered with a non-success status.
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Response body, usually a JSON error description
        message: String,
    },

    /// The API answered successfully but carried no candidate text.
    EmptyResponse,

    /// The HTTP client or request could not be constructed.
    Build(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Network(msg) => write!(f, "Network error: {}", msg),
            GenerationError::Timeout => write!(f, "Generation request timed out"),
            GenerationError::Api { status, message } => {
                write!(f, "API error {}: {}", status, message)
            }
            GenerationError::EmptyResponse => {
                write!(f, "Model returned no candidate text")
            }
            GenerationError::Build(msg) => write!(f, "Client build error: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Convert reqwest errors to GenerationError.
impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Timeout
        } else if err.is_builder() {
            GenerationError::Build(err.to_string())
        } else {
            GenerationError::Network(err.to_string())
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key, appended as the `key` query parameter
    /// * `model` - Model identifier, e.g. "gemini-1.5-flash"
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Build` if the HTTP client cannot be
    /// constructed.
    pub fn new(
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Build(e.to_string()))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
            http,
        })
    }

    /// Replaces the endpoint base URL. Used by tests to point the client
    /// at a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Model identifier this client sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Forwards `prompt` to the model and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` on transport failure, timeout, a
    /// non-success status, or a response without candidate text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;

        parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .next()
            .ok_or(GenerationError::EmptyResponse)
    }
}

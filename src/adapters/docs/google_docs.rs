//! Google Docs Source - Implementation of RemoteDocumentSource for the
//! Google Docs API v1.
//!
//! Fetches a document by id and walks its structural content tree,
//! body.content to paragraphs to text runs, concatenating
//! literal run text in document order. Structural elements without text
//! (tables of contents, section breaks) contribute nothing.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{DocumentId, FetchError, RemoteDocumentSource};

/// Configuration for the Google Docs source.
#[derive(Debug, Clone)]
pub struct GoogleDocsConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoogleDocsConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://docs.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Google Docs API implementation of the remote document source port.
pub struct GoogleDocsSource {
    config: GoogleDocsConfig,
    client: Client,
}

impl GoogleDocsSource {
    /// Creates a new source with the given configuration.
    pub fn new(config: GoogleDocsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn document_url(&self, id: &DocumentId) -> String {
        format!("{}/v1/documents/{}", self.config.base_url, id.as_str())
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            404 => Err(FetchError::NotFound),
            401 | 403 => Err(FetchError::PermissionDenied),
            500..=599 => Err(FetchError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(FetchError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl RemoteDocumentSource for GoogleDocsSource {
    async fn fetch_text(&self, document_id: &DocumentId) -> Result<String, FetchError> {
        let response = self
            .client
            .get(self.document_url(document_id))
            .header("x-goog-api-key", self.config.api_key())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::network(format!("Request timed out: {}", e))
                } else {
                    FetchError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;
        let document: GoogleDocument = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(document.concatenated_text())
    }
}

// ────────────────────────────────────────────────────────────────────────
// Wire types (the subset of the Docs v1 document we read)
// ────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GoogleDocument {
    body: Option<Body>,
}

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    content: Vec<StructuralElement>,
}

#[derive(Debug, Deserialize)]
struct StructuralElement {
    paragraph: Option<Paragraph>,
}

#[derive(Debug, Deserialize)]
struct Paragraph {
    #[serde(default)]
    elements: Vec<ParagraphElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParagraphElement {
    text_run: Option<TextRun>,
}

#[derive(Debug, Deserialize)]
struct TextRun {
    content: Option<String>,
}

impl GoogleDocument {
    /// Concatenates all literal run text in document order.
    fn concatenated_text(&self) -> String {
        let mut text = String::new();
        let Some(body) = &self.body else {
            return text;
        };

        for element in &body.content {
            let Some(paragraph) = &element.paragraph else {
                continue;
            };
            for part in &paragraph.elements {
                if let Some(run) = &part.text_run {
                    if let Some(content) = &run.content {
                        text.push_str(content);
                    }
                }
            }
        }

        text
    }
}

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::models::{ArtifactKind, ArtifactPayload, Flashcard, HistoryRecord, TimetableSlot};
use crate::request::{OutboundRequest, RequestBody, DOCUMENT_FIELD, DOCUMENT_MIME};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary: String,
}

#[derive(Deserialize)]
struct FlashcardsResponse {
    flashcards: Vec<Flashcard>,
}

#[derive(Deserialize)]
struct TimetableResponse {
    timetable: Vec<TimetableSlot>,
}

/// HTTP proxy for the generation backend. All calls share one client with a
/// request timeout; a timed-out generation resolves through the same failure
/// path as any other transport error.
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Send one generation request and decode the response for its kind.
    pub async fn generate(&self, request: OutboundRequest) -> Result<ArtifactPayload, BackendError> {
        let url = format!("{}{}", self.base_url, request.path);

        let req = match request.body {
            RequestBody::Text(body) => self.http.post(&url).json(&body),
            RequestBody::Document { file_name, bytes } => {
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(DOCUMENT_MIME)?;
                self.http
                    .post(&url)
                    .multipart(Form::new().part(DOCUMENT_FIELD, part))
            }
        };

        let resp = req.send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status,
                message: text,
            });
        }

        let payload = match request.kind {
            ArtifactKind::Summary => {
                let data: SummaryResponse = resp.json().await?;
                ArtifactPayload::Summary {
                    summary: data.summary,
                }
            }
            ArtifactKind::Flashcards => {
                let data: FlashcardsResponse = resp.json().await?;
                ArtifactPayload::Flashcards {
                    flashcards: data.flashcards,
                }
            }
            ArtifactKind::Timetable => {
                let data: TimetableResponse = resp.json().await?;
                ArtifactPayload::Timetable {
                    timetable: data.timetable,
                }
            }
        };
        Ok(payload)
    }

    /// Fetch the persisted generation log, in backend order.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, BackendError> {
        let resp = self
            .http
            .get(format!("{}/history", self.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status,
                message: text,
            });
        }

        let records: Vec<HistoryRecord> = resp.json().await?;
        Ok(records)
    }
}

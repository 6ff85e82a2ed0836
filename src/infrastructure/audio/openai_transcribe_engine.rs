use async_trait::async_trait;
use reqwest::{StatusCode, multipart};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioUpload, Credential, Transcript};

/// Speech-to-text over the OpenAI-compatible `/audio/transcriptions`
/// endpoint. The credential is per request; nothing is held between calls.
pub struct OpenAiTranscribeEngine {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OpenAiTranscribeEngine {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiTranscribeEngine {
    async fn transcribe(
        &self,
        upload: &AudioUpload,
        credential: &Credential,
    ) -> Result<Transcript, TranscriptionError> {
        let url = format!(
            "{}/audio/transcriptions",
            self.base_url.trim_end_matches('/')
        );

        let file_part = multipart::Part::bytes(upload.data.clone())
            .file_name(upload.filename.clone())
            .mime_str(upload.format.as_mime())
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            bytes = upload.data.len(),
            "Sending audio to transcription API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    TranscriptionError::Unauthorized(format!("status {}: {}", status, body))
                }
                StatusCode::TOO_MANY_REQUESTS => TranscriptionError::QuotaExceeded(body),
                _ => TranscriptionError::ApiRequestFailed(format!("status {}: {}", status, body)),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        let transcript = Transcript::new(text).ok_or_else(|| {
            TranscriptionError::ApiRequestFailed("empty transcript returned".to_string())
        })?;

        tracing::info!(chars = transcript.len_chars(), "Transcription completed");

        Ok(transcript)
    }
}

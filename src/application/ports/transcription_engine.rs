use async_trait::async_trait;

use crate::domain::{AudioUpload, Credential, Transcript};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        upload: &AudioUpload,
        credential: &Credential,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription authentication failed: {0}")]
    Unauthorized(String),
    #[error("transcription quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("transcription request failed: {0}")]
    ApiRequestFailed(String),
}

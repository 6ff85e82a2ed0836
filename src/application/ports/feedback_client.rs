use async_trait::async_trait;

use crate::domain::{Credential, FeedbackReport, Transcript};

#[async_trait]
pub trait FeedbackClient: Send + Sync {
    async fn review(
        &self,
        transcript: &Transcript,
        credential: &Credential,
    ) -> Result<FeedbackReport, FeedbackError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("feedback authentication failed: {0}")]
    Unauthorized(String),
    #[error("feedback quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("feedback request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid feedback response: {0}")]
    InvalidResponse(String),
}

use std::sync::Arc;

use crate::application::ports::{
    CredentialError, FeedbackClient, FeedbackError, RenderError, ReportRenderer,
    TranscriptionEngine, TranscriptionError,
};
use crate::application::services::CredentialResolver;
use crate::domain::AudioUpload;

/// The finished artifact handed back to the interface layer.
pub struct RenderedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The whole pipeline for one click: resolve credential, transcribe, score,
/// render. Strictly linear; the first failing stage stops the run and nothing
/// is retried.
pub struct ReviewService<T, F, R>
where
    T: TranscriptionEngine,
    F: FeedbackClient,
    R: ReportRenderer,
{
    credential_resolver: CredentialResolver,
    transcription_engine: Arc<T>,
    feedback_client: Arc<F>,
    report_renderer: Arc<R>,
}

impl<T, F, R> ReviewService<T, F, R>
where
    T: TranscriptionEngine,
    F: FeedbackClient,
    R: ReportRenderer,
{
    pub fn new(
        credential_resolver: CredentialResolver,
        transcription_engine: Arc<T>,
        feedback_client: Arc<F>,
        report_renderer: Arc<R>,
    ) -> Self {
        Self {
            credential_resolver,
            transcription_engine,
            feedback_client,
            report_renderer,
        }
    }

    pub async fn review(
        &self,
        upload: &AudioUpload,
        inline_credential: Option<&str>,
    ) -> Result<RenderedReport, ReviewError> {
        // Resolved before any network I/O; a missing credential must not
        // reach either hosted service.
        let credential = self.credential_resolver.resolve(inline_credential)?;

        tracing::debug!(
            filename = %upload.filename,
            bytes = upload.size_bytes(),
            "Starting call review"
        );

        let transcript = self
            .transcription_engine
            .transcribe(upload, &credential)
            .await?;

        let report = self.feedback_client.review(&transcript, &credential).await?;

        let bytes = self.report_renderer.render(&report)?;
        let filename = report.document_filename();

        tracing::info!(
            advisor = %report.advisor_name,
            score = report.overall_score(),
            document_bytes = bytes.len(),
            "Call review completed"
        );

        Ok(RenderedReport { filename, bytes })
    }
}

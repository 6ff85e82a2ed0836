use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{
    FeedbackClient, FeedbackError, ReportRenderer, TranscriptionEngine, TranscriptionError,
};
use crate::application::services::ReviewError;
use crate::domain::{AudioFormat, AudioUpload};
use crate::presentation::state::AppState;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One click, one document: reads the multipart form (audio file plus an
/// optional inline API key), runs the review pipeline, answers with the
/// rendered docx as an attachment. Every pipeline failure surfaces here as a
/// JSON error with the underlying message; nothing is retried.
#[tracing::instrument(skip(state, multipart))]
pub async fn review_handler<T, F, R>(
    State(state): State<AppState<T, F, R>>,
    mut multipart: Multipart,
) -> Response
where
    T: TranscriptionEngine + 'static,
    F: FeedbackClient + 'static,
    R: ReportRenderer + 'static,
{
    let max_upload_bytes = state.settings.review.max_upload_mb * 1024 * 1024;
    let mut upload: Option<AudioUpload> = None;
    let mut inline_credential: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "api_key" => match field.text().await {
                Ok(value) if !value.trim().is_empty() => inline_credential = Some(value),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read api_key field");
                    return error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read api_key field: {}", e),
                    );
                }
            },
            "file" => {
                let filename = field.file_name().unwrap_or("upload.mp3").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                tracing::debug!(
                    filename = %filename,
                    content_type = %content_type,
                    "Processing file upload"
                );

                let format = AudioFormat::from_mime(&content_type)
                    .or_else(|| AudioFormat::from_filename(&filename));
                let Some(format) = format else {
                    tracing::warn!(content_type = %content_type, "Unsupported upload type");
                    return error_response(
                        StatusCode::UNSUPPORTED_MEDIA_TYPE,
                        format!("Unsupported upload type: {}", content_type),
                    );
                };

                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file: {}", e),
                        );
                    }
                };

                if data.len() > max_upload_bytes {
                    tracing::warn!(bytes = data.len(), "Upload exceeds size cap");
                    return error_response(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        format!(
                            "Upload of {} bytes exceeds the {} MB cap",
                            data.len(),
                            state.settings.review.max_upload_mb
                        ),
                    );
                }

                upload = Some(AudioUpload::new(filename, format, data.to_vec()));
            }
            _ => {}
        }
    }

    let Some(upload) = upload else {
        tracing::warn!("Review request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No audio file uploaded".to_string());
    };

    match state
        .review_service
        .review(&upload, inline_credential.as_deref())
        .await
    {
        Ok(report) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, DOCX_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.filename),
                ),
            ],
            report.bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Call review failed");
            error_response(status_for(&e), e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

fn status_for(error: &ReviewError) -> StatusCode {
    match error {
        ReviewError::Credential(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ReviewError::Transcription(TranscriptionError::Unauthorized(_))
        | ReviewError::Feedback(FeedbackError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
        ReviewError::Transcription(TranscriptionError::QuotaExceeded(_))
        | ReviewError::Feedback(FeedbackError::QuotaExceeded(_)) => StatusCode::TOO_MANY_REQUESTS,
        ReviewError::Transcription(_) | ReviewError::Feedback(_) => StatusCode::BAD_GATEWAY,
        ReviewError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

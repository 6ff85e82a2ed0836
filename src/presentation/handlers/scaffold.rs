use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use crate::application::ports::{FeedbackClient, ReportRenderer, TranscriptionEngine};
use crate::domain::{FeedbackReport, Rating, Section};
use crate::presentation::state::AppState;

use super::review::DOCX_MIME;

/// Scaffold-mode review: drains the upload, renders a canned report through
/// the real document path, never touches either hosted service. Lets the
/// page be demoed with no credentials.
#[tracing::instrument(skip(state, multipart), fields(scaffold = true))]
pub async fn scaffold_review_handler<T, F, R>(
    State(state): State<AppState<T, F, R>>,
    mut multipart: Multipart,
) -> Response
where
    T: TranscriptionEngine + 'static,
    F: FeedbackClient + 'static,
    R: ReportRenderer + 'static,
{
    let mut filename = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            filename = field.file_name().map(String::from);
        }
        // Field data is dropped unread; scaffold mode never transcribes.
    }

    tracing::debug!(filename = ?filename, "Scaffold mode: serving canned review");

    if state.scaffold_config.mock_response_delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(
            state.scaffold_config.mock_response_delay_ms,
        ))
        .await;
    }

    let report = canned_report();
    match state.report_renderer.render(&report) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, DOCX_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.document_filename()),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Scaffold render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn canned_report() -> FeedbackReport {
    FeedbackReport {
        advisor_name: "Sample Advisor".to_string(),
        date_iso: Utc::now().date_naive().to_string(),
        sections: vec![
            Section {
                name: "Impression [Tonality/Charisma/Speed/Word Choice]".to_string(),
                rating: Rating::Good,
                notes: "Warm greeting and a steady pace throughout the call.".to_string(),
            },
            Section {
                name: "Leadership & Professionalism [Conciseness/Confidence/Preparedness]"
                    .to_string(),
                rating: Rating::Okay,
                notes: "Came prepared, but the recap ran long.".to_string(),
            },
            Section {
                name: "Execution [Scripts Used/Driving Conversation/Achieved Goals]".to_string(),
                rating: Rating::Great,
                notes: "Asked for the appointment and confirmed a callback time.".to_string(),
            },
        ],
        next_steps: vec![
            "Tighten the recap to two sentences.".to_string(),
            "Keep leading with the appointment ask.".to_string(),
        ],
        transcript: "Hi, this is your service advisor calling about your vehicle...".to_string(),
    }
}

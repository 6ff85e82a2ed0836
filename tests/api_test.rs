use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use callcoach::application::ports::{
    FeedbackClient, FeedbackError, TranscriptionEngine, TranscriptionError,
};
use callcoach::application::services::{CredentialResolver, ReviewService};
use callcoach::domain::{
    AudioUpload, Credential, FeedbackReport, Rating, Section, Transcript,
};
use callcoach::infrastructure::document::DocxRenderer;
use callcoach::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

const BOUNDARY: &str = "callcoach-test-boundary";
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MOCK_NOTES: &str = "Clear greeting, confirm the callback window earlier next time.";

struct MockTranscriptionEngine {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _upload: &AudioUpload,
        _credential: &Credential,
    ) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(TranscriptionError::ApiRequestFailed(
                "status 500 Internal Server Error: upstream exploded".to_string(),
            ))
        } else {
            Ok(Transcript::new("Hi, this is Alex from the service department.").unwrap())
        }
    }
}

struct MockFeedbackClient {
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl FeedbackClient for MockFeedbackClient {
    async fn review(
        &self,
        _transcript: &Transcript,
        _credential: &Credential,
    ) -> Result<FeedbackReport, FeedbackError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FeedbackReport {
            advisor_name: "Alex Carter".to_string(),
            date_iso: "2025-06-01".to_string(),
            sections: vec![Section {
                name: "Impression [Tonality/Charisma/Speed/Word Choice]".to_string(),
                rating: Rating::Good,
                notes: MOCK_NOTES.to_string(),
            }],
            next_steps: vec!["Lead with the appointment ask.".to_string()],
            transcript: "Hi, this is Alex from the service department.".to_string(),
        })
    }
}

type TestState = AppState<MockTranscriptionEngine, MockFeedbackClient, DocxRenderer>;

fn build_state(
    transcription_fails: bool,
    scaffold: bool,
) -> (TestState, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let transcribe_calls = Arc::new(AtomicUsize::new(0));
    let feedback_calls = Arc::new(AtomicUsize::new(0));

    let transcription_engine = Arc::new(MockTranscriptionEngine {
        calls: Arc::clone(&transcribe_calls),
        fail: transcription_fails,
    });
    let feedback_client = Arc::new(MockFeedbackClient {
        calls: Arc::clone(&feedback_calls),
    });
    let report_renderer = Arc::new(DocxRenderer::new("Test Trainer"));

    // No configured sources: only an inline api_key field can resolve.
    let review_service = Arc::new(ReviewService::new(
        CredentialResolver::new(Vec::new()),
        transcription_engine,
        feedback_client,
        Arc::clone(&report_renderer),
    ));

    let state = AppState {
        review_service,
        report_renderer,
        settings: Settings::load(Environment::Test).expect("test settings"),
        scaffold_config: ScaffoldConfig {
            enabled: scaffold,
            mock_response_delay_ms: 0,
        },
    };

    (state, transcribe_calls, feedback_calls)
}

fn file_part(filename: &str, content_type: &str) -> String {
    format!(
        "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\nID3 fake mp3 payload\r\n",
        BOUNDARY, filename, content_type
    )
}

fn api_key_part(value: &str) -> String {
    format!(
        "--{}\r\nContent-Disposition: form-data; name=\"api_key\"\r\n\r\n{}\r\n",
        BOUNDARY, value
    )
}

fn close_boundary() -> String {
    format!("--{}--\r\n", BOUNDARY)
}

fn review_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/review")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn given_no_credential_when_reviewing_then_config_error_and_no_network_calls() {
    let (state, transcribe_calls, feedback_calls) = build_state(false, false);
    let router = create_router(state);

    let body = format!("{}{}", file_part("voicemail.mp3", "audio/mpeg"), close_boundary());
    let response = router.oneshot(review_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = body_bytes(response).await;
    let message = String::from_utf8(bytes).unwrap();
    assert!(message.contains("no API credential found"), "{}", message);
    assert_eq!(transcribe_calls.load(Ordering::SeqCst), 0);
    assert_eq!(feedback_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_transcription_failure_when_reviewing_then_error_surfaced_and_feedback_skipped() {
    let (state, transcribe_calls, feedback_calls) = build_state(true, false);
    let router = create_router(state);

    let body = format!(
        "{}{}{}",
        file_part("voicemail.mp3", "audio/mpeg"),
        api_key_part("sk-test-key-123"),
        close_boundary()
    );
    let response = router.oneshot(review_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let message = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(message.contains("upstream exploded"), "{}", message);
    assert_eq!(transcribe_calls.load(Ordering::SeqCst), 1);
    assert_eq!(feedback_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_successful_pipeline_when_reviewing_then_docx_attachment_returned() {
    let (state, transcribe_calls, feedback_calls) = build_state(false, false);
    let router = create_router(state);

    let body = format!(
        "{}{}{}",
        file_part("voicemail.mp3", "audio/mpeg"),
        api_key_part("sk-test-key-123"),
        close_boundary()
    );
    let response = router.oneshot(review_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some(DOCX_MIME)
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(
        disposition.contains("attachment; filename=\"fix_my_call_alex_carter_2025-06-01.docx\""),
        "{}",
        disposition
    );

    let bytes = body_bytes(response).await;
    assert!(!bytes.is_empty());
    // docx files are zip archives
    assert_eq!(&bytes[..2], b"PK");
    assert_eq!(transcribe_calls.load(Ordering::SeqCst), 1);
    assert_eq!(feedback_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_successful_pipeline_when_reviewing_then_document_contains_feedback_text() {
    let (state, _, _) = build_state(false, false);
    let router = create_router(state);

    let body = format!(
        "{}{}{}",
        file_part("voicemail.mp3", "audio/mpeg"),
        api_key_part("sk-test-key-123"),
        close_boundary()
    );
    let response = router.oneshot(review_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = body_bytes(response).await;
    let contents = docx_rs::read_docx(&bytes).unwrap().json();
    assert!(contents.contains(MOCK_NOTES));
    assert!(contents.contains("Your Reviewing Trainer: Test Trainer"));
}

#[tokio::test]
async fn given_no_file_when_reviewing_then_bad_request() {
    let (state, transcribe_calls, _) = build_state(false, false);
    let router = create_router(state);

    let body = format!("{}{}", api_key_part("sk-test-key-123"), close_boundary());
    let response = router.oneshot(review_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(transcribe_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_unsupported_upload_type_when_reviewing_then_unsupported_media_type() {
    let (state, transcribe_calls, _) = build_state(false, false);
    let router = create_router(state);

    let body = format!(
        "{}{}{}",
        file_part("notes.txt", "text/plain"),
        api_key_part("sk-test-key-123"),
        close_boundary()
    );
    let response = router.oneshot(review_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(transcribe_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_scaffold_mode_when_reviewing_then_canned_document_without_network_calls() {
    let (state, transcribe_calls, feedback_calls) = build_state(false, true);
    let router = create_router(state);

    let body = format!("{}{}", file_part("voicemail.mp3", "audio/mpeg"), close_boundary());
    let response = router.oneshot(review_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    assert_eq!(&bytes[..2], b"PK");
    assert_eq!(transcribe_calls.load(Ordering::SeqCst), 0);
    assert_eq!(feedback_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_health_check_then_healthy() {
    let (state, _, _) = build_state(false, false);
    let router = create_router(state);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let message = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(message.contains("healthy"));
}

#[tokio::test]
async fn given_index_page_then_upload_form_served() {
    let (state, _, _) = build_state(false, false);
    let router = create_router(state);

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(page.contains("multipart/form-data"));
    assert!(page.contains("api_key"));
}

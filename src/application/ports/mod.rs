mod credential_source;
mod feedback_client;
mod report_renderer;
mod transcription_engine;

pub use credential_source::{CredentialError, CredentialSource};
pub use feedback_client::{FeedbackClient, FeedbackError};
pub use report_renderer::{RenderError, ReportRenderer};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

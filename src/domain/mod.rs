mod audio_upload;
mod credential;
mod feedback;
mod transcript;

pub use audio_upload::{AudioFormat, AudioUpload};
pub use credential::Credential;
pub use feedback::{FeedbackReport, Rating, Section};
pub use transcript::Transcript;

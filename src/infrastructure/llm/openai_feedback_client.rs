use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FeedbackClient, FeedbackError};
use crate::application::services::rubric::{COACH_INSTRUCTIONS, OUTPUT_SCHEMA_INSTRUCTION};
use crate::domain::{Credential, FeedbackReport, Transcript};
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::config::LlmSettings;

/// Scored feedback over the OpenAI-compatible `/chat/completions` endpoint.
/// Sends the fixed rubric plus the transcript, expects the JSON report back.
pub struct OpenAiFeedbackClient {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiFeedbackClient {
    pub fn new(settings: &LlmSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }

    fn build_messages(&self, transcript: &Transcript) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: COACH_INSTRUCTIONS.to_string(),
            },
            ChatMessage {
                role: "system".to_string(),
                content: OUTPUT_SCHEMA_INSTRUCTION.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: transcript.as_str().to_string(),
            },
        ]
    }
}

#[async_trait]
impl FeedbackClient for OpenAiFeedbackClient {
    async fn review(
        &self,
        transcript: &Transcript,
        credential: &Credential,
    ) -> Result<FeedbackReport, FeedbackError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(transcript),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::debug!(
            model = %self.model,
            transcript = %sanitize_transcript(transcript.as_str()),
            "Requesting scored feedback"
        );

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(credential.expose())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| FeedbackError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    FeedbackError::Unauthorized(format!("HTTP {}: {}", status, body))
                }
                StatusCode::TOO_MANY_REQUESTS => FeedbackError::QuotaExceeded(body),
                _ => FeedbackError::ApiRequestFailed(format!("HTTP {}: {}", status, body)),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| FeedbackError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| FeedbackError::InvalidResponse("empty choices".to_string()))?;

        let report = FeedbackReport::from_model_json(&content)
            .map_err(|e| FeedbackError::InvalidResponse(format!("report parse: {}", e)))?;

        tracing::info!(
            advisor = %report.advisor_name,
            sections = report.sections.len(),
            "Feedback generated"
        );

        Ok(report)
    }
}

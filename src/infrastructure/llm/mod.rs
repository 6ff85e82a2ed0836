mod openai_feedback_client;

pub use openai_feedback_client::OpenAiFeedbackClient;

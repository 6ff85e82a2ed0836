use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub review: ReviewSettings,
    pub credentials: CredentialSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSettings {
    pub trainer_name: String,
    pub max_upload_mb: usize,
}

/// Where the API credential may come from. The credential value itself is
/// never part of settings; it is resolved per request.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSettings {
    pub env_var: String,
    pub secret_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, layered under an optional `appsettings.{env}.toml`, layered
    /// under `APP_`-prefixed environment variables (`APP_SERVER__PORT=8080`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("transcription.base_url", "https://api.openai.com/v1")?
            .set_default("transcription.model", "gpt-4o-mini-transcribe")?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 1500)?
            .set_default("llm.temperature", 0.3)?
            .set_default("review.trainer_name", "Mike Tatich")?
            .set_default("review.max_upload_mb", 25)?
            .set_default("credentials.env_var", "OPENAI_API_KEY")?
            .set_default("credentials.secret_file", "secrets/callcoach.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

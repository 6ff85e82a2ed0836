mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    CredentialSettings, LlmSettings, LoggingSettings, ReviewSettings, ServerSettings, Settings,
    TranscriptionSettings,
};

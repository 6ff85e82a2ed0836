mod env_source;
mod file_source;

pub use env_source::EnvCredentialSource;
pub use file_source::FileCredentialSource;

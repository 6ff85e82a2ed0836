pub mod audio;
pub mod credentials;
pub mod document;
pub mod llm;
pub mod observability;

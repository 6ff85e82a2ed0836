mod openai_transcribe_engine;

pub use openai_transcribe_engine::OpenAiTranscribeEngine;

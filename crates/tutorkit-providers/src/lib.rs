//! tutorkit-providers — LLM backend implementations.
//!
//! Implements the `TutorBackend` trait for the OpenAI chat-completions API
//! and provides a deterministic mock backend for tests and demos.

pub mod config;
pub mod error;
pub mod mock;
pub mod openai;
pub mod prompt;

pub use config::{create_backend, load_config, BackendConfig, TutorConfig};
pub use error::BackendError;
pub use mock::MockTutor;
pub use openai::OpenAiTutor;

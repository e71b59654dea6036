mod config;
mod config_serde;
mod constants;
mod error;
mod internal;
mod recognizer;
mod recognizer_builder;
pub use config::RecognizerConfig;
pub use config_serde::{DeserializableConfig, SerializableConfig};
pub use constants::SILENCE_LABEL;
pub use error::{RecognizerError, Result};
pub use recognizer::{CommandRecognizer, RecognitionResult};
pub use recognizer_builder::CommandRecognizerBuilder;

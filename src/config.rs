use serde::{Deserialize, Serialize};

use crate::config_serde::{DeserializableConfig, SerializableConfig};

/// Configures the command recognizer. There are no defaults, every field must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Ordered label names, one per score in the classifier output.
    pub labels: Vec<String>,
    /// Width of the smoothing window.
    pub average_window_duration_ms: u32,
    /// Averaged score that must be exceeded (strictly) to recognize a command.
    pub detection_threshold: f32,
    /// Time after a recognized command during which no new one is emitted (inclusive).
    pub suppression_ms: u32,
    /// Minimum number of samples buffered before a frame to evaluate the window.
    pub minimum_count: usize,
    /// Frames arriving sooner than this after the last buffered one are dropped.
    pub minimum_time_between_samples_ms: u32,
}

impl SerializableConfig for RecognizerConfig {}
impl DeserializableConfig for RecognizerConfig {}

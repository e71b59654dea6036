use crate::{
    error::{RecognizerError, Result},
    CommandRecognizer, RecognizerConfig,
};

/// Use this struct to configure and build your command recognizer.
/// Every parameter is required.
/// ```
/// use command_recognizer::CommandRecognizerBuilder;
/// let recognizer = CommandRecognizerBuilder::new()
///     .set_labels(vec!["_silence_".to_string(), "yes".to_string()])
///     .set_average_window_duration_ms(1000)
///     .set_detection_threshold(0.5)
///     .set_suppression_ms(1500)
///     .set_minimum_count(3)
///     .set_minimum_time_between_samples_ms(30)
///     .build()
///     .unwrap();
/// assert_eq!(recognizer.labels_count(), 2);
/// ```
#[derive(Default)]
pub struct CommandRecognizerBuilder {
    labels: Option<Vec<String>>,
    average_window_duration_ms: Option<u32>,
    detection_threshold: Option<f32>,
    suppression_ms: Option<u32>,
    minimum_count: Option<usize>,
    minimum_time_between_samples_ms: Option<u32>,
}
impl CommandRecognizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Builds the recognizer, fails on the first unset parameter.
    pub fn build(&self) -> Result<CommandRecognizer> {
        CommandRecognizer::new(&self.config()?)
    }
    /// Returns the equivalent recognizer config, fails on the first unset parameter.
    pub fn config(&self) -> Result<RecognizerConfig> {
        Ok(RecognizerConfig {
            labels: self
                .labels
                .clone()
                .ok_or(RecognizerError::MissingParameter("labels"))?,
            average_window_duration_ms: self
                .average_window_duration_ms
                .ok_or(RecognizerError::MissingParameter("average_window_duration_ms"))?,
            detection_threshold: self
                .detection_threshold
                .ok_or(RecognizerError::MissingParameter("detection_threshold"))?,
            suppression_ms: self
                .suppression_ms
                .ok_or(RecognizerError::MissingParameter("suppression_ms"))?,
            minimum_count: self
                .minimum_count
                .ok_or(RecognizerError::MissingParameter("minimum_count"))?,
            minimum_time_between_samples_ms: self.minimum_time_between_samples_ms.ok_or(
                RecognizerError::MissingParameter("minimum_time_between_samples_ms"),
            )?,
        })
    }
    /// Configures the label names, in the same order as the classifier scores.
    pub fn set_labels(&mut self, value: Vec<String>) -> &mut Self {
        self.labels = Some(value);
        self
    }
    /// Configures the width of the smoothing window.
    pub fn set_average_window_duration_ms(&mut self, value: u32) -> &mut Self {
        self.average_window_duration_ms = Some(value);
        self
    }
    /// Configures the averaged score that must be exceeded to recognize a command.
    pub fn set_detection_threshold(&mut self, value: f32) -> &mut Self {
        self.detection_threshold = Some(value);
        self
    }
    /// Configures the time after a recognized command during which no other is emitted.
    pub fn set_suppression_ms(&mut self, value: u32) -> &mut Self {
        self.suppression_ms = Some(value);
        self
    }
    /// Configures how many samples must be buffered before the window is evaluated.
    pub fn set_minimum_count(&mut self, value: usize) -> &mut Self {
        self.minimum_count = Some(value);
        self
    }
    /// Configures the minimum spacing between accepted samples.
    pub fn set_minimum_time_between_samples_ms(&mut self, value: u32) -> &mut Self {
        self.minimum_time_between_samples_ms = Some(value);
        self
    }
}

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::{
    constants::{MINIMUM_TIME_FRACTION, SILENCE_LABEL},
    error::{RecognizerError, Result},
    internal::{rank_scores, ScoreWindow},
    RecognizerConfig,
};

/// Outcome of processing one frame of scores.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    /// Leading label of the current window, or the last recognized one when the window was not evaluated.
    pub found_command: String,
    /// Averaged score of `found_command`.
    pub score: f32,
    /// True only when this frame emitted a new command.
    pub is_new_command: bool,
}
#[cfg(feature = "display")]
impl std::fmt::Display for RecognitionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}){}",
            self.found_command,
            self.score,
            if self.is_new_command { " new" } else { "" }
        )
    }
}

/// Smooths a stream of classifier scores over a time window and emits
/// a new command when the averaged leading label crosses the detection
/// threshold outside of the suppression period.
///
/// ```
/// use command_recognizer::{CommandRecognizer, RecognizerConfig};
/// let config = RecognizerConfig {
///     labels: vec!["_silence_".to_string(), "yes".to_string(), "no".to_string()],
///     average_window_duration_ms: 1000,
///     detection_threshold: 0.5,
///     suppression_ms: 500,
///     minimum_count: 3,
///     minimum_time_between_samples_ms: 30,
/// };
/// let mut recognizer = CommandRecognizer::new(&config).unwrap();
/// let result = recognizer.process(&[0.1, 0.8, 0.1], 0).unwrap();
/// assert!(!result.is_new_command);
/// ```
pub struct CommandRecognizer {
    // config
    labels: Arc<[String]>,
    average_window_duration_ms: u32,
    detection_threshold: f32,
    suppression_ms: u32,
    minimum_count: usize,
    minimum_time_between_samples_ms: u32,
    // state
    window: ScoreWindow,
    previous_top_label: String,
    previous_top_label_score: f32,
    previous_top_label_time: Option<i64>,
}
impl CommandRecognizer {
    pub fn new(config: &RecognizerConfig) -> Result<Self> {
        CommandRecognizer::with_shared_labels(
            config.labels.clone().into(),
            config.average_window_duration_ms,
            config.detection_threshold,
            config.suppression_ms,
            config.minimum_count,
            config.minimum_time_between_samples_ms,
        )
    }
    /// Creates a recognizer reusing an already shared label list.
    pub fn with_shared_labels(
        labels: Arc<[String]>,
        average_window_duration_ms: u32,
        detection_threshold: f32,
        suppression_ms: u32,
        minimum_count: usize,
        minimum_time_between_samples_ms: u32,
    ) -> Result<Self> {
        if labels.is_empty() {
            return Err(RecognizerError::EmptyLabels);
        }
        Ok(CommandRecognizer {
            labels,
            average_window_duration_ms,
            detection_threshold,
            suppression_ms,
            minimum_count,
            minimum_time_between_samples_ms,
            window: ScoreWindow::new(),
            previous_top_label: SILENCE_LABEL.to_string(),
            previous_top_label_score: 0.,
            previous_top_label_time: None,
        })
    }
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    pub fn labels_count(&self) -> usize {
        self.labels.len()
    }
    /// Number of samples currently retained in the averaging window.
    pub fn buffered_samples(&self) -> usize {
        self.window.len()
    }
    /// Label, score and time of the last recognized command.
    pub fn last_command(&self) -> Option<(&str, f32, i64)> {
        self.previous_top_label_time.map(|time| {
            (
                self.previous_top_label.as_str(),
                self.previous_top_label_score,
                time,
            )
        })
    }
    /// Clears the window and forgets the last recognized command.
    pub fn reset(&mut self) {
        self.window.clear();
        self.previous_top_label = SILENCE_LABEL.to_string();
        self.previous_top_label_score = 0.;
        self.previous_top_label_time = None;
    }
    /// Processes the classifier scores produced at `timestamp` (milliseconds).
    ///
    /// Fails without modifying the recognizer when the scores length differs
    /// from the number of labels or when the timestamp precedes the oldest
    /// sample in the window.
    pub fn process(&mut self, scores: &[f32], timestamp: i64) -> Result<RecognitionResult> {
        if scores.len() != self.labels.len() {
            warn!(
                "Expected {} scores, received {}",
                self.labels.len(),
                scores.len()
            );
            return Err(RecognizerError::LengthMismatch {
                expected: self.labels.len(),
                actual: scores.len(),
            });
        }
        if let Some(oldest) = self.window.oldest_timestamp() {
            if timestamp < oldest {
                warn!("Timestamp {} is older than window start {}", timestamp, oldest);
                return Err(RecognizerError::OutOfOrderTimestamp { timestamp, oldest });
            }
        }
        let prior_count = self.window.len();
        if prior_count > 1 {
            if let Some(newest) = self.window.newest_timestamp() {
                if timestamp.saturating_sub(newest)
                    < i64::from(self.minimum_time_between_samples_ms)
                {
                    trace!("Frame at {} dropped, too close to {}", timestamp, newest);
                    return Ok(self.previous_result(self.previous_top_label_score));
                }
            }
        }
        self.window.push_back(timestamp, scores);
        self.window.evict_older_than(
            timestamp.saturating_sub(i64::from(self.average_window_duration_ms)),
        );
        let samples_duration =
            timestamp.saturating_sub(self.window.oldest_timestamp().unwrap_or(timestamp));
        if prior_count < self.minimum_count
            || samples_duration
                < i64::from(self.average_window_duration_ms / MINIMUM_TIME_FRACTION)
        {
            trace!("Too few results");
            return Ok(self.previous_result(0.));
        }
        let average_scores = self.window.average_scores(self.labels.len(), prior_count);
        let top = rank_scores(&average_scores)[0];
        let current_top_label = &self.labels[top.index];
        let current_top_score = top.score;
        let time_since_last_top = match self.previous_top_label_time {
            Some(time) if self.previous_top_label != SILENCE_LABEL => {
                Some(timestamp.saturating_sub(time))
            }
            _ => None,
        };
        let is_suppressed = time_since_last_top
            .map_or(false, |elapsed| elapsed <= i64::from(self.suppression_ms));
        let is_new_command = current_top_score > self.detection_threshold && !is_suppressed;
        if is_new_command {
            debug!(
                "Command '{}' recognized at {}, score {}",
                current_top_label, timestamp, current_top_score
            );
            self.previous_top_label = current_top_label.clone();
            self.previous_top_label_time = Some(timestamp);
            self.previous_top_label_score = current_top_score;
        }
        Ok(RecognitionResult {
            found_command: current_top_label.clone(),
            score: current_top_score,
            is_new_command,
        })
    }
    fn previous_result(&self, score: f32) -> RecognitionResult {
        RecognitionResult {
            found_command: self.previous_top_label.clone(),
            score,
            is_new_command: false,
        }
    }
}

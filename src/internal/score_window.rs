use std::collections::VecDeque;

struct Sample {
    timestamp: i64,
    scores: Vec<f32>,
}

/// Time ordered buffer of score samples.
///
/// Samples are only pushed at the back and evicted from the front,
/// so the front always holds the oldest retained timestamp.
pub(crate) struct ScoreWindow {
    samples: VecDeque<Sample>,
}
impl ScoreWindow {
    pub fn new() -> Self {
        ScoreWindow {
            samples: VecDeque::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn oldest_timestamp(&self) -> Option<i64> {
        self.samples.front().map(|sample| sample.timestamp)
    }
    pub fn newest_timestamp(&self) -> Option<i64> {
        self.samples.back().map(|sample| sample.timestamp)
    }
    pub fn push_back(&mut self, timestamp: i64, scores: &[f32]) {
        self.samples.push_back(Sample {
            timestamp,
            scores: scores.to_vec(),
        });
    }
    /// Drops samples from the front while their timestamp is lower than the limit.
    pub fn evict_older_than(&mut self, time_limit: i64) {
        while self
            .samples
            .front()
            .map_or(false, |sample| sample.timestamp < time_limit)
        {
            self.samples.pop_front();
        }
    }
    /// Per label sum of `score / divisor` over every retained sample.
    pub fn average_scores(&self, labels_count: usize, divisor: usize) -> Vec<f32> {
        let divisor = divisor.max(1) as f32;
        let mut average_scores = vec![0.; labels_count];
        for sample in self.samples.iter() {
            for (average, score) in average_scores.iter_mut().zip(sample.scores.iter()) {
                *average += *score / divisor;
            }
        }
        average_scores
    }
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[macro_use]
extern crate bencher;

use bencher::Bencher;
use command_recognizer::{CommandRecognizer, RecognizerConfig};

fn recognize_commands(bench: &mut Bencher) {
    let config = RecognizerConfig {
        labels: vec![
            "_silence_".to_string(),
            "_unknown_".to_string(),
            "yes".to_string(),
            "no".to_string(),
            "up".to_string(),
            "down".to_string(),
        ],
        average_window_duration_ms: 500,
        detection_threshold: 0.7,
        suppression_ms: 1500,
        minimum_count: 3,
        minimum_time_between_samples_ms: 30,
    };
    let frames = (0..3000_usize)
        .map(|frame| {
            let mut scores = vec![0.05_f32; config.labels.len()];
            scores[frame / 100 % config.labels.len()] = 0.75;
            scores
        })
        .collect::<Vec<_>>();
    bench.iter(|| {
        let mut recognizer = CommandRecognizer::new(&config).unwrap();
        frames.iter().enumerate().for_each(|(index, scores)| {
            let _ = recognizer.process(scores, index as i64 * 30);
        });
    });
}

benchmark_group!(benches, recognize_commands);
benchmark_main!(benches);

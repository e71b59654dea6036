use std::error::Error;

use command_recognizer::{
    CommandRecognizerBuilder, DeserializableConfig, RecognizerConfig, RecognizerError,
    SerializableConfig,
};

#[test]
fn it_saves_and_loads_config_from_buffer() {
    let config = build_config();
    let bytes = config.save_to_buffer().unwrap();
    let loaded = RecognizerConfig::load_from_buffer(&bytes).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn it_saves_and_loads_config_from_file() {
    let config = build_config();
    let path = std::env::temp_dir().join(format!(
        "command_recognizer_config_{}.cbor",
        std::process::id()
    ));
    let path = path.to_str().unwrap();
    config.save_to_file(path).unwrap();
    let loaded = RecognizerConfig::load_from_file(path).unwrap();
    std::fs::remove_file(path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn it_fails_to_load_invalid_config() {
    let decode_error = RecognizerConfig::load_from_buffer(&[0xff, 0x00, 0x13]).unwrap_err();
    assert!(matches!(decode_error, RecognizerError::Decode(_)));
    assert!(decode_error.source().is_some());
    let file_error =
        RecognizerConfig::load_from_file("/missing/command_recognizer_config.cbor").unwrap_err();
    match &file_error {
        RecognizerError::File { path, source } => {
            assert_eq!(path, "/missing/command_recognizer_config.cbor");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(file_error.source().is_some());
}

#[test]
fn it_builds_a_recognizer() {
    let mut builder = CommandRecognizerBuilder::new();
    builder
        .set_labels(build_config().labels)
        .set_average_window_duration_ms(1000)
        .set_detection_threshold(0.5)
        .set_suppression_ms(1500)
        .set_minimum_count(3)
        .set_minimum_time_between_samples_ms(30);
    assert_eq!(builder.config().unwrap(), build_config());
    let recognizer = builder.build().unwrap();
    assert_eq!(recognizer.labels(), build_config().labels.as_slice());
}

#[test]
fn it_requires_every_builder_parameter() {
    let mut builder = CommandRecognizerBuilder::new();
    builder
        .set_labels(build_config().labels)
        .set_average_window_duration_ms(1000)
        .set_detection_threshold(0.5)
        .set_minimum_count(3)
        .set_minimum_time_between_samples_ms(30);
    assert!(matches!(
        builder.build(),
        Err(RecognizerError::MissingParameter("suppression_ms"))
    ));
    assert!(matches!(
        CommandRecognizerBuilder::new().config(),
        Err(RecognizerError::MissingParameter("labels"))
    ));
}

fn build_config() -> RecognizerConfig {
    RecognizerConfig {
        labels: vec![
            "_silence_".to_string(),
            "_unknown_".to_string(),
            "yes".to_string(),
            "no".to_string(),
        ],
        average_window_duration_ms: 1000,
        detection_threshold: 0.5,
        suppression_ms: 1500,
        minimum_count: 3,
        minimum_time_between_samples_ms: 30,
    }
}

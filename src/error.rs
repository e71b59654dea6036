#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    /// The score vector does not have one value per label.
    #[error("The results for recognition should contain {expected} elements, but there are {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// The timestamp precedes the oldest sample retained in the window.
    #[error("Results must be fed in increasing time order, but received a timestamp of {timestamp} that was earlier than the window start {oldest}")]
    OutOfOrderTimestamp { timestamp: i64, oldest: i64 },
    #[error("At least one label is required")]
    EmptyLabels,
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),
    /// The config file could not be opened or created.
    #[error("Unable to open file {path}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to encode config")]
    Encode(#[source] ciborium::ser::Error<std::io::Error>),
    #[error("Unable to decode config")]
    Decode(#[source] ciborium::de::Error<std::io::Error>),
}

pub type Result<T> = std::result::Result<T, RecognizerError>;

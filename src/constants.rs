/// Label reported before any command has been recognized.
pub const SILENCE_LABEL: &str = "_silence_";
/// The window must span at least `average_window_duration_ms / MINIMUM_TIME_FRACTION` to be evaluated.
pub(crate) const MINIMUM_TIME_FRACTION: u32 = 4;

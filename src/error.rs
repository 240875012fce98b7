//! Error types for slider configuration.
//!
//! Configuration problems never abort the engine. They are reported through
//! `config_error()` on each engine, and the engine falls back to reporting the
//! minimum value while ignoring gestures.

/// Why a slider configuration cannot produce a usable value scale.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `minimumValue` or `maximumValue` is `NaN` or infinite.
    #[error("slider bounds must be finite (minimum {minimum}, maximum {maximum})")]
    NonFiniteBounds { minimum: f64, maximum: f64 },

    /// `maximumValue` is not strictly greater than `minimumValue`.
    #[error("maximum value {maximum} must be greater than minimum value {minimum}")]
    InvertedBounds { minimum: f64, maximum: f64 },

    /// `step` is zero, negative, or not finite.
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    /// The step is wider than the whole value range, leaving no points to move between.
    #[error("step {step} does not fit in value span {span}")]
    NoSteps { step: f64, span: f64 },

    /// `maximumValue - minimumValue` is not a whole multiple of `step`.
    #[error("value span {span} is not a whole multiple of step {step}")]
    UnevenSpan { step: f64, span: f64 },

    /// The step count does not fit the point index type.
    #[error("step {step} divides span {span} into too many points")]
    TooManySteps { step: f64, span: f64 },

    /// The configuration document could not be deserialized.
    #[error("failed to parse slider config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

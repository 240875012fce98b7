//! Shared numeric constants for the slider engine.

// ── Value domain ────────────────────────────────────────────────

/// Lower bound used when a configuration omits `minimumValue`.
pub const DEFAULT_MINIMUM_VALUE: f64 = 0.0;

/// Upper bound used when a configuration omits `maximumValue`.
pub const DEFAULT_MAXIMUM_VALUE: f64 = 1.0;

/// Step used when a configuration omits `step`.
pub const DEFAULT_STEP: f64 = 1.0;

/// Index of the first point on the track; it coincides with the track start.
pub const FIRST_POINT: u32 = 0;

/// Relative tolerance when deciding whether `(max - min) / step` is a whole number.
pub const STEP_EPSILON: f64 = 1e-9;

// ── Track ───────────────────────────────────────────────────────

/// Left edge of the track in pixels.
pub const MINIMUM_TRACK_WIDTH: f64 = 0.0;

/// Default thumb edge length in pixels.
pub const DEFAULT_THUMB_SIZE_PX: f64 = 24.0;

// ── Feedback ────────────────────────────────────────────────────

/// Label fade duration in milliseconds.
pub const LABEL_FADE_MS: u64 = 200;

/// Fully opaque label.
pub const VISIBLE: f64 = 1.0;

/// Fully transparent label.
pub const INVISIBLE: f64 = 0.0;

/// Z-index for the thumb currently being dragged.
pub const RAISED_Z_INDEX: i32 = 1;

/// Z-index for a thumb at rest.
pub const RESTING_Z_INDEX: i32 = 0;

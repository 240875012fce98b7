//! Slider configuration, deserialized from the host's JSON props.
//!
//! Field names are camelCase on the wire (`minimumValue`, `tapToSeek`, ...)
//! and every field has a default, so `{}` is a valid document describing a
//! `0..=1` slider with step 1.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAXIMUM_VALUE, DEFAULT_MINIMUM_VALUE, DEFAULT_STEP, DEFAULT_THUMB_SIZE_PX, LABEL_FADE_MS};
use crate::error::ConfigError;
use crate::mapper::Scale;
use crate::range::RangeValue;

/// Thumb dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ThumbSize {
    fn default() -> Self {
        Self { width: DEFAULT_THUMB_SIZE_PX, height: DEFAULT_THUMB_SIZE_PX }
    }
}

/// Everything an engine needs to know about one mounted slider.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    pub step: f64,
    /// Track width known up front. When absent the engine waits for a layout event.
    pub track_width: Option<f64>,
    pub thumb_size: ThumbSize,
    /// Keep the value label visible when no drag is in progress.
    pub always_show_value: bool,
    /// Render point markers along the track.
    pub has_track_point: bool,
    /// Let presses on track points move a thumb.
    pub tap_to_seek: bool,
    /// Decimal places for the label text.
    pub round_to_value: Option<u8>,
    /// Duration of the label fade, in milliseconds.
    pub label_fade_ms: u64,
    /// Starting value for a single-thumb slider.
    pub initial_value: Option<f64>,
    /// Starting values for a range slider.
    pub initial_range: Option<RangeValue>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: DEFAULT_MINIMUM_VALUE,
            maximum_value: DEFAULT_MAXIMUM_VALUE,
            step: DEFAULT_STEP,
            track_width: None,
            thumb_size: ThumbSize::default(),
            always_show_value: false,
            has_track_point: false,
            tap_to_seek: false,
            round_to_value: None,
            label_fade_ms: LABEL_FADE_MS,
            initial_value: None,
            initial_range: None,
        }
    }
}

impl SliderConfig {
    /// Config for a `minimum..=maximum` slider with the given step; everything else defaulted.
    #[must_use]
    pub fn new(minimum_value: f64, maximum_value: f64, step: f64) -> Self {
        Self { minimum_value, maximum_value, step, ..Self::default() }
    }

    /// Builder-style track width.
    #[must_use]
    pub fn with_track_width(mut self, width: f64) -> Self {
        self.track_width = Some(width);
        self
    }

    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or a
    /// field has the wrong type. The values themselves are checked by
    /// [`SliderConfig::scale`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validate the value domain.
    ///
    /// # Errors
    ///
    /// See [`Scale::new`].
    pub fn scale(&self) -> Result<Scale, ConfigError> {
        Scale::new(self.minimum_value, self.maximum_value, self.step)
    }

    /// The value reported when the configuration is unusable.
    #[must_use]
    pub fn fallback_value(&self) -> f64 {
        if self.minimum_value.is_finite() { self.minimum_value } else { DEFAULT_MINIMUM_VALUE }
    }
}

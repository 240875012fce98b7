//! Conversions between pixel progress along the track and the stepped value domain.
//!
//! Two rounding rules coexist here on purpose. While a drag is live,
//! [`quantize_drag`] only moves the point once the finger has passed a whole
//! step beyond the current point, using `floor` going forward and `ceil` going
//! back. When a range thumb is released, [`pixel_to_point`] rounds to the
//! nearest point instead.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::consts::{FIRST_POINT, STEP_EPSILON};
use crate::error::ConfigError;
use crate::track::TrackLayout;

/// A validated value domain: `[minimum, maximum]` divided into `total_steps` steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub minimum: f64,
    pub maximum: f64,
    pub step: f64,
    /// Number of whole steps between the bounds; the last point index.
    pub total_steps: u32,
}

impl Scale {
    /// Validate bounds and step and derive the step count.
    ///
    /// The span must be a whole multiple of `step`, up to float noise, so the
    /// last point lands on `maximum`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the bounds are not finite or inverted,
    /// when `step` is not a positive finite number, when no whole step fits,
    /// or when the span is not a whole multiple of `step`.
    pub fn new(minimum: f64, maximum: f64, step: f64) -> Result<Self, ConfigError> {
        if !minimum.is_finite() || !maximum.is_finite() {
            return Err(ConfigError::NonFiniteBounds { minimum, maximum });
        }
        if maximum <= minimum {
            return Err(ConfigError::InvertedBounds { minimum, maximum });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }

        let span = maximum - minimum;
        let steps = span / step;
        if steps < 1.0 - STEP_EPSILON {
            return Err(ConfigError::NoSteps { step, span });
        }
        let whole = steps.round();
        if (steps - whole).abs() >= STEP_EPSILON * whole {
            return Err(ConfigError::UnevenSpan { step, span });
        }
        if whole > f64::from(u32::MAX) {
            return Err(ConfigError::TooManySteps { step, span });
        }

        Ok(Self { minimum, maximum, step, total_steps: whole_to_point(whole) })
    }

    /// `minimum + point * step`, kept inside the bounds.
    #[must_use]
    pub fn point_to_value(&self, point: u32) -> f64 {
        let point = point.min(self.total_steps);
        (self.minimum + f64::from(point) * self.step).clamp(self.minimum, self.maximum)
    }

    /// Nearest point for a domain value. Non-finite values map to the first point.
    #[must_use]
    pub fn value_to_point(&self, value: f64) -> u32 {
        if !value.is_finite() {
            return FIRST_POINT;
        }
        self.clamp_ratio(((value - self.minimum) / self.step).round())
    }

    /// Clamp a fractional point index into `[0, total_steps]` and truncate it.
    fn clamp_ratio(&self, ratio: f64) -> u32 {
        if ratio.is_nan() || ratio <= 0.0 {
            return FIRST_POINT;
        }
        if ratio >= f64::from(self.total_steps) {
            return self.total_steps;
        }
        whole_to_point(ratio)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_to_point(whole: f64) -> u32 {
    whole as u32
}

/// Continuous domain value under a pixel offset, clamped to the scale bounds.
///
/// An unmeasured track reports the minimum.
#[must_use]
pub fn pixel_to_value(pixel: f64, scale: &Scale, track: &TrackLayout) -> f64 {
    if !track.is_ready() || pixel.is_nan() {
        return scale.minimum;
    }
    let ratio = track.clamp_pixel(pixel) / track.spacing;
    (scale.minimum + ratio * scale.step).clamp(scale.minimum, scale.maximum)
}

/// Nearest point to a pixel offset, given the spacing between points.
///
/// Used when a range thumb is released.
#[must_use]
pub fn pixel_to_point(pixel: f64, spacing: f64, scale: &Scale) -> u32 {
    if pixel.is_nan() || pixel <= 0.0 || spacing <= 0.0 {
        return FIRST_POINT;
    }
    scale.clamp_ratio((pixel / spacing).round())
}

/// Decide whether a live drag has moved the thumb onto a new point.
///
/// Returns `None` while the pixel stays within one step of `current`. Past the
/// boundary ahead of `current` the new point is `floor(pixel / spacing)`;
/// behind the boundary before it, `ceil(pixel / spacing)`.
#[must_use]
pub fn quantize_drag(pixel: f64, current: u32, spacing: f64, scale: &Scale) -> Option<u32> {
    if pixel.is_nan() || spacing <= 0.0 {
        return None;
    }
    let ratio = pixel / spacing;
    let current = f64::from(current);
    if pixel > spacing * (current + 1.0) {
        Some(scale.clamp_ratio(ratio.floor()))
    } else if pixel < spacing * (current - 1.0) {
        Some(scale.clamp_ratio(ratio.ceil()))
    } else {
        None
    }
}

/// Label text for a value: fixed decimals when `decimals` is set, shortest form otherwise.
#[must_use]
pub fn format_value(value: f64, decimals: Option<u8>) -> String {
    // Avoid printing "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    match decimals {
        Some(places) => format!("{value:.prec$}", prec = usize::from(places)),
        None => value.to_string(),
    }
}

//! Track geometry: measured width, point spacing, the point grid, and fill spans.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use crate::consts::MINIMUM_TRACK_WIDTH;

/// Measured track geometry.
///
/// `spacing` is the pixel distance between neighbouring points. It is derived
/// once per measurement and reused until the track is measured again.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackLayout {
    pub width: f64,
    pub spacing: f64,
    pub total_steps: u32,
}

impl TrackLayout {
    /// A track whose width is not yet known.
    #[must_use]
    pub fn unmeasured(total_steps: u32) -> Self {
        Self { width: MINIMUM_TRACK_WIDTH, spacing: 0.0, total_steps }
    }

    /// Geometry for a track of `width` pixels split into `total_steps` steps.
    ///
    /// A non-positive or non-finite width, or zero steps, yields an unmeasured track.
    #[must_use]
    pub fn measure(width: f64, total_steps: u32) -> Self {
        if !width.is_finite() || width <= MINIMUM_TRACK_WIDTH || total_steps == 0 {
            return Self::unmeasured(total_steps);
        }
        Self { width, spacing: width / f64::from(total_steps), total_steps }
    }

    /// Whether gestures can be mapped onto this track.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.width > MINIMUM_TRACK_WIDTH && self.spacing > 0.0
    }

    /// Clamp a pixel offset onto `[0, width]`. `NaN` maps to the track start.
    #[must_use]
    pub fn clamp_pixel(&self, pixel: f64) -> f64 {
        if pixel.is_nan() {
            return MINIMUM_TRACK_WIDTH;
        }
        pixel.clamp(MINIMUM_TRACK_WIDTH, self.width.max(MINIMUM_TRACK_WIDTH))
    }

    /// Pixel offset of a point. The last point lands exactly on the track end.
    #[must_use]
    pub fn point_to_pixel(&self, point: u32) -> f64 {
        if point >= self.total_steps {
            return self.width;
        }
        self.clamp_pixel(self.spacing * f64::from(point))
    }
}

/// Offsets of the interior track points, `1 ..= total_steps - 1`.
///
/// The point at offset 0 coincides with the track start and is left out, as
/// is the one at the track end.
#[must_use]
pub fn build_point_grid(width: f64, total_steps: u32) -> Vec<f64> {
    let layout = TrackLayout::measure(width, total_steps);
    if !layout.is_ready() {
        return Vec::new();
    }
    (1..total_steps).map(|i| layout.spacing * f64::from(i)).collect()
}

/// The filled portion of the track, as an offset and a width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FillSpan {
    pub offset: f64,
    pub width: f64,
}

impl FillSpan {
    /// Fill from the track start up to a single thumb.
    #[must_use]
    pub fn single(progress: f64) -> Self {
        Self { offset: MINIMUM_TRACK_WIDTH, width: progress.max(0.0) }
    }

    /// Fill between two range thumbs.
    #[must_use]
    pub fn between(left: f64, right: f64) -> Self {
        Self { offset: left, width: (right - left).max(0.0) }
    }
}

//! Dual-thumb range engine.
//!
//! DESIGN
//! ======
//! Each thumb has its own gesture phase, but both read and write one
//! [`RangePixels`] cell. Before a thumb moves it reads the other thumb's live
//! pixel from that cell, so `left <= right` holds on every frame of a drag and
//! not only at commit time. The thumbs may meet; they never cross.
//!
//! While dragging, each thumb quantizes against its own last point with the
//! directional floor/ceil rule. On release the pixel is rounded to the nearest
//! point and `Action::RangeChanged` carries both values, the untouched side
//! unchanged.

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SliderConfig;
use crate::consts::{FIRST_POINT, MINIMUM_TRACK_WIDTH};
use crate::engine::{Action, ThumbFrame, ThumbState};
use crate::error::ConfigError;
use crate::feedback::range_feedback;
use crate::input::{GestureEvent, GestureSession, Release, ThumbPhase};
use crate::mapper::{Scale, format_value, pixel_to_point, quantize_drag};
use crate::track::{FillSpan, TrackLayout, build_point_grid};

/// A `{minimum, maximum}` pair in the value domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeValue {
    pub minimum: f64,
    pub maximum: f64,
}

impl RangeValue {
    #[must_use]
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// The same pair with `minimum <= maximum`.
    #[must_use]
    pub fn ordered(self) -> Self {
        if self.minimum > self.maximum { Self::new(self.maximum, self.minimum) } else { self }
    }
}

/// Which thumb of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbSide {
    #[default]
    Left,
    Right,
}

impl ThumbSide {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// The live pixel pair shared by both thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangePixels {
    left: f64,
    right: f64,
}

impl RangePixels {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn get(&self, side: ThumbSide) -> f64 {
        match side {
            ThumbSide::Left => self.left,
            ThumbSide::Right => self.right,
        }
    }

    /// Interval `side` may occupy given the other thumb's current pixel.
    #[must_use]
    pub fn bounds(&self, side: ThumbSide, track_width: f64) -> (f64, f64) {
        match side {
            ThumbSide::Left => (MINIMUM_TRACK_WIDTH, self.right),
            ThumbSide::Right => (self.left, track_width),
        }
    }

    /// Move one thumb, clamped against the other.
    fn set(&mut self, side: ThumbSide, pixel: f64, track_width: f64) {
        let (lo, hi) = self.bounds(side, track_width);
        let pixel = if pixel.is_nan() { lo } else { pixel.clamp(lo, hi.max(lo)) };
        match side {
            ThumbSide::Left => self.left = pixel,
            ThumbSide::Right => self.right = pixel,
        }
    }

    /// Place both thumbs at once, e.g. after a re-measure.
    fn reset(&mut self, left: f64, right: f64) {
        self.left = left.min(right);
        self.right = right.max(left);
    }
}

/// Committed points of both thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangePoints {
    pub left: u32,
    pub right: u32,
}

impl RangePoints {
    #[must_use]
    pub fn get(&self, side: ThumbSide) -> u32 {
        match side {
            ThumbSide::Left => self.left,
            ThumbSide::Right => self.right,
        }
    }

    fn set(&mut self, side: ThumbSide, point: u32) {
        match side {
            ThumbSide::Left => self.left = point.min(self.right),
            ThumbSide::Right => self.right = point.max(self.left),
        }
    }
}

/// Everything the rendering surface needs to draw a range slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFrame<'a> {
    pub left: ThumbFrame,
    pub right: ThumbFrame,
    pub fill: FillSpan,
    pub points: &'a [f64],
}

/// Dual-thumb engine state.
pub struct RangeCore {
    config: SliderConfig,
    scale: Result<Scale, ConfigError>,
    track: TrackLayout,
    grid: Vec<f64>,
    pixels: RangePixels,
    points: RangePoints,
    left: ThumbPhase,
    right: ThumbPhase,
    /// Thumb whose label is raised: the one dragged most recently.
    active: Option<ThumbSide>,
}

impl RangeCore {
    /// Build an engine with the thumbs at `initialRange`, or at both ends of the track.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let scale = config.scale();
        if let Err(e) = &scale {
            warn!(error = %e, "range slider config rejected; gestures disabled");
        }
        let points = match &scale {
            Ok(scale) => initial_points(scale, config.initial_range),
            Err(_) => RangePoints::default(),
        };
        let total_steps = scale.as_ref().map_or(0, |s| s.total_steps);
        let width = config.track_width;

        let mut core = Self {
            config,
            scale,
            track: TrackLayout::unmeasured(total_steps),
            grid: Vec::new(),
            pixels: RangePixels::default(),
            points,
            left: ThumbPhase::Idle,
            right: ThumbPhase::Idle,
            active: None,
        };
        if let Some(width) = width {
            core.measure(width);
        }
        core
    }

    // --- Configuration / layout ---

    /// Replace the configuration, keeping the current range where it still fits.
    pub fn set_config(&mut self, config: SliderConfig) -> Vec<Action> {
        let mut actions = self.release(ThumbSide::Left, Release::Cancelled);
        actions.extend(self.release(ThumbSide::Right, Release::Cancelled));
        let current = self.value();

        self.scale = config.scale();
        if let Err(e) = &self.scale {
            warn!(error = %e, "range slider config rejected; gestures disabled");
        }
        self.points = self
            .active_scale()
            .map_or_else(RangePoints::default, |scale| initial_points(&scale, Some(current)));
        let width = config.track_width.unwrap_or(self.track.width);
        self.config = config;
        self.measure(width);

        actions.push(Action::RenderNeeded);
        actions
    }

    /// The track was measured (or re-measured).
    pub fn on_layout(&mut self, width: f64) -> Vec<Action> {
        let old_width = self.track.width;
        self.measure(width);
        if old_width > MINIMUM_TRACK_WIDTH {
            let ratio = self.track.width / old_width;
            for phase in [&mut self.left, &mut self.right] {
                if let ThumbPhase::Dragging(session) = phase {
                    session.rescale(ratio);
                }
            }
        }
        vec![Action::RenderNeeded]
    }

    fn measure(&mut self, width: f64) {
        let total_steps = self.active_scale().map_or(0, |scale| scale.total_steps);
        self.track = TrackLayout::measure(width, total_steps);
        self.grid = build_point_grid(self.track.width, total_steps);
        if self.track.is_ready() {
            let left = self.track.point_to_pixel(self.points.left);
            self.pixels.reset(left, self.track.point_to_pixel(self.points.right));
        } else {
            self.pixels.reset(MINIMUM_TRACK_WIDTH, MINIMUM_TRACK_WIDTH);
        }
        debug!(width = self.track.width, spacing = self.track.spacing, total_steps, "range track measured");
    }

    // --- Input events ---

    /// Route one gesture event for `side` to its handler.
    pub fn on_gesture(&mut self, side: ThumbSide, event: GestureEvent) -> Vec<Action> {
        match event {
            GestureEvent::Start => self.on_start(side),
            GestureEvent::Active { translation } => self.on_active(side, translation),
            GestureEvent::End => self.on_end(side),
            GestureEvent::Cancel => self.on_cancel(side),
        }
    }

    pub fn on_start(&mut self, side: ThumbSide) -> Vec<Action> {
        if self.active_scale().is_none() {
            debug!(thumb = side.as_str(), "gesture ignored: range config is invalid");
            return Vec::new();
        }
        if !self.track.is_ready() {
            debug!(thumb = side.as_str(), "gesture ignored: track not measured");
            return Vec::new();
        }
        *self.phase_mut(side) = ThumbPhase::Dragging(GestureSession::begin(self.pixels.get(side)));
        self.active = Some(side);
        vec![Action::RenderNeeded]
    }

    pub fn on_active(&mut self, side: ThumbSide, translation: f64) -> Vec<Action> {
        let (Some(session), Some(scale)) = (self.phase(side).session(), self.active_scale()) else {
            return Vec::new();
        };
        if !self.track.is_ready() {
            debug!(thumb = side.as_str(), translation, "drag ignored: track not measured");
            return Vec::new();
        }
        let raised = self.active.replace(side) != Some(side);

        let target = session.candidate(translation).and_then(|c| self.drag_target(side, c, &scale));
        let moved = match target {
            Some((pixel, point)) if pixel != self.pixels.get(side) || point != self.points.get(side) => {
                self.pixels.set(side, pixel, self.track.width);
                self.points.set(side, point);
                true
            }
            _ => false,
        };

        if raised || moved { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    pub fn on_end(&mut self, side: ThumbSide) -> Vec<Action> {
        self.release(side, Release::Ended)
    }

    /// The host interrupted the drag on `side`. Runs the same release path as `on_end`.
    pub fn on_cancel(&mut self, side: ThumbSide) -> Vec<Action> {
        self.release(side, Release::Cancelled)
    }

    /// A track point was pressed. Moves whichever thumb the point is on the side of.
    pub fn on_press(&mut self, point: u32) -> Vec<Action> {
        if !self.config.tap_to_seek {
            debug!(point, "point press ignored: tap-to-seek disabled");
            return Vec::new();
        }
        let Some(scale) = self.active_scale() else {
            debug!(point, "point press ignored: range config is invalid");
            return Vec::new();
        };
        if !self.track.is_ready() {
            debug!(point, "point press ignored: track not measured");
            return Vec::new();
        }
        if self.left.is_dragging() || self.right.is_dragging() {
            debug!(point, "point press ignored: drag in progress");
            return Vec::new();
        }
        if point > scale.total_steps {
            warn!(point, total_steps = scale.total_steps, "point press outside the track");
            return Vec::new();
        }

        let side = if point <= self.points.left { ThumbSide::Left } else { ThumbSide::Right };
        self.commit_point(side, point);
        let value = self.value();
        debug!(thumb = side.as_str(), point, minimum = value.minimum, maximum = value.maximum, "range seeked");
        vec![Action::RangeChanged(value), Action::RenderNeeded]
    }

    /// Where a drag of `side` to `candidate` puts it, or `None` if it stays put.
    fn drag_target(&self, side: ThumbSide, candidate: f64, scale: &Scale) -> Option<(f64, u32)> {
        let current = self.points.get(side);
        match side {
            ThumbSide::Left => {
                let (right_px, right_point) = (self.pixels.right, self.points.right);
                if candidate <= MINIMUM_TRACK_WIDTH {
                    Some((MINIMUM_TRACK_WIDTH, FIRST_POINT))
                } else if candidate >= right_px {
                    Some((right_px, right_point))
                } else {
                    quantize_drag(candidate, current, self.track.spacing, scale).map(|point| {
                        let point = point.min(right_point);
                        (self.track.point_to_pixel(point).min(right_px), point)
                    })
                }
            }
            ThumbSide::Right => {
                let (left_px, left_point) = (self.pixels.left, self.points.left);
                if candidate <= left_px {
                    Some((left_px, left_point))
                } else if candidate >= self.track.width {
                    Some((self.track.width, scale.total_steps))
                } else {
                    quantize_drag(candidate, current, self.track.spacing, scale).map(|point| {
                        let point = point.max(left_point);
                        (self.track.point_to_pixel(point).max(left_px), point)
                    })
                }
            }
        }
    }

    fn release(&mut self, side: ThumbSide, reason: Release) -> Vec<Action> {
        if !self.phase_mut(side).release() {
            return Vec::new();
        }
        if self.phase(side.other()).is_dragging() {
            self.active = Some(side.other());
        }
        let Some(scale) = self.active_scale() else {
            return vec![Action::RenderNeeded];
        };

        // An unmeasured track has no pixels to round; keep the last committed point.
        let point = if self.track.is_ready() {
            pixel_to_point(self.pixels.get(side), self.track.spacing, &scale)
        } else {
            self.points.get(side)
        };
        self.commit_point(side, point);
        let value = self.value();
        debug!(
            thumb = side.as_str(),
            reason = reason.as_str(),
            minimum = value.minimum,
            maximum = value.maximum,
            "range thumb released"
        );
        vec![Action::RangeChanged(value), Action::RenderNeeded]
    }

    fn commit_point(&mut self, side: ThumbSide, point: u32) {
        self.points.set(side, point);
        let pixel = self.track.point_to_pixel(self.points.get(side));
        self.pixels.set(side, pixel, self.track.width);
    }

    fn phase(&self, side: ThumbSide) -> &ThumbPhase {
        match side {
            ThumbSide::Left => &self.left,
            ThumbSide::Right => &self.right,
        }
    }

    fn phase_mut(&mut self, side: ThumbSide) -> &mut ThumbPhase {
        match side {
            ThumbSide::Left => &mut self.left,
            ThumbSide::Right => &mut self.right,
        }
    }

    fn active_scale(&self) -> Option<Scale> {
        match &self.scale {
            Ok(scale) => Some(*scale),
            Err(_) => None,
        }
    }

    // --- Queries ---

    /// The committed range.
    #[must_use]
    pub fn value(&self) -> RangeValue {
        match self.active_scale() {
            Some(scale) => {
                RangeValue::new(scale.point_to_value(self.points.left), scale.point_to_value(self.points.right))
            }
            None => {
                let fallback = self.config.fallback_value();
                RangeValue::new(fallback, fallback)
            }
        }
    }

    #[must_use]
    pub fn thumb(&self, side: ThumbSide) -> ThumbState {
        ThumbState { progress_px: self.pixels.get(side), point: self.points.get(side) }
    }

    #[must_use]
    pub fn pixels(&self) -> RangePixels {
        self.pixels
    }

    #[must_use]
    pub fn points(&self) -> RangePoints {
        self.points
    }

    #[must_use]
    pub fn is_dragging(&self, side: ThumbSide) -> bool {
        self.phase(side).is_dragging()
    }

    /// The thumb whose label currently has priority.
    #[must_use]
    pub fn active_thumb(&self) -> Option<ThumbSide> {
        self.active
    }

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn config_error(&self) -> Option<&ConfigError> {
        self.scale.as_ref().err()
    }

    #[must_use]
    pub fn track(&self) -> TrackLayout {
        self.track
    }

    #[must_use]
    pub fn point_grid(&self) -> &[f64] {
        &self.grid
    }

    #[must_use]
    pub fn label_text(&self, side: ThumbSide) -> String {
        let value = self.value();
        let shown = match side {
            ThumbSide::Left => value.minimum,
            ThumbSide::Right => value.maximum,
        };
        format_value(shown, self.config.round_to_value)
    }

    /// Snapshot for the rendering surface.
    #[must_use]
    pub fn frame(&self) -> RangeFrame<'_> {
        let dragging = self.active.is_some_and(|side| self.phase(side).is_dragging());
        let (left_fb, right_fb) =
            range_feedback(self.active, dragging, self.config.always_show_value, self.config.label_fade_ms);
        let size = self.config.thumb_size;
        RangeFrame {
            left: ThumbFrame::new(self.pixels.left, size, self.label_text(ThumbSide::Left), left_fb),
            right: ThumbFrame::new(self.pixels.right, size, self.label_text(ThumbSide::Right), right_fb),
            fill: FillSpan::between(self.pixels.left, self.pixels.right),
            points: if self.config.has_track_point { &self.grid } else { &[] },
        }
    }
}

fn initial_points(scale: &Scale, initial: Option<RangeValue>) -> RangePoints {
    match initial {
        Some(range) => {
            let range = range.ordered();
            let left = scale.value_to_point(range.minimum);
            RangePoints { left, right: scale.value_to_point(range.maximum).max(left) }
        }
        None => RangePoints { left: FIRST_POINT, right: scale.total_steps },
    }
}

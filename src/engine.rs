//! Single-thumb slider engine.
//!
//! `SliderCore` owns the thumb state and turns host events (layout, gesture,
//! point press) into [`Action`]s. It never calls back into the host directly:
//! value commits come out as `Action::ValueChanged` for the caller to hand to
//! the callback context, see [`crate::dispatch`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, warn};

use crate::config::{SliderConfig, ThumbSize};
use crate::consts::{FIRST_POINT, MINIMUM_TRACK_WIDTH};
use crate::error::ConfigError;
use crate::feedback::{LabelFeedback, label_feedback};
use crate::input::{GestureEvent, GestureSession, Release, ThumbPhase};
use crate::mapper::{Scale, format_value, quantize_drag};
use crate::range::RangeValue;
use crate::track::{FillSpan, TrackLayout, build_point_grid};

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A single-thumb interaction finished; deliver to `onValueChange`.
    ValueChanged(f64),
    /// A range interaction finished; deliver to `onValueChange`.
    RangeChanged(RangeValue),
    /// Frame state changed; the host should redraw.
    RenderNeeded,
}

/// Position of one thumb: raw pixel offset and the point it is committed to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbState {
    pub progress_px: f64,
    pub point: u32,
}

/// Per-frame render data for one thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbFrame {
    /// Thumb centre along the track.
    pub pixel: f64,
    /// Offset of the thumb's leading edge, centring it on `pixel`.
    pub translate_x: f64,
    pub label: String,
    pub feedback: LabelFeedback,
}

impl ThumbFrame {
    pub(crate) fn new(pixel: f64, thumb_size: ThumbSize, label: String, feedback: LabelFeedback) -> Self {
        Self { pixel, translate_x: pixel - thumb_size.width / 2.0, label, feedback }
    }
}

/// Everything the rendering surface needs to draw a single-thumb slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame<'a> {
    pub thumb: ThumbFrame,
    pub fill: FillSpan,
    /// Interior point offsets; empty unless track points are enabled.
    pub points: &'a [f64],
}

/// Single-thumb engine state.
pub struct SliderCore {
    config: SliderConfig,
    scale: Result<Scale, ConfigError>,
    track: TrackLayout,
    grid: Vec<f64>,
    thumb: ThumbState,
    phase: ThumbPhase,
}

impl SliderCore {
    /// Build an engine. An invalid configuration yields a disabled engine
    /// that reports the minimum value; see [`SliderCore::config_error`].
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let scale = config.scale();
        if let Err(e) = &scale {
            warn!(error = %e, "slider config rejected; gestures disabled");
        }
        let point = match (&scale, config.initial_value) {
            (Ok(scale), Some(value)) => scale.value_to_point(value),
            _ => FIRST_POINT,
        };
        let total_steps = scale.as_ref().map_or(0, |s| s.total_steps);
        let width = config.track_width;

        let mut core = Self {
            config,
            scale,
            track: TrackLayout::unmeasured(total_steps),
            grid: Vec::new(),
            thumb: ThumbState { progress_px: MINIMUM_TRACK_WIDTH, point },
            phase: ThumbPhase::Idle,
        };
        if let Some(width) = width {
            core.measure(width);
        }
        core
    }

    // --- Configuration / layout ---

    /// Replace the configuration, keeping the current value where it still fits.
    ///
    /// A drag in progress is released first so its commit is not lost.
    pub fn set_config(&mut self, config: SliderConfig) -> Vec<Action> {
        let mut actions = self.release(Release::Cancelled);
        let value = self.value();

        self.scale = config.scale();
        if let Err(e) = &self.scale {
            warn!(error = %e, "slider config rejected; gestures disabled");
        }
        self.thumb.point = self.active_scale().map_or(FIRST_POINT, |scale| scale.value_to_point(value));
        let width = config.track_width.unwrap_or(self.track.width);
        self.config = config;
        self.measure(width);

        actions.push(Action::RenderNeeded);
        actions
    }

    /// The track was measured (or re-measured, e.g. on resize).
    pub fn on_layout(&mut self, width: f64) -> Vec<Action> {
        let old_width = self.track.width;
        self.measure(width);
        if let ThumbPhase::Dragging(session) = &mut self.phase {
            if old_width > MINIMUM_TRACK_WIDTH {
                session.rescale(self.track.width / old_width);
            }
        }
        vec![Action::RenderNeeded]
    }

    fn measure(&mut self, width: f64) {
        let total_steps = self.active_scale().map_or(0, |scale| scale.total_steps);
        self.track = TrackLayout::measure(width, total_steps);
        self.grid = build_point_grid(self.track.width, total_steps);
        self.thumb.progress_px = if self.track.is_ready() {
            self.track.point_to_pixel(self.thumb.point)
        } else {
            MINIMUM_TRACK_WIDTH
        };
        debug!(width = self.track.width, spacing = self.track.spacing, total_steps, "slider track measured");
    }

    // --- Input events ---

    /// Route one gesture event to its handler.
    pub fn on_gesture(&mut self, event: GestureEvent) -> Vec<Action> {
        match event {
            GestureEvent::Start => self.on_start(),
            GestureEvent::Active { translation } => self.on_active(translation),
            GestureEvent::End => self.on_end(),
            GestureEvent::Cancel => self.on_cancel(),
        }
    }

    pub fn on_start(&mut self) -> Vec<Action> {
        if self.active_scale().is_none() {
            debug!("gesture ignored: slider config is invalid");
            return Vec::new();
        }
        if !self.track.is_ready() {
            debug!("gesture ignored: track not measured");
            return Vec::new();
        }
        self.phase = ThumbPhase::Dragging(GestureSession::begin(self.thumb.progress_px));
        vec![Action::RenderNeeded]
    }

    pub fn on_active(&mut self, translation: f64) -> Vec<Action> {
        let (Some(session), Some(scale)) = (self.phase.session(), self.active_scale()) else {
            return Vec::new();
        };
        if !self.track.is_ready() {
            debug!(translation, "drag ignored: track not measured");
            return Vec::new();
        }
        let Some(candidate) = session.candidate(translation) else {
            return Vec::new();
        };
        match self.drag_target(candidate, &scale) {
            Some(next) if next != self.thumb => {
                self.thumb = next;
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_end(&mut self) -> Vec<Action> {
        self.release(Release::Ended)
    }

    /// The host interrupted the drag. Runs the same release path as `on_end`.
    pub fn on_cancel(&mut self) -> Vec<Action> {
        self.release(Release::Cancelled)
    }

    /// A track point was pressed. Jumps straight to `point` when tap-to-seek is on.
    pub fn on_press(&mut self, point: u32) -> Vec<Action> {
        if !self.config.tap_to_seek {
            debug!(point, "point press ignored: tap-to-seek disabled");
            return Vec::new();
        }
        let Some(scale) = self.active_scale() else {
            debug!(point, "point press ignored: slider config is invalid");
            return Vec::new();
        };
        if !self.track.is_ready() {
            debug!(point, "point press ignored: track not measured");
            return Vec::new();
        }
        if self.phase.is_dragging() {
            debug!(point, "point press ignored: drag in progress");
            return Vec::new();
        }
        if point > scale.total_steps {
            warn!(point, total_steps = scale.total_steps, "point press outside the track");
            return Vec::new();
        }

        self.thumb = ThumbState { progress_px: self.track.point_to_pixel(point), point };
        let value = scale.point_to_value(point);
        debug!(point, value, "slider seeked");
        vec![Action::ValueChanged(value), Action::RenderNeeded]
    }

    /// Where a drag to `candidate` puts the thumb, or `None` if it stays put.
    fn drag_target(&self, candidate: f64, scale: &Scale) -> Option<ThumbState> {
        if candidate <= MINIMUM_TRACK_WIDTH {
            return Some(ThumbState { progress_px: MINIMUM_TRACK_WIDTH, point: FIRST_POINT });
        }
        if candidate >= self.track.width {
            return Some(ThumbState { progress_px: self.track.width, point: scale.total_steps });
        }
        quantize_drag(candidate, self.thumb.point, self.track.spacing, scale)
            .map(|point| ThumbState { progress_px: self.track.point_to_pixel(point), point })
    }

    fn release(&mut self, reason: Release) -> Vec<Action> {
        if !self.phase.release() {
            return Vec::new();
        }
        let Some(scale) = self.active_scale() else {
            return vec![Action::RenderNeeded];
        };
        let value = scale.point_to_value(self.thumb.point);
        debug!(reason = reason.as_str(), point = self.thumb.point, value, "slider released");
        vec![Action::ValueChanged(value), Action::RenderNeeded]
    }

    fn active_scale(&self) -> Option<Scale> {
        match &self.scale {
            Ok(scale) => Some(*scale),
            Err(_) => None,
        }
    }

    // --- Queries ---

    /// The committed domain value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.active_scale()
            .map_or_else(|| self.config.fallback_value(), |scale| scale.point_to_value(self.thumb.point))
    }

    #[must_use]
    pub fn thumb(&self) -> ThumbState {
        self.thumb
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Why the configuration was rejected, if it was.
    #[must_use]
    pub fn config_error(&self) -> Option<&ConfigError> {
        self.scale.as_ref().err()
    }

    #[must_use]
    pub fn track(&self) -> TrackLayout {
        self.track
    }

    /// Interior point offsets for the track-point overlay.
    #[must_use]
    pub fn point_grid(&self) -> &[f64] {
        &self.grid
    }

    #[must_use]
    pub fn label_text(&self) -> String {
        format_value(self.value(), self.config.round_to_value)
    }

    /// Snapshot for the rendering surface.
    #[must_use]
    pub fn frame(&self) -> SliderFrame<'_> {
        let feedback =
            label_feedback(self.phase.is_dragging(), self.config.always_show_value, self.config.label_fade_ms);
        SliderFrame {
            thumb: ThumbFrame::new(self.thumb.progress_px, self.config.thumb_size, self.label_text(), feedback),
            fill: FillSpan::single(self.thumb.progress_px),
            points: if self.config.has_track_point { &self.grid } else { &[] },
        }
    }
}

//! Transient label feedback derived from gesture activity.
//!
//! Nothing here feeds back into thumb positions or committed points. Engines
//! call these helpers when building a frame; a host with its own animation
//! driver only needs the targets, a host without one can tick a [`Fade`].

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::consts::{INVISIBLE, RAISED_Z_INDEX, RESTING_Z_INDEX, VISIBLE};
use crate::range::ThumbSide;

/// Target visual state for one thumb's value label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFeedback {
    /// Opacity the label animates toward.
    pub opacity: f64,
    /// Stacking priority; the dragged thumb of a range slider is raised.
    pub z_index: i32,
    /// Duration of the transition toward `opacity`.
    pub transition_ms: u64,
}

/// Label feedback for a lone thumb.
#[must_use]
pub fn label_feedback(is_dragging: bool, always_show: bool, transition_ms: u64) -> LabelFeedback {
    let opacity = if is_dragging || always_show { VISIBLE } else { INVISIBLE };
    LabelFeedback { opacity, z_index: RESTING_Z_INDEX, transition_ms }
}

/// Label feedback for both thumbs of a range slider, as `(left, right)`.
///
/// While a thumb is active its label is raised and shown, and the other label
/// is hidden so the two never overlap ambiguously. `always_show` keeps both
/// labels visible but still raises the active one.
#[must_use]
pub fn range_feedback(
    active: Option<ThumbSide>,
    dragging: bool,
    always_show: bool,
    transition_ms: u64,
) -> (LabelFeedback, LabelFeedback) {
    let thumb = |side: ThumbSide| {
        let is_active = active == Some(side);
        let z_index = if is_active { RAISED_Z_INDEX } else { RESTING_Z_INDEX };
        let opacity = if always_show || (dragging && is_active) { VISIBLE } else { INVISIBLE };
        LabelFeedback { opacity, z_index, transition_ms }
    };
    (thumb(ThumbSide::Left), thumb(ThumbSide::Right))
}

/// A linear opacity transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u64,
}

impl Fade {
    /// Transition from the currently displayed opacity toward a feedback target.
    #[must_use]
    pub fn toward(current: f64, target: &LabelFeedback) -> Self {
        let from = if current.is_finite() { current.clamp(INVISIBLE, VISIBLE) } else { target.opacity };
        Self { from, to: target.opacity, duration_ms: target.transition_ms }
    }

    /// Opacity after `elapsed_ms`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn opacity_at(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.to;
        }
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

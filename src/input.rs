//! Gesture model: inbound drag events and the per-thumb gesture state machine.
//!
//! Every thumb follows the same three-phase contract: a start captures the
//! thumb's pixel as the anchor, each active event carries the cumulative
//! translation since the start, and an end (or a host cancellation) releases
//! the thumb. `ThumbPhase` is the state tracked between start and release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// One event from the host's drag-gesture stream for a single thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The finger went down on the thumb.
    Start,
    /// The finger moved; `translation` is cumulative since `Start`, in pixels.
    Active { translation: f64 },
    /// The finger lifted.
    End,
    /// The host interrupted the gesture, e.g. another gesture claimed the surface.
    Cancel,
}

/// How a drag finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Ended,
    Cancelled,
}

impl Release {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Per-drag state, alive between gesture start and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Thumb pixel at the moment the gesture began.
    pub anchor_px: f64,
}

impl GestureSession {
    #[must_use]
    pub fn begin(anchor_px: f64) -> Self {
        Self { anchor_px }
    }

    /// Raw pixel the finger points at, or `None` for a non-finite translation.
    #[must_use]
    pub fn candidate(&self, translation: f64) -> Option<f64> {
        translation.is_finite().then_some(self.anchor_px + translation)
    }

    /// Re-anchor after the track was re-measured mid-drag.
    pub fn rescale(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio > 0.0 {
            self.anchor_px *= ratio;
        }
    }
}

/// Gesture state of one thumb.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThumbPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(GestureSession),
}

impl ThumbPhase {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<GestureSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(*session),
        }
    }

    /// Leave the dragging state. Returns `false` when no drag was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::take(self).is_dragging()
    }
}

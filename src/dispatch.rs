//! Callback dispatcher: hands value commits from the gesture context to the
//! callback context.
//!
//! DESIGN
//! ======
//! Gesture handling runs synchronously and must never wait on application
//! code. Commits are copied into a [`CommitMessage`] and pushed onto an
//! unbounded tokio channel; a worker task on the callback side drains the
//! channel in order and runs the handler. Sending never blocks and never
//! drops a commit while the worker is alive. Once the worker is gone, sends
//! are logged and discarded; the engine state is unaffected.
//!
//! One dispatcher can serve many sliders. Each registers a [`CommitSender`]
//! tagged with its own [`SliderId`].

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::Action;
use crate::range::RangeValue;

/// Identifies one mounted slider on a shared dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliderId(pub Uuid);

impl SliderId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SliderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The payload handed to `onValueChange`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Commit {
    Value(f64),
    Range(RangeValue),
}

impl Commit {
    /// The commit carried by an engine action, if any.
    #[must_use]
    pub fn from_action(action: &Action) -> Option<Self> {
        match action {
            Action::ValueChanged(value) => Some(Self::Value(*value)),
            Action::RangeChanged(range) => Some(Self::Range(*range)),
            Action::RenderNeeded => None,
        }
    }
}

/// One commit in flight to the callback context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub slider: SliderId,
    pub commit: Commit,
}

/// Gesture-side handle for one slider.
#[derive(Debug, Clone)]
pub struct CommitSender {
    slider: SliderId,
    tx: mpsc::UnboundedSender<CommitMessage>,
}

impl CommitSender {
    #[must_use]
    pub fn slider(&self) -> SliderId {
        self.slider
    }

    /// Forward every commit in `actions` without waiting. Returns how many were queued.
    pub fn forward(&self, actions: &[Action]) -> usize {
        actions
            .iter()
            .filter_map(Commit::from_action)
            .filter(|commit| self.send(*commit))
            .count()
    }

    /// Queue one commit. Returns `false` if the callback side has shut down.
    pub fn send(&self, commit: Commit) -> bool {
        match self.tx.send(CommitMessage { slider: self.slider, commit }) {
            Ok(()) => true,
            Err(mpsc::error::SendError(msg)) => {
                warn!(slider = %msg.slider, commit = ?msg.commit, "callback worker closed; dropping commit");
                false
            }
        }
    }
}

/// Owner of the callback-side worker.
#[derive(Debug, Clone)]
pub struct CallbackDispatcher {
    tx: mpsc::UnboundedSender<CommitMessage>,
}

impl CallbackDispatcher {
    /// Spawn the callback worker on the current tokio runtime.
    ///
    /// The worker runs `handler` for each commit in arrival order and exits
    /// once the dispatcher and every sender are dropped. The returned handle
    /// resolves to the number of commits delivered.
    pub fn spawn<F>(mut handler: F) -> (Self, JoinHandle<usize>)
    where
        F: FnMut(CommitMessage) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<CommitMessage>();
        let worker = tokio::spawn(async move {
            let mut delivered = 0usize;
            while let Some(msg) = rx.recv().await {
                debug!(slider = %msg.slider, commit = ?msg.commit, "delivering commit");
                handler(msg);
                delivered += 1;
            }
            info!(delivered, "callback worker stopped");
            delivered
        });
        (Self { tx }, worker)
    }

    /// A sender for a newly mounted slider.
    #[must_use]
    pub fn register(&self) -> CommitSender {
        self.sender_for(SliderId::new())
    }

    /// A sender for a known slider id.
    #[must_use]
    pub fn sender_for(&self, slider: SliderId) -> CommitSender {
        CommitSender { slider, tx: self.tx.clone() }
    }
}

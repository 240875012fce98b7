//! Slider interaction engine.
//!
//! Turns a continuous drag gesture into a stepped domain value, or for a
//! range slider into a pair of values that never cross, while producing the
//! per-frame data a rendering surface needs (thumb offsets, label text and
//! opacity, track fill, point markers). The host is responsible only for
//! delivering gesture and layout events and for drawing the frames; value
//! commits flow back through [`dispatch`] to whichever context runs the
//! application's `onValueChange`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Single-thumb engine [`engine::SliderCore`] and the shared [`engine::Action`] |
//! | [`range`] | Dual-thumb engine [`range::RangeCore`] with the non-crossing invariant |
//! | [`mapper`] | Pixel ↔ point ↔ value conversions and drag quantization |
//! | [`track`] | Track measurement, point grid, and fill spans |
//! | [`input`] | Gesture events and the per-thumb gesture state machine |
//! | [`feedback`] | Label opacity and z-index derived from gesture activity |
//! | [`dispatch`] | Fire-and-forget hand-off of commits to the callback context |
//! | [`config`] | Serde configuration document |
//! | [`error`] | Configuration errors |
//! | [`consts`] | Shared numeric constants (defaults, fade duration, etc.) |

pub mod config;
pub mod consts;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod input;
pub mod mapper;
pub mod range;
pub mod track;

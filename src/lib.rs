//! wavecmp - Sample-for-sample comparison of WAV recordings
//!
//! Validates that an audio-processing pipeline produced output matching a
//! reference recording, within floating-point and algorithmic noise. Two
//! mutually exclusive modes:
//! - verdict: element-wise tolerance check, prints `:-)` or `:-(`
//! - visualize: two-panel diff figure (overlaid traces plus residual)
//!
//! Structural mismatches between the two inputs (sample rate or shape) are
//! fatal; this is a one-shot diagnostic tool with no recovery paths.

pub mod cli;
pub mod compare;
pub mod error;
pub mod io;
pub mod plot;
pub mod signal;

pub use error::{Result, WavcmpError};

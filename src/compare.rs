//! Signal comparison
//!
//! Decides whether two signals are numerically equivalent within tolerance.
//! Structural validation (sample rate and shape) always runs first and is
//! fatal on mismatch; there is no recoverable-error path here.
//!
//! Per-sample equivalence uses the standard closeness test
//! `|a - b| <= atol + rtol * |b|`. Note the relative term is taken against
//! the second operand, so the test is not symmetric when `rtol != 0`.

use log::debug;

use crate::error::{Result, WavcmpError};
use crate::signal::Signal;

/// Tolerance configuration for the per-sample closeness test
///
/// The default leaves `rtol` at zero: audio samples live in a bounded range
/// (typically [-1, 1]), so absolute agreement is the meaningful criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the magnitude of the second operand
    pub rtol: f32,
    /// Absolute tolerance
    pub atol: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            rtol: 0.0,
            atol: 0.1,
        }
    }
}

impl Tolerance {
    /// Create a tolerance with the given relative and absolute components
    pub fn new(rtol: f32, atol: f32) -> Self {
        Tolerance { rtol, atol }
    }
}

/// Comparison mode, resolved once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print an equivalence verdict
    Verdict,
    /// Render a diff figure instead of a verdict
    Visualize,
}

/// Check that two signals are structurally comparable
///
/// Both preconditions are checked unconditionally, sample rate first:
/// comparing signals of different rate or shape is an input error, never a
/// soft mismatch.
pub fn validate(x: &Signal, y: &Signal) -> Result<()> {
    if x.sample_rate() != y.sample_rate() {
        return Err(WavcmpError::SampleRateMismatch {
            x: x.sample_rate(),
            y: y.sample_rate(),
        });
    }
    if x.shape() != y.shape() {
        return Err(WavcmpError::ShapeMismatch {
            x: x.shape(),
            y: y.shape(),
        });
    }
    Ok(())
}

/// Element-wise closeness over two slices
///
/// True only if the slices have equal length and every pair satisfies
/// `|a - b| <= atol + rtol * |b|`. Equal-length empty slices are vacuously
/// close; a length mismatch is never close.
pub fn allclose(x: &[f32], y: &[f32], tol: Tolerance) -> bool {
    x.len() == y.len()
        && x
            .iter()
            .zip(y.iter())
            .all(|(a, b)| (a - b).abs() <= tol.atol + tol.rtol * b.abs())
}

/// Compute the equivalence verdict for two signals
///
/// Validates structure first, then applies the closeness test across the
/// interleaved sample arrays, which covers multi-channel signals without
/// special handling.
pub fn verdict(x: &Signal, y: &Signal, tol: Tolerance) -> Result<bool> {
    validate(x, y)?;

    let ok = allclose(x.samples(), y.samples(), tol);
    debug!(
        "Compared {} samples with rtol={} atol={}: {}",
        x.samples().len(),
        tol.rtol,
        tol.atol,
        if ok { "equivalent" } else { "not equivalent" }
    );
    Ok(ok)
}

/// Element-wise residual x - y over the interleaved samples
///
/// Callers must have validated the pair; equal shape is assumed.
pub fn residual(x: &Signal, y: &Signal) -> Vec<f32> {
    x.samples()
        .iter()
        .zip(y.samples().iter())
        .map(|(a, b)| a - b)
        .collect()
}

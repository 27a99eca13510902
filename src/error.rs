//! Error handling for wavecmp
//!
//! Every failure here is fatal: the tool is one-shot, so errors surface to
//! `main` and terminate the process with a descriptive message. Structural
//! mismatches carry both compared values so the report is self-explanatory.

use thiserror::Error;

/// Result type alias for wavecmp operations
pub type Result<T> = std::result::Result<T, WavcmpError>;

/// Main error type for wavecmp operations
#[derive(Error, Debug)]
pub enum WavcmpError {
    // Structural mismatches between the two signals
    #[error("Unequal sample rate {x} != {y}")]
    SampleRateMismatch { x: u32, y: u32 },

    #[error("Unequal signal shape {x:?} != {y:?} (frames, channels)")]
    ShapeMismatch {
        x: (usize, u16),
        y: (usize, u16),
    },

    // Signal construction errors
    #[error("Signal contains no samples")]
    EmptySignal,

    #[error("Sample count {samples} is not divisible by channel count {channels}")]
    RaggedChannels { samples: usize, channels: u16 },

    // Decode/encode failures, propagated from hound without translation
    #[error("Failed to read audio file '{path}': {source}")]
    AudioRead {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to write audio file '{path}': {source}")]
    AudioWrite {
        path: String,
        #[source]
        source: hound::Error,
    },

    // Diff figure rendering failures
    #[error("Failed to render diff figure: {0}")]
    Plot(String),

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavcmpError {
    /// True when the error is a precondition failure between the two inputs
    /// rather than a problem with either file on its own. The binary maps
    /// these to their own exit code.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            WavcmpError::SampleRateMismatch { .. } | WavcmpError::ShapeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatches_are_structural() {
        let err = WavcmpError::SampleRateMismatch { x: 44100, y: 48000 };
        assert!(err.is_structural());
        let err = WavcmpError::ShapeMismatch {
            x: (1000, 1),
            y: (999, 1),
        };
        assert!(err.is_structural());
    }

    #[test]
    fn test_mismatch_messages_carry_both_values() {
        let err = WavcmpError::SampleRateMismatch { x: 44100, y: 48000 };
        let msg = err.to_string();
        assert!(msg.contains("44100"));
        assert!(msg.contains("48000"));

        let err = WavcmpError::ShapeMismatch {
            x: (1000, 1),
            y: (999, 1),
        };
        let msg = err.to_string();
        assert!(msg.contains("1000"));
        assert!(msg.contains("999"));
    }

    #[test]
    fn test_decode_errors_are_not_structural() {
        let err = WavcmpError::AudioRead {
            path: "missing.wav".to_string(),
            source: hound::Error::FormatError("not a wave file"),
        };
        assert!(!err.is_structural());
        assert!(err.to_string().contains("missing.wav"));
    }
}

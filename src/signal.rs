//! Signal representation
//!
//! A `Signal` is an immutable sequence of interleaved f32 samples plus its
//! sample rate and channel count. Loaded once per invocation and never
//! mutated afterwards.

use crate::error::{Result, WavcmpError};

/// Audio sample data with metadata
#[derive(Debug, Clone)]
pub struct Signal {
    /// Interleaved audio samples normalized to -1.0..1.0
    samples: Vec<f32>,
    /// Number of audio channels (1 = mono, 2 = stereo)
    channels: u16,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl Signal {
    /// Create a new signal with the given parameters
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(WavcmpError::EmptySignal);
        }
        if channels == 0 || samples.len() % channels as usize != 0 {
            return Err(WavcmpError::RaggedChannels {
                samples: samples.len(),
                channels,
            });
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Create a silent signal with the given duration
    pub fn silence(duration_secs: f32, channels: u16, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize * channels as usize;
        Self {
            samples: vec![0.0; num_samples],
            channels,
            sample_rate,
        }
    }

    /// Create a mono sine wave test signal
    pub fn sine_wave(frequency: f32, duration_secs: f32, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        let step = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;
        let samples = (0..num_samples).map(|i| (step * i as f32).sin()).collect();

        Self {
            samples,
            channels: 1,
            sample_rate,
        }
    }

    /// Get a reference to the interleaved samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Get the number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Get the shape as (frames, channels)
    pub fn shape(&self) -> (usize, u16) {
        (self.num_frames(), self.channels)
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f32 {
        self.num_frames() as f32 / self.sample_rate as f32
    }

    /// Get samples for a specific channel (0-indexed)
    pub fn channel_samples(&self, channel: u16) -> Vec<f32> {
        if channel >= self.channels {
            return Vec::new();
        }
        self.samples
            .chunks_exact(self.channels as usize)
            .map(|frame| frame[channel as usize])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_empty() {
        let result = Signal::new(vec![], 1, 44100);
        assert!(matches!(result, Err(WavcmpError::EmptySignal)));
    }

    #[test]
    fn test_new_rejects_ragged_channels() {
        let result = Signal::new(vec![0.0, 0.1, 0.2], 2, 44100);
        assert!(matches!(
            result,
            Err(WavcmpError::RaggedChannels {
                samples: 3,
                channels: 2
            })
        ));
    }

    #[test]
    fn test_shape_mono() {
        let signal = Signal::new(vec![0.0, 0.5, 1.0], 1, 44100).unwrap();
        assert_eq!(signal.shape(), (3, 1));
        assert_eq!(signal.num_frames(), 3);
    }

    #[test]
    fn test_shape_stereo() {
        let signal = Signal::new(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6], 2, 48000).unwrap();
        assert_eq!(signal.shape(), (3, 2));
        assert_eq!(signal.channel_samples(0), vec![0.1, 0.3, 0.5]);
        assert_eq!(signal.channel_samples(1), vec![0.2, 0.4, 0.6]);
        assert!(signal.channel_samples(2).is_empty());
    }

    #[test]
    fn test_duration() {
        let signal = Signal::silence(2.0, 2, 44100);
        assert_relative_eq!(signal.duration(), 2.0, epsilon = 1e-6);
        assert_eq!(signal.channels(), 2);
    }

    #[test]
    fn test_sine_wave_amplitude() {
        let signal = Signal::sine_wave(440.0, 1.0, 44100);
        assert_eq!(signal.num_frames(), 44100);

        let peak = signal.samples().iter().map(|s| s.abs()).fold(0.0, f32::max);
        assert_relative_eq!(peak, 1.0, epsilon = 1e-3);
    }
}

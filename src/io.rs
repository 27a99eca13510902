//! Audio file I/O operations
//!
//! The loader is a thin pass-through over hound: whatever channel count and
//! sample rate the container declares is what the returned `Signal` carries.
//! No resampling or format inference happens here; decode failures propagate
//! unchanged, tagged with the offending path.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::error::{Result, WavcmpError};
use crate::signal::Signal;

/// Load a WAV file into a Signal
///
/// Integer formats (8/16/24/32-bit) are scaled to f32 in [-1, 1]; float
/// WAV data is taken as-is.
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let path = path.as_ref();
    let read_err = |e| WavcmpError::AudioRead {
        path: path.display().to_string(),
        source: e,
    };

    let reader = WavReader::open(path).map_err(read_err)?;

    let spec = reader.spec();
    let channels = spec.channels;
    let sample_rate = spec.sample_rate;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map_err(read_err))
            .collect::<Result<Vec<f32>>>()?,
        SampleFormat::Int => {
            let max_val = (1u32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val).map_err(read_err))
                .collect::<Result<Vec<f32>>>()?
        }
    };

    debug!(
        "Loaded '{}': {} frames, {} ch @ {} Hz",
        path.display(),
        samples.len() / channels.max(1) as usize,
        channels,
        sample_rate
    );

    Signal::new(samples, channels, sample_rate)
}

/// Save a Signal to a 32-bit float WAV file
///
/// Used by tests and fixture generation; comparison itself never writes audio.
pub fn save_wav<P: AsRef<Path>>(signal: &Signal, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_err = |e| WavcmpError::AudioWrite {
        path: path.display().to_string(),
        source: e,
    };

    let spec = WavSpec {
        channels: signal.channels(),
        sample_rate: signal.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(write_err)?;
    for &sample in signal.samples() {
        writer.write_sample(sample).map_err(write_err)?;
    }
    writer.finalize().map_err(write_err)
}

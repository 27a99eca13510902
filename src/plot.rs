//! Diff figure rendering
//!
//! Visualize mode draws two vertically stacked panels sharing the
//! sample-index axis: the upper panel overlays both signals at half opacity
//! so agreement is visible as color blending, the lower panel shows the
//! residual x - y. The figure is written as a PNG; no verdict is computed
//! or printed in this mode.

use std::path::Path;

use log::debug;
use plotters::prelude::*;

use crate::compare::{residual, validate};
use crate::error::{Result, WavcmpError};
use crate::signal::Signal;

/// Figure dimensions in pixels
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
        }
    }
}

/// Render the two-panel diff figure for a validated signal pair
///
/// Fails with the same structural errors as verdict mode when the pair is
/// not comparable; rendering never runs on mismatched signals.
pub fn render_diff_png<P: AsRef<Path>>(
    x: &Signal,
    y: &Signal,
    out_path: P,
    style: PlotStyle,
) -> Result<()> {
    validate(x, y)?;

    let out_path = out_path.as_ref();
    draw(x, y, out_path, style).map_err(|e| WavcmpError::Plot(e.to_string()))?;

    debug!("Wrote diff figure to '{}'", out_path.display());
    Ok(())
}

fn draw(
    x: &Signal,
    y: &Signal,
    out_path: &Path,
    style: PlotStyle,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root =
        BitMapBackend::new(out_path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((2, 1));
    let frames = x.num_frames();
    let diff = residual(x, y);

    // Upper panel: x and y overlaid at half opacity
    {
        let (y_min, y_max) = padded_bounds(
            x.samples()
                .iter()
                .chain(y.samples().iter())
                .copied(),
        );
        let mut chart = ChartBuilder::on(&panels[0])
            .margin(5)
            .set_label_area_size(LabelAreaPosition::Left, 45)
            .set_label_area_size(LabelAreaPosition::Bottom, 25)
            .build_cartesian_2d(0f32..frames as f32, y_min..y_max)?;
        chart
            .configure_mesh()
            .light_line_style(BLACK.mix(0.1))
            .draw()?;

        for ch in 0..x.channels() {
            let series = x
                .channel_samples(ch)
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i as f32, v));
            let drawn = chart.draw_series(LineSeries::new(series, &BLUE.mix(0.5)))?;
            if ch == 0 {
                drawn.label("x").legend(|(px, py)| {
                    PathElement::new(vec![(px, py), (px + 20, py)], BLUE.mix(0.5))
                });
            }
        }
        for ch in 0..y.channels() {
            let series = y
                .channel_samples(ch)
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i as f32, v));
            let drawn = chart.draw_series(LineSeries::new(series, &RED.mix(0.5)))?;
            if ch == 0 {
                drawn.label("y").legend(|(px, py)| {
                    PathElement::new(vec![(px, py), (px + 20, py)], RED.mix(0.5))
                });
            }
        }

        chart
            .configure_series_labels()
            .border_style(BLACK.mix(0.2))
            .background_style(WHITE)
            .draw()?;
    }

    // Lower panel: residual x - y
    {
        let (y_min, y_max) = padded_bounds(diff.iter().copied());
        let mut chart = ChartBuilder::on(&panels[1])
            .margin(5)
            .set_label_area_size(LabelAreaPosition::Left, 45)
            .set_label_area_size(LabelAreaPosition::Bottom, 25)
            .build_cartesian_2d(0f32..frames as f32, y_min..y_max)?;
        chart
            .configure_mesh()
            .light_line_style(BLACK.mix(0.1))
            .draw()?;

        let channels = x.channels() as usize;
        for ch in 0..channels {
            let series = diff
                .iter()
                .skip(ch)
                .step_by(channels)
                .copied()
                .enumerate()
                .map(|(i, v)| (i as f32, v));
            let drawn = chart.draw_series(LineSeries::new(series, &BLACK.mix(0.5)))?;
            if ch == 0 {
                drawn.label("x - y").legend(|(px, py)| {
                    PathElement::new(vec![(px, py), (px + 20, py)], BLACK.mix(0.5))
                });
            }
        }

        chart
            .configure_series_labels()
            .border_style(BLACK.mix(0.2))
            .background_style(WHITE)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Axis bounds with a little headroom; flat data gets a fixed band so the
/// trace never sits on the panel edge.
fn padded_bounds(values: impl Iterator<Item = f32>) -> (f32, f32) {
    let (min, max) = values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() || (max - min).abs() < f32::EPSILON {
        let center = if min.is_finite() { min } else { 0.0 };
        (center - 1.0, center + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diff.png");

        let x = Signal::new(vec![0.0, 0.5, 1.0], 1, 44100).unwrap();
        let y = Signal::new(vec![0.0, 0.5, 1.2], 1, 44100).unwrap();

        render_diff_png(&x, &y, &path, PlotStyle::default()).unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0, "figure file must not be empty");
    }

    #[test]
    fn test_render_rejects_mismatched_signals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diff.png");

        let x = Signal::new(vec![0.0; 10], 1, 44100).unwrap();
        let y = Signal::new(vec![0.0; 9], 1, 44100).unwrap();

        let result = render_diff_png(&x, &y, &path, PlotStyle::default());
        assert!(matches!(result, Err(WavcmpError::ShapeMismatch { .. })));
        assert!(!path.exists(), "no figure on validation failure");
    }

    #[test]
    fn test_render_sine_pair() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sine_diff.png");

        let x = Signal::sine_wave(440.0, 0.01, 44100);
        let y = Signal::sine_wave(441.0, 0.01, 44100);

        render_diff_png(&x, &y, &path, PlotStyle::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_padded_bounds_flat_signal() {
        let (lo, hi) = padded_bounds([0.25f32; 4].into_iter());
        assert!(lo < 0.25 && hi > 0.25);
    }
}

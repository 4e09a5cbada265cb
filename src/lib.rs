pub mod config;
pub mod data_loading;
pub mod filtering;
pub mod output;
pub mod peaks;
pub mod preprocessing;
pub mod smoothing;
pub mod stats;

use anyhow::{ensure, Result};
use log::debug;

pub use peaks::Peak;

/// Parameters for one pipeline run.
///
/// The analysis block size is derived from the sample rate (one block is one
/// second of audio), so the sample rate must be even. Cutoff bins are already
/// converted from physical frequencies, see [`filtering::cutoff_bin`].
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub sample_rate: u32,
    pub lowpass_bin: usize,
    pub highpass_bin: usize,
    pub outlier_multiplier: f32,
    /// Averaging window in seconds; also the duration of one reduced-series
    /// sample.
    pub window_seconds: f32,
    /// Comparison half-width for peak detection on the reduced series.
    pub peak_window: usize,
}

/// Every intermediate series of a run, retained so the reporting collaborator
/// can plot each stage alongside the final peaks.
#[derive(Debug)]
pub struct PipelineResult {
    pub filtered: Vec<f32>,
    pub smoothed: Vec<f32>,
    pub reduced: Vec<f32>,
    pub peaks: Vec<Peak>,
}

/// Run the full extraction pipeline over a raw sample buffer.
///
/// Stages run strictly in sequence, each consuming the previous stage's
/// output in full: bandpass filter, outlier suppression, moving-average
/// smoothing, block averaging, peak detection.
pub fn run_pipeline(samples: &[i16], config: &PipelineConfig) -> Result<PipelineResult> {
    let t = config.sample_rate as usize;
    ensure!(
        config.window_seconds > 0.0,
        "averaging window must be positive, got {}",
        config.window_seconds
    );
    ensure!(
        config.peak_window > 0,
        "peak window must be positive, got {}",
        config.peak_window
    );
    let smooth_width = (config.window_seconds * config.sample_rate as f32) as usize;
    ensure!(
        smooth_width > 0,
        "averaging window of {} s spans no samples at {} Hz",
        config.window_seconds,
        config.sample_rate
    );

    let filtered = filtering::bandpass_filter(samples, t, config.lowpass_bin, config.highpass_bin)?;
    debug!("filtered {} samples", filtered.len());

    let suppressed = smoothing::suppress_outliers(&filtered, config.outlier_multiplier);
    let smoothed = smoothing::moving_average(&suppressed, smooth_width);
    debug!(
        "smoothed series has {} samples (window {})",
        smoothed.len(),
        smooth_width
    );

    let reduced = smoothing::block_average(&smoothed, config.window_seconds, config.sample_rate);
    debug!("reduced series has {} blocks", reduced.len());

    let peaks = peaks::detect_peaks(&reduced, config.peak_window);

    Ok(PipelineResult {
        filtered,
        smoothed,
        reduced,
        peaks,
    })
}

/// Estimate a pulse rate in beats per minute from the mean spacing of
/// detected peaks. Each reduced-series step spans `window_seconds`.
pub fn estimate_bpm(peaks: &[Peak], window_seconds: f32) -> Option<f32> {
    if peaks.len() < 2 {
        return None;
    }
    let spacings: Vec<f32> = peaks
        .windows(2)
        .map(|pair| (pair[1].index - pair[0].index) as f32)
        .collect();
    let mean_spacing = stats::mean(&spacings);
    if mean_spacing <= 0.0 {
        return None;
    }
    Some(60.0 / (mean_spacing * window_seconds))
}

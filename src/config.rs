use clap::Parser;
use std::path::PathBuf;

/// Extract heartbeat-like pulses from a mono WAV recording
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input WAV file (mono, 16-bit)
    #[arg(help = "Path to the input WAV file (mono, 16-bit)")]
    pub input_path: PathBuf,

    /// Lowpass cutoff as a frequency multiple (lower bins are removed)
    #[arg(long, default_value = "1.0")]
    pub lowpass: f32,

    /// Highpass cutoff as a frequency multiple (higher bins are removed)
    #[arg(long, default_value = "10.0")]
    pub highpass: f32,

    /// Standard-deviation multiplier for outlier suppression
    #[arg(long, default_value = "4.0")]
    pub outlier_multiplier: f32,

    /// Averaging window in seconds (one reduced-series sample per window)
    #[arg(long, default_value = "0.025")]
    pub window_seconds: f32,

    /// Comparison half-width for peak detection on the reduced series
    #[arg(long, default_value = "10")]
    pub peak_window: usize,

    /// Run the loud-segment clipper over the raw buffer before analysis
    #[arg(long)]
    pub declip: bool,

    /// Magnitude threshold for the loud-segment clipper
    #[arg(long, default_value = "110.0")]
    pub clip_threshold: f32,

    /// Block size in samples for the loud-segment clipper
    #[arg(long, default_value = "1000")]
    pub clip_block_size: usize,

    /// CSV output file prefix (e.g. /path/to/output/prefix)
    #[arg(long)]
    pub csv_output: Option<String>,
}

use anyhow::{ensure, Result};
use clap::Parser;
use log::{debug, info};

use pulse_decoder::config::Args;
use pulse_decoder::{data_loading, filtering, output, preprocessing, PipelineConfig};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let clip = data_loading::load_wav(&args.input_path)?;
    println!(
        "Loaded {} s of audio at {} Hz ({} frames)",
        clip.duration_secs, clip.sample_rate, clip.frame_count
    );
    ensure!(
        clip.duration_secs > 0,
        "input shorter than one second of audio"
    );

    let samples = if args.declip {
        let (declipped, count) =
            preprocessing::clip_loud_segments(&clip.samples, args.clip_block_size, args.clip_threshold);
        println!("Flattened {} loud segments before analysis", count);
        declipped
    } else {
        clip.samples.clone()
    };

    // Cutoff bins use the resolution implied by the full clip length.
    let lowpass_bin = filtering::cutoff_bin(args.lowpass, clip.sample_rate, samples.len());
    let highpass_bin = filtering::cutoff_bin(args.highpass, clip.sample_rate, samples.len());
    debug!(
        "cutoff bins: lowpass {} highpass {}",
        lowpass_bin, highpass_bin
    );

    let config = PipelineConfig {
        sample_rate: clip.sample_rate,
        lowpass_bin,
        highpass_bin,
        outlier_multiplier: args.outlier_multiplier,
        window_seconds: args.window_seconds,
        peak_window: args.peak_window,
    };

    let result = pulse_decoder::run_pipeline(&samples, &config)?;

    println!(
        "Reduced series: {} blocks of {} s",
        result.reduced.len(),
        args.window_seconds
    );
    println!("Detected {} peaks", result.peaks.len());
    for peak in &result.peaks {
        info!(
            "peak at block {} (t = {:.2} s, value {:.1})",
            peak.index,
            peak.index as f32 * args.window_seconds,
            peak.value
        );
    }

    match pulse_decoder::estimate_bpm(&result.peaks, args.window_seconds) {
        Some(bpm) => println!("Estimated pulse rate: {:.1} bpm", bpm),
        None => println!("Not enough peaks to estimate a pulse rate"),
    }

    if let Some(base_path) = &args.csv_output {
        output::write_reduced_to_csv(
            base_path,
            &result.reduced,
            &result.peaks,
            args.window_seconds,
        )?;
        output::write_smoothed_to_csv(
            base_path,
            &result.smoothed,
            clip.sample_rate,
            clip.duration_secs,
            args.window_seconds,
        )?;
    }

    Ok(())
}

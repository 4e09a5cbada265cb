use crate::Peak;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ReducedRow {
    block: usize,
    time_secs: f32,
    value: f32,
    is_peak: bool,
}

#[derive(Debug, Serialize)]
struct SmoothedRow {
    time_secs: f32,
    value: f32,
}

fn open_writer(base_path: &str, suffix: &str) -> Result<csv::Writer<std::fs::File>> {
    let path = Path::new(base_path);
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("results");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("csv");

    let full_path = dir.join(format!("{}_{}.{}", stem, suffix, ext));
    println!("Writing results to {}", full_path.display());
    let file = std::fs::File::create(full_path)?;
    Ok(csv::Writer::from_writer(file))
}

/// Write the reduced series with peak markers, one row per averaging block.
pub fn write_reduced_to_csv(
    base_path: &str,
    reduced: &[f32],
    peaks: &[Peak],
    window_seconds: f32,
) -> Result<()> {
    let mut writer = open_writer(base_path, "reduced")?;

    let mut peak_iter = peaks.iter().peekable();
    for (i, &value) in reduced.iter().enumerate() {
        let is_peak = matches!(peak_iter.peek(), Some(p) if p.index == i);
        if is_peak {
            peak_iter.next();
        }
        writer.serialize(ReducedRow {
            block: i,
            time_secs: i as f32 * window_seconds,
            value,
            is_peak,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the smoothed series against a sample-rate time axis.
///
/// The nominal axis spans `duration_secs - window_seconds` of audio, but the
/// smoothed series can come up one sample short of that after windowing. The
/// two are paired up to the shorter length, decided here rather than left to
/// surface as a mismatch downstream.
pub fn write_smoothed_to_csv(
    base_path: &str,
    smoothed: &[f32],
    sample_rate: u32,
    duration_secs: u32,
    window_seconds: f32,
) -> Result<()> {
    let mut writer = open_writer(base_path, "smoothed")?;

    let step = 1.0 / sample_rate as f32;
    let axis_len =
        ((duration_secs as f32 - window_seconds) * sample_rate as f32).max(0.0) as usize;
    let rows = axis_len.min(smoothed.len());

    for (i, &value) in smoothed[..rows].iter().enumerate() {
        writer.serialize(SmoothedRow {
            time_secs: i as f32 * step,
            value,
        })?;
    }

    writer.flush()?;
    Ok(())
}

use anyhow::{ensure, Context, Result};
use log::debug;
use std::path::Path;

/// A decoded mono audio clip.
///
/// Only whole seconds of audio are analyzed: `samples` is truncated to
/// `duration_secs * sample_rate` frames when the clip is loaded.
#[derive(Debug)]
pub struct AudioClip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub frame_count: usize,
    pub duration_secs: u32,
}

/// Load a mono 16-bit WAV file and truncate it to whole seconds.
pub fn load_wav(path: &Path) -> Result<AudioClip> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;

    let spec = reader.spec();
    ensure!(
        spec.channels == 1,
        "expected mono audio, got {} channels",
        spec.channels
    );
    ensure!(
        spec.bits_per_sample == 16 && spec.sample_format == hound::SampleFormat::Int,
        "expected 16-bit integer samples, got {}-bit {:?}",
        spec.bits_per_sample,
        spec.sample_format
    );

    let frame_count = reader.duration() as usize;
    let sample_rate = spec.sample_rate;
    ensure!(sample_rate > 0, "sample rate must be positive");
    let duration_secs = (frame_count / sample_rate as usize) as u32;

    let mut samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<i16>, _>>()
        .with_context(|| format!("Failed to decode samples from {}", path.display()))?;
    samples.truncate(duration_secs as usize * sample_rate as usize);

    debug!(
        "loaded {}: {} frames at {} Hz, analyzing {} s",
        path.display(),
        frame_count,
        sample_rate,
        duration_secs
    );

    Ok(AudioClip {
        samples,
        sample_rate,
        frame_count,
        duration_secs,
    })
}

use anyhow::{ensure, Result};
use log::debug;
use rustfft::{num_complex::Complex, FftPlanner};

/// Convert a physical frequency (or frequency multiple) to a cutoff bin index,
/// using the bin resolution implied by half the total sample count.
pub fn cutoff_bin(freq: f32, sample_rate: u32, total_samples: usize) -> usize {
    let resolution = sample_rate as f32 / (total_samples as f32 / 2.0);
    (freq / resolution) as usize
}

/// Check bandpass parameters before the transform loop runs.
///
/// The block size must be positive and even (the block is shifted in
/// half-block steps) and the cutoff bins must describe a non-empty band
/// within the half spectrum `[0, t/2]`.
pub fn validate_bandpass_params(t: usize, lowpass: usize, highpass: usize) -> Result<()> {
    ensure!(t > 0, "block size must be positive, got {}", t);
    ensure!(t % 2 == 0, "block size must be even, got {}", t);
    ensure!(
        lowpass < highpass,
        "lowpass bin {} must be below highpass bin {}",
        lowpass,
        highpass
    );
    ensure!(
        highpass <= t / 2,
        "highpass bin {} exceeds half spectrum {}",
        highpass,
        t / 2
    );
    Ok(())
}

/// Bandpass-filter a sample buffer with block-wise overlap-discard FFT
/// processing.
///
/// A sliding analysis block of `t` samples advances in half-block steps: the
/// second half of the previous block becomes the first half of the next, and
/// `t/2` fresh samples fill the second half. After zeroing every frequency
/// bin outside `[lowpass, highpass]` and transforming back, only the first
/// half of the reconstruction is kept; the second half carries the periodic
/// boundary artifacts of the transform and is discarded.
///
/// The output has the same length as the input but lags it by `t/2` samples
/// (the first written half-block reconstructs the zero-initialized block).
/// A trailing partial block of fewer than `t/2` samples is not processed and
/// its output positions stay zero.
pub fn bandpass_filter(da: &[i16], t: usize, lowpass: usize, highpass: usize) -> Result<Vec<f32>> {
    validate_bandpass_params(t, lowpass, highpass)?;

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(t);
    let ifft = planner.plan_fft_inverse(t);

    let half = t / 2;
    let mut result = vec![0.0f32; da.len()];
    let mut block = vec![0.0f32; t];
    let mut spectrum = vec![Complex::new(0.0f32, 0.0f32); t];

    let mut ind = 0;
    while ind + half <= da.len() {
        // Slide: previous second half becomes the new first half.
        block.copy_within(half..t, 0);
        for (dst, &src) in block[half..t].iter_mut().zip(&da[ind..ind + half]) {
            *dst = src as f32;
        }

        for (s, &x) in spectrum.iter_mut().zip(block.iter()) {
            *s = Complex::new(x, 0.0);
        }
        fft.process(&mut spectrum);

        // Zero bins outside the band. The input is real, so bin k and bin
        // t-k are conjugate mirrors and must be zeroed together to keep the
        // reconstruction real.
        for k in 0..t {
            let half_index = if k <= half { k } else { t - k };
            if half_index < lowpass || half_index > highpass {
                spectrum[k] = Complex::new(0.0, 0.0);
            }
        }

        ifft.process(&mut spectrum);

        // rustfft leaves the inverse unscaled; divide by t to restore the
        // round-trip identity. Keep only the artifact-free first half.
        let scale = 1.0 / t as f32;
        for (dst, s) in result[ind..ind + half].iter_mut().zip(spectrum.iter()) {
            *dst = s.re * scale;
        }

        ind += half;
    }

    if ind < da.len() {
        debug!(
            "bandpass: {} trailing samples form a partial block and stay zero",
            da.len() - ind
        );
    }

    Ok(result)
}

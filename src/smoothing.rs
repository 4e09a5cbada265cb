use crate::stats;
use log::debug;

/// Zero out samples lying more than `c` standard deviations from the mean.
///
/// Elements inside `[mean - c*sd, mean + c*sd]` pass through unchanged. For
/// sequences of length 0 or 1 the standard deviation is 0 and nothing is
/// suppressed.
pub fn suppress_outliers(data: &[f32], c: f32) -> Vec<f32> {
    let mean = stats::mean(data);
    let sd = stats::std_dev(data);
    let lower = mean - c * sd;
    let upper = mean + c * sd;

    let suppressed = data
        .iter()
        .map(|&x| if x >= lower && x <= upper { x } else { 0.0 })
        .collect::<Vec<f32>>();

    let count = suppressed
        .iter()
        .zip(data.iter())
        .filter(|(&s, &d)| s != d)
        .count();
    if count > 0 {
        debug!("suppressed {} outliers beyond {} sd", count, c);
    }

    suppressed
}

/// Simple moving average over windows of `width` samples.
///
/// Output length is `len - width + 1`; `output[i]` is the mean of
/// `data[i..i + width]`. Uses a cumulative sum in f64 so long sequences do
/// not accumulate drift. Input shorter than one window yields an empty
/// output rather than an error.
pub fn moving_average(data: &[f32], width: usize) -> Vec<f32> {
    if width == 0 || width > data.len() {
        return Vec::new();
    }

    let mut cumsum = Vec::with_capacity(data.len() + 1);
    cumsum.push(0.0f64);
    let mut running = 0.0f64;
    for &x in data {
        running += x as f64;
        cumsum.push(running);
    }

    (0..=data.len() - width)
        .map(|i| ((cumsum[i + width] - cumsum[i]) / width as f64) as f32)
        .collect()
}

/// Reduce a series by averaging non-overlapping time blocks of `win` seconds
/// at `t` samples per second.
///
/// The iteration count is `ceil((len / t) / win)`, tied to the length of the
/// series handed in, so the final iterations may slice a partial or empty
/// range; those still emit a mean (0 for an empty slice). Block boundaries
/// are `trunc(win * t * i)`, matching fractional block sizes like 0.025 s at
/// 44100 Hz.
pub fn block_average(res: &[f32], win: f32, t: u32) -> Vec<f32> {
    let l = res.len();
    let win_p = win as f64 * t as f64;
    let iterations = ((l as f64 / t as f64) / win as f64).ceil() as usize;

    let mut result = Vec::with_capacity(iterations);
    for i in 0..iterations {
        let start = (win_p * i as f64) as usize;
        let end = ((win_p * (i + 1) as f64) as usize).min(l);
        let buf = if start < end { &res[start..end] } else { &[][..] };
        result.push(stats::mean(buf));
    }
    result
}

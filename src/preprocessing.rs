use crate::stats;
use log::info;

/// Flag abnormally loud blocks and flatten them to their average magnitude.
///
/// The buffer is split into non-overlapping blocks of `block_size` samples
/// (the trailing block may be shorter). For each block the sample magnitudes
/// are taken, along with their average and maximum; when the maximum exceeds
/// `threshold`, every sample in the block except the maximum's position is
/// replaced by the average magnitude, sign discarded. Returns the modified
/// buffer and the number of affected blocks.
///
/// This is a standalone diagnostic/preprocessing tool, not part of the main
/// pipeline.
pub fn clip_loud_segments(data: &[i16], block_size: usize, threshold: f32) -> (Vec<i16>, usize) {
    let mut result = data.to_vec();
    if block_size == 0 {
        return (result, 0);
    }

    let mut count = 0;
    let mut start = 0;
    while start < data.len() {
        let end = (start + block_size).min(data.len());
        let magnitudes: Vec<f32> = data[start..end].iter().map(|&x| (x as f32).abs()).collect();
        let avg = stats::mean(&magnitudes);
        let (max_offset, max_val) = magnitudes
            .iter()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |(bi, bv), (i, &v)| {
                if v > bv {
                    (i, v)
                } else {
                    (bi, bv)
                }
            });

        if max_val > threshold {
            count += 1;
            let max_index = start + max_offset;
            for j in start..end {
                if j != max_index {
                    result[j] = avg as i16;
                }
            }
        }

        start = end;
    }

    info!("clipped {} loud segments above {}", count, threshold);
    (result, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_buffer_is_untouched() {
        let data = vec![10i16, -20, 30, -40, 50, -60];
        let (out, count) = clip_loud_segments(&data, 3, 110.0);
        assert_eq!(out, data);
        assert_eq!(count, 0);
    }

    #[test]
    fn loud_block_is_flattened_except_at_maximum() {
        let data = vec![10i16, -200, 30, 5, 5, 5];
        let (out, count) = clip_loud_segments(&data, 3, 110.0);
        assert_eq!(count, 1);
        // avg magnitude of first block = (10 + 200 + 30) / 3 = 80.
        assert_eq!(out[0], 80);
        assert_eq!(out[1], -200); // the maximum keeps its original value
        assert_eq!(out[2], 80);
        // Second block is quiet.
        assert_eq!(&out[3..], &[5, 5, 5]);
    }

    #[test]
    fn replacement_discards_sign() {
        let data = vec![-50i16, -150, -50];
        let (out, _) = clip_loud_segments(&data, 3, 110.0);
        // Magnitudes average to (50 + 150 + 50) / 3 = 83, written unsigned.
        assert_eq!(out[0], 83);
        assert_eq!(out[2], 83);
        assert_eq!(out[1], -150);
    }

    #[test]
    fn trailing_partial_block_is_processed() {
        let data = vec![0i16, 0, 0, 0, 300, 10];
        let (out, count) = clip_loud_segments(&data, 4, 110.0);
        assert_eq!(count, 1);
        assert_eq!(out[4], 300);
        // avg magnitude of [300, 10] = 155.
        assert_eq!(out[5], 155);
    }

    #[test]
    fn zero_block_size_is_a_no_op() {
        let data = vec![500i16, -500];
        let (out, count) = clip_loud_segments(&data, 0, 110.0);
        assert_eq!(out, data);
        assert_eq!(count, 0);
    }
}

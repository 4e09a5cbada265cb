/// Arithmetic mean of a slice. An empty slice has mean 0 by convention so that
/// block averaging over an empty trailing slice never faults.
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|&x| x as f64).sum();
    (sum / values.len() as f64) as f32
}

/// Population standard deviation. Zero for slices of length 0 or 1.
pub fn std_dev(values: &[f32]) -> f32 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values) as f64;
    let variance: f64 = values
        .iter()
        .map(|&x| {
            let diff = x as f64 - m;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt() as f32
}

/// Percentage change from `start` to `current`.
///
/// A change that comes out exactly 0 is nudged to 1e-9 and a zero start point
/// yields 1e-4, so downstream ratio arithmetic never divides by zero.
pub fn percent_change(start: f32, current: f32) -> f32 {
    if start == 0.0 {
        return 0.0001;
    }
    let x = ((current - start) / start.abs()) * 100.0;
    if x == 0.0 {
        0.000000001
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn std_dev_degenerate_inputs() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[42.0]), 0.0);
    }

    #[test]
    fn std_dev_is_population() {
        // Population sd of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&data) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn percent_change_basic() {
        assert!((percent_change(100.0, 150.0) - 50.0).abs() < 1e-6);
        assert!((percent_change(-100.0, -150.0) + 50.0).abs() < 1e-6);
    }

    #[test]
    fn percent_change_never_returns_zero() {
        assert_eq!(percent_change(0.0, 5.0), 0.0001);
        assert_eq!(percent_change(3.0, 3.0), 0.000000001);
    }
}

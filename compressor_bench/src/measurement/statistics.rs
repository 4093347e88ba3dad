//!
//! The timing statistics.
//!

///
/// Returns the median of `samples`, or `None` if there are none.
///
/// For an even number of samples, the mean of the two middle ones is returned.
///
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[middle])
    } else {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn empty() {
        assert_eq!(super::median(&[]), None);
    }

    #[test]
    fn single() {
        assert_eq!(super::median(&[0.25]), Some(0.25));
    }

    #[test]
    fn identical_samples() {
        for count in 1..=9 {
            let samples = vec![1.5; count];
            assert_eq!(super::median(samples.as_slice()), Some(1.5));
        }
    }

    #[test]
    fn odd_resists_outliers() {
        assert_eq!(super::median(&[0.9, 0.1, 100.0, 0.3, 0.2]), Some(0.3));
    }

    #[test]
    fn even_takes_middle_mean() {
        assert_eq!(super::median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }
}

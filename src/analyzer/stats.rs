//! Descriptive statistics over present (non-missing) values.
//!
//! Every function returns `None` for an empty input instead of NaN.

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (N denominator). A single value gives 0.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_std_dev_is_population() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(std_dev(&[20.0, 24.0]), Some(2.0));
        assert_eq!(std_dev(&[7.5]), Some(0.0));
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(max(&[3.0, -1.0, 8.5]), Some(8.5));
        assert_eq!(min(&[3.0, -1.0, 8.5]), Some(-1.0));
        assert_eq!(max(&[]), None);
        assert_eq!(min(&[]), None);
    }
}

use crate::domain::ports::LoadTimeSource;
use rand::Rng;

/// Uniform draw from `[0.5, 2.5)` seconds, rounded to two decimals.
/// Nothing about the page is measured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLoadTime;

impl LoadTimeSource for SimulatedLoadTime {
    fn sample_seconds(&self) -> f64 {
        let seconds: f64 = rand::rng().random_range(0.5..2.5);
        (seconds * 100.0).round() / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLoadTime(pub f64);

impl LoadTimeSource for FixedLoadTime {
    fn sample_seconds(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_load_time_range() {
        let source = SimulatedLoadTime;
        for _ in 0..200 {
            let seconds = source.sample_seconds();
            assert!((0.5..=2.5).contains(&seconds), "out of range: {}", seconds);
            assert_eq!((seconds * 100.0).round() / 100.0, seconds);
        }
    }

    #[test]
    fn test_fixed_load_time() {
        assert_eq!(FixedLoadTime(1.25).sample_seconds(), 1.25);
    }
}

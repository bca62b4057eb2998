//! probdist Core - Fundamental types
//!
//! This crate provides the core types used throughout probdist:
//! - `Distribution`: mean, standard deviation and raw samples
//! - `SampleStatistics`: mean/standard deviation over any sample list
//! - `StatsError`: structured errors with machine-readable codes
//! - `Settings`: tunable thresholds

mod distribution;
mod error;
mod settings;

pub use distribution::{Distribution, SampleStatistics};
pub use error::{codes, ErrorReport, Result, StatsError};
pub use settings::{Settings, DEFAULT_PROBABILITY_TOLERANCE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Distribution, Result, SampleStatistics, Settings, StatsError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod distribution_tests {
        use super::*;

        fn with_samples(samples: &[f64]) -> Distribution {
            let mut d = Distribution::default();
            d.load_samples(samples.iter().copied()).unwrap();
            d
        }

        #[test]
        fn test_default_moments() {
            let d = Distribution::default();
            assert_eq!(d.mean(), 0.0);
            assert_eq!(d.stdev(), 1.0);
            assert!(d.samples().is_empty());
        }

        #[test]
        fn test_load_keeps_moments() {
            let d = with_samples(&[1.0, 2.0, 3.0]);
            assert_eq!(d.samples(), &[1.0, 2.0, 3.0]);
            assert_eq!(d.mean(), 0.0);
        }

        #[test]
        fn test_load_rejects_non_finite() {
            let mut d = Distribution::default();
            let err = d.load_samples([1.0, f64::NAN]).unwrap_err();
            assert_eq!(err.code(), codes::DOMAIN_ERROR);
            assert!(d.samples().is_empty());
        }

        #[test]
        fn test_compute_mean() {
            let mut d = with_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]);
            let m = d.compute_mean_from_samples().unwrap();
            assert!((m - 3.0).abs() < 1e-12);
            assert_eq!(d.mean(), m);
        }

        #[test]
        fn test_compute_mean_empty() {
            let mut d = Distribution::default();
            let err = d.compute_mean_from_samples().unwrap_err();
            assert!(matches!(err, StatsError::Division(_)));
            assert_eq!(d.mean(), 0.0);
        }

        #[test]
        fn test_population_std_dev() {
            let mut d = with_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
            let sd = d.compute_standard_deviation_from_samples(false).unwrap();
            assert!((sd - 2.0).abs() < 1e-12);
            assert_eq!(d.stdev(), sd);
        }

        #[test]
        fn test_sample_std_dev() {
            let mut d = with_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
            let sd = d.compute_standard_deviation_from_samples(true).unwrap();
            assert!((sd - 2.138089935299395).abs() < 1e-10);
        }

        #[test]
        fn test_sample_std_dev_needs_two() {
            let mut d = with_samples(&[4.0]);
            assert!(matches!(
                d.compute_standard_deviation_from_samples(true),
                Err(StatsError::Division(_))
            ));
            // population form is fine with one sample
            assert_eq!(d.compute_standard_deviation_from_samples(false).unwrap(), 0.0);
        }

        #[test]
        fn test_std_dev_empty() {
            let d = Distribution::default();
            assert!(matches!(d.sample_std_dev(false), Err(StatsError::Division(_))));
        }

        #[test]
        fn test_serde_roundtrip_without_data_field() {
            let d: Distribution = serde_json::from_str(r#"{"mean":2.5,"stdev":0.5}"#).unwrap();
            assert_eq!(d.mean(), 2.5);
            assert!(d.samples().is_empty());
        }
    }

    mod settings_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let s = Settings::default();
            assert_eq!(s.probability_tolerance, DEFAULT_PROBABILITY_TOLERANCE);
            assert!(s.probabilities_match(0.5, 0.5 + 1e-12));
            assert!(!s.probabilities_match(0.5, 0.4));
        }

        #[test]
        fn test_from_json_partial() {
            let s = Settings::from_json("{}").unwrap();
            assert_eq!(s, Settings::default());

            let s = Settings::from_json(r#"{"probability_tolerance": 0.01}"#).unwrap();
            assert!(s.probabilities_match(0.5, 0.505));
        }

        #[test]
        fn test_from_json_invalid() {
            assert!(Settings::from_json("not json").is_err());
            let err = Settings::from_json(r#"{"probability_tolerance": -1.0}"#).unwrap_err();
            assert_eq!(err.code(), codes::DOMAIN_ERROR);
        }

        #[test]
        fn test_builder() {
            let s = Settings::new().with_probability_tolerance(0.0);
            assert!(s.validate().is_ok());
            assert!(!s.probabilities_match(0.1 + 0.2, 0.3));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_codes() {
            assert_eq!(StatsError::empty_samples("mean").code(), codes::DIV_ZERO);
            assert_eq!(StatsError::domain("p").code(), codes::DOMAIN_ERROR);
            assert_eq!(StatsError::precondition("p").code(), codes::PRECONDITION);
        }

        #[test]
        fn test_error_display() {
            let err = StatsError::too_few_samples("sample standard deviation", 2, 1);
            let display = format!("{}", err);
            assert!(display.starts_with("Division by zero"));
            assert!(display.contains("got 1"));
        }

        #[test]
        fn test_report_serializes() {
            let report = StatsError::precondition("p values are not equal").report();
            let json = serde_json::to_value(&report).unwrap();
            assert_eq!(json["code"], "PRECONDITION");
            assert!(format!("{}", report).contains("[PRECONDITION]"));
        }
    }
}

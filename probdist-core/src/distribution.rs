//! Base distribution record and shared sample statistics
//!
//! `Distribution` holds a mean, a standard deviation and the raw samples they
//! may have been computed from. Parametric variants compose it and pick up
//! the sample statistics through [`SampleStatistics`].

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sample statistics for anything that exposes an ordered list of samples
pub trait SampleStatistics {
    fn samples(&self) -> &[f64];

    /// Arithmetic mean of the samples
    fn sample_mean(&self) -> Result<f64> {
        let data = self.samples();
        if data.is_empty() {
            return Err(StatsError::empty_samples("mean"));
        }
        Ok(data.iter().sum::<f64>() / data.len() as f64)
    }

    /// Standard deviation of the samples.
    ///
    /// With `is_sample` set the sum of squares is divided by `n - 1`
    /// (Bessel's correction), otherwise by `n`.
    fn sample_std_dev(&self, is_sample: bool) -> Result<f64> {
        let data = self.samples();
        let n = data.len();
        if n == 0 {
            return Err(StatsError::empty_samples("standard deviation"));
        }
        if is_sample && n < 2 {
            return Err(StatsError::too_few_samples("sample standard deviation", 2, n));
        }

        let m = self.sample_mean()?;
        let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
        let divisor = if is_sample { (n - 1) as f64 } else { n as f64 };
        Ok((ss / divisor).sqrt())
    }
}

/// Generic distribution: mean, standard deviation and loaded samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    mean: f64,
    stdev: f64,
    #[serde(default)]
    data: Vec<f64>,
}

impl Default for Distribution {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Distribution {
    pub fn new(mean: f64, stdev: f64) -> Self {
        Self {
            mean,
            stdev,
            data: Vec::new(),
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// Overwrite mean and standard deviation with explicit parameters
    pub fn set_moments(&mut self, mean: f64, stdev: f64) {
        self.mean = mean;
        self.stdev = stdev;
    }

    /// Replace the sample list.
    ///
    /// Mean and standard deviation are left untouched until one of the
    /// `compute_*` methods is called.
    pub fn load_samples<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = f64>,
    {
        let data: Vec<f64> = samples.into_iter().collect();
        if let Some(pos) = data.iter().position(|x| !x.is_finite()) {
            return Err(StatsError::domain(format!(
                "sample {} is not a finite number: {}",
                pos, data[pos]
            )));
        }
        debug!(count = data.len(), "loaded samples");
        self.data = data;
        Ok(())
    }

    /// Compute the mean from the samples and store it
    pub fn compute_mean_from_samples(&mut self) -> Result<f64> {
        self.mean = self.sample_mean()?;
        Ok(self.mean)
    }

    /// Compute the standard deviation from the samples and store it
    pub fn compute_standard_deviation_from_samples(&mut self, is_sample: bool) -> Result<f64> {
        self.stdev = self.sample_std_dev(is_sample)?;
        Ok(self.stdev)
    }
}

impl SampleStatistics for Distribution {
    fn samples(&self) -> &[f64] {
        &self.data
    }
}

//! Binomial distribution: `n` independent trials with success probability `p`.
//!
//! Mean and standard deviation are derived from `(n, p)` rather than from
//! samples. Loaded 0/1 samples can be used to re-estimate `(n, p)` with
//! [`Binomial::replace_stats_with_data`].

use crate::helpers::binom_pmf_f64;
use probdist_core::{Distribution, Result, SampleStatistics, Settings, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Binomial distribution `B(n, p)`
///
/// # Invariants
/// - `p` is finite and in `[0, 1]`
/// - `mean = n·p` and `stdev = sqrt(n·p·(1−p))` after every parameter change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BinomialRepr")]
pub struct Binomial {
    base: Distribution,
    p: f64,
    n: u64,
}

/// Serialized form. Stored moments are ignored and re-derived from `(n, p)`.
#[derive(Deserialize)]
struct BinomialRepr {
    #[serde(default)]
    base: Option<Distribution>,
    p: f64,
    n: u64,
}

impl TryFrom<BinomialRepr> for Binomial {
    type Error = StatsError;

    fn try_from(raw: BinomialRepr) -> Result<Self> {
        let mut b = Binomial::new(raw.p, raw.n)?;
        if let Some(base) = raw.base {
            b.load_samples(base.samples().iter().copied())?;
        }
        Ok(b)
    }
}

fn check_probability(p: f64) -> Result<()> {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return Err(StatsError::domain(format!("p must be in [0, 1], got {}", p)));
    }
    Ok(())
}

impl Binomial {
    /// Creates `B(n, p)`.
    ///
    /// # Errors
    /// `Domain` if `p` is NaN or outside `[0, 1]`.
    pub fn new(p: f64, n: u64) -> Result<Self> {
        check_probability(p)?;
        let mut b = Self {
            base: Distribution::default(),
            p,
            n,
        };
        b.refresh_moments();
        Ok(b)
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn mean(&self) -> f64 {
        self.base.mean()
    }

    pub fn stdev(&self) -> f64 {
        self.base.stdev()
    }

    pub fn set_trials(&mut self, n: u64) {
        self.n = n;
        self.refresh_moments();
    }

    pub fn set_probability(&mut self, p: f64) -> Result<()> {
        check_probability(p)?;
        self.p = p;
        self.refresh_moments();
        Ok(())
    }

    // Only called once `p` has passed check_probability.
    fn refresh_moments(&mut self) {
        let nf = self.n as f64;
        self.base
            .set_moments(nf * self.p, (nf * self.p * (1.0 - self.p)).sqrt());
    }

    /// Mean from the current parameters: `n·p`
    pub fn calculate_mean(&mut self) -> f64 {
        let mean = self.n as f64 * self.p;
        self.base.set_moments(mean, self.base.stdev());
        mean
    }

    /// Standard deviation from the current parameters: `sqrt(n·p·(1−p))`
    pub fn calculate_stdev(&mut self) -> Result<f64> {
        check_probability(self.p)?;
        let stdev = (self.n as f64 * self.p * (1.0 - self.p)).sqrt();
        self.base.set_moments(self.base.mean(), stdev);
        Ok(stdev)
    }

    /// Replace the loaded samples. See [`Distribution::load_samples`].
    pub fn load_samples<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = f64>,
    {
        self.base.load_samples(samples)
    }

    /// Re-estimate `n` and `p` from loaded 0/1 samples.
    ///
    /// `n` becomes the sample count and `p` the fraction of ones; mean and
    /// standard deviation are then re-derived. Returns `(p, n)`.
    ///
    /// # Errors
    /// - `Division` if no samples are loaded
    /// - `Domain` if any sample is neither 0 nor 1
    pub fn replace_stats_with_data(&mut self) -> Result<(f64, u64)> {
        let data = self.base.samples();
        if data.is_empty() {
            return Err(StatsError::empty_samples("replace_stats_with_data()"));
        }
        if let Some(bad) = data.iter().find(|&&x| x != 0.0 && x != 1.0) {
            return Err(StatsError::domain(format!(
                "binomial samples must be 0 or 1, got {}",
                bad
            )));
        }

        let n = data.len() as u64;
        let p = self.base.sample_mean()?;
        self.n = n;
        self.p = p;
        self.refresh_moments();

        debug!(n, p, "re-estimated binomial parameters from samples");
        Ok((p, n))
    }

    /// Probability mass at `k` successes: `C(n,k)·p^k·(1−p)^(n−k)`.
    ///
    /// # Errors
    /// `Domain` if `k > n`.
    pub fn pdf(&self, k: u64) -> Result<f64> {
        if k > self.n {
            return Err(StatsError::domain(format!(
                "pdf() requires 0 ≤ k ≤ n, got k={} n={}",
                k, self.n
            )));
        }
        Ok(binom_pmf_f64(k, self.n, self.p))
    }

    /// Cumulative probability `P(X ≤ k)`. Any `k ≥ n` gives 1.
    pub fn cdf(&self, k: u64) -> f64 {
        if k >= self.n {
            return 1.0;
        }
        let total: f64 = (0..=k).map(|i| binom_pmf_f64(i, self.n, self.p)).sum();
        total.clamp(0.0, 1.0)
    }

    /// Bar-chart coordinates: `x = 0..n-1` and `y = pdf(x)`
    pub fn pmf_points(&self) -> (Vec<u64>, Vec<f64>) {
        let xs: Vec<u64> = (0..self.n).collect();
        let ys = xs.iter().map(|&k| binom_pmf_f64(k, self.n, self.p)).collect();
        (xs, ys)
    }

    /// Sum of two binomials with equal `p`, compared with the default tolerance.
    ///
    /// # Errors
    /// `Precondition` if the probabilities differ.
    pub fn add(&self, other: &Binomial) -> Result<Binomial> {
        self.add_with(other, &Settings::default())
    }

    /// Sum of two binomials with equal `p` under the given settings
    pub fn add_with(&self, other: &Binomial, settings: &Settings) -> Result<Binomial> {
        if !settings.probabilities_match(self.p, other.p) {
            warn!(left = self.p, right = other.p, "refusing to add binomials with unequal p");
            return Err(StatsError::precondition(format!(
                "p values are not equal: {} vs {}",
                self.p, other.p
            )));
        }
        let n = self.n.checked_add(other.n).ok_or_else(|| {
            StatsError::domain(format!("trial count overflow: {} + {}", self.n, other.n))
        })?;
        debug!(n, p = self.p, "added binomial distributions");
        Binomial::new(self.p, n)
    }

    /// One-line summary, e.g. `mean 5, standard deviation 4.5, p 0.8, n 20`
    pub fn describe(&self) -> String {
        format!(
            "mean {}, standard deviation {}, p {:.1}, n {}",
            self.mean(),
            self.stdev(),
            self.p,
            self.n
        )
    }
}

impl SampleStatistics for Binomial {
    fn samples(&self) -> &[f64] {
        self.base.samples()
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

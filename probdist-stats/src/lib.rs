//! probdist Statistics
//!
//! Parametric distributions composed over `probdist_core::Distribution`.
//! Fallible operations return `probdist_core::Result` and never panic.

mod helpers;
pub mod distributions;

pub use distributions::Binomial;
pub use probdist_core::{Distribution, Result, SampleStatistics, Settings, StatsError};

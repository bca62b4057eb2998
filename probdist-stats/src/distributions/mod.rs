//! Parametric distributions built on the base `Distribution` record

pub mod binomial;

pub use binomial::Binomial;

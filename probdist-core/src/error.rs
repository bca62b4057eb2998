//! Structured errors for distribution computations
//!
//! Every failure is a value returned to the caller. Nothing is retried or
//! recovered internally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const PRECONDITION: &str = "PRECONDITION";
}

/// Error type for distribution operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A statistic was requested over too few samples
    #[error("Division by zero: {0}")]
    Division(String),

    /// A parameter or argument lies outside its valid range
    #[error("Domain error: {0}")]
    Domain(String),

    /// Operands do not satisfy the operation's precondition
    #[error("Precondition failed: {0}")]
    Precondition(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, StatsError>;

impl StatsError {
    // ========== Common Error Constructors ==========

    pub fn empty_samples(what: &str) -> Self {
        Self::Division(format!("{} requires at least one sample", what))
    }

    pub fn too_few_samples(what: &str, min: usize, got: usize) -> Self {
        Self::Division(format!("{} requires at least {} samples, got {}", what, min, got))
    }

    pub fn domain(details: impl Into<String>) -> Self {
        Self::Domain(details.into())
    }

    pub fn precondition(details: impl Into<String>) -> Self {
        Self::Precondition(details.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Division(_) => codes::DIV_ZERO,
            Self::Domain(_) => codes::DOMAIN_ERROR,
            Self::Precondition(_) => codes::PRECONDITION,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Division(_) => "Load samples before computing statistics",
            Self::Domain(_) => "Check that parameters lie within the documented range",
            Self::Precondition(_) => "Only distributions with equal p can be added",
        }
    }

    /// Serializable snapshot of this error
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: Some(self.suggestion().to_string()),
        }
    }
}

/// Structured error report for machine consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

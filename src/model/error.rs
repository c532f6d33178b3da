//! Error types for balcalc.
//!
//! The geometry core never fails: degenerate numbers clamp to empty or zero
//! results. Errors exist only at the edges of the program.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ParameterError`] - Rejected user input (form edits, CLI values)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal failures
//!   - `serde_json::Error` / `std::io::Error` - Report output failures
//!
//! # Recovery Strategy
//!
//! Parameter errors are **non-fatal** inside the TUI: the edit is dropped, the
//! previous parameter set stays in effect, and the message is shown in the
//! status bar. Everything else is fatal and propagates to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// A command line value was rejected.
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] ParameterError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// The terminal UI failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),

    /// The JSON report could not be encoded.
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    /// The report could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected calculator input.
///
/// Each variant names the offending field so the status bar can say which
/// input to fix.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    /// A length that must be strictly positive was zero, negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use balcalc::model::error::ParameterError;
    ///
    /// let err = ParameterError::NonPositive { field: "span", value: -3.0 };
    /// assert!(err.to_string().contains("span must be greater than zero"));
    /// ```
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A value that must not be negative was negative or not finite.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Typed text did not parse as a finite number.
    #[error("{field}: '{input}' is not a number")]
    NotANumber {
        /// Field name.
        field: &'static str,
        /// Raw text as typed.
        input: String,
    },

    /// The layout would place more items than the shell is willing to draw.
    #[error("layout would place {count} balusters (limit {limit})")]
    TooManyItems {
        /// Items the layout engine would produce.
        count: usize,
        /// Upper bound enforced by the shell.
        limit: usize,
    },
}

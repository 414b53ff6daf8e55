//! Error types for freehand operations.
//!
//! The geometric transforms never fail; these errors come from converting
//! loosely-typed input and from validating caller-supplied options.

use thiserror::Error;

/// Errors produced while accepting input points or stroke options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FreehandError {
    /// A raw input point did not have 2 (`x, y`) or 3 (`x, y, pressure`) components.
    #[error("input point must have 2 or 3 components, got {len}")]
    InvalidPointArity {
        /// Number of components supplied.
        len: usize,
    },

    /// A stroke option is out of its accepted range.
    #[error("invalid value {value} for option `{option}`")]
    InvalidOption {
        /// Name of the offending option.
        option: &'static str,
        /// The rejected value.
        value: f64,
    },
}

//! Structural errors raised by the catalog, model, and constraint builder.
//!
//! Search outcomes (solved, infeasible, cancelled) are not errors; they are
//! reported through [`SolveStatus`](crate::selection::SolveStatus).

use thiserror::Error;

/// Errors returned by mutating operations and by constraint construction.
///
/// None of these leave the solver in a partially-updated state: the
/// operation that fails has no effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// A strategy vector's length disagrees with the model dimensions.
    #[error("strategy {id}: {what} has {actual} entries, model expects {expected}")]
    DimensionMismatch {
        /// Offending strategy id.
        id: u32,
        /// Which vector mismatched (`"cost"` or `"utility"`).
        what: &'static str,
        /// Length required by the model.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// The model has never been sized with `refresh`.
    #[error("model is not initialized; call refresh(resource_count, class_count) first")]
    Uninitialized,

    /// A resource or class index is outside the current dimensions.
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// `"resource"` or `"class"`.
        what: &'static str,
        /// Requested index.
        index: usize,
        /// Current dimension.
        len: usize,
    },

    /// The scaling factor is not a finite positive number.
    #[error("scaling factor must be finite and positive, got {0}")]
    InvalidScaling(f64),

    /// An input Scalar is NaN or infinite.
    #[error("{what} is not finite: {value}")]
    NonFiniteValue {
        /// Description of the rejected input.
        what: String,
        /// The rejected value.
        value: f64,
    },

    /// A scaled coefficient or a row's worst-case activity does not fit in `i64`.
    #[error("integer overflow while scaling {0}; lower the scaling factor")]
    CoefficientOverflow(String),

    /// The search configuration failed validation.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SelectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = SelectionError::DimensionMismatch {
            id: 3,
            what: "cost",
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "strategy 3: cost has 1 entries, model expects 2"
        );
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = SelectionError::IndexOutOfRange {
            what: "class",
            index: 4,
            len: 2,
        };
        assert_eq!(err.to_string(), "class index 4 out of range (len 2)");
    }
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Error types shared across the search strategies.
//!
//! Evaluation errors are data-model violations (the caller handed the
//! engine values outside the table domain); they are fatal for the current
//! call and never produce partial results. Worker failures are surfaced
//! verbatim instead of being swallowed into an empty result set.

/// The error type for the combat-power evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The total attribute sum of a combination exceeds the domain of the
    /// dense total-power table.
    TotalOutOfRange {
        /// The offending total attribute sum.
        total: i32,
    },
    /// A combination carried more distinct attribute ids than the
    /// fixed-capacity accumulator can hold.
    AttrCapacityExceeded {
        /// The accumulator capacity that was exhausted.
        capacity: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TotalOutOfRange { total } => {
                write!(
                    f,
                    "total attribute sum {} is outside the total-power table domain",
                    total
                )
            }
            Self::AttrCapacityExceeded { capacity } => {
                write!(
                    f,
                    "combination has more than {} distinct attribute ids",
                    capacity
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// The error type for a whole optimization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// A combination could not be evaluated.
    Evaluation(EvalError),
    /// A worker thread panicked or disappeared before delivering its
    /// batch.
    WorkerPanicked,
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evaluation(error) => write!(f, "evaluation failed: {}", error),
            Self::WorkerPanicked => write!(f, "a worker thread failed before returning its batch"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation(error) => Some(error),
            Self::WorkerPanicked => None,
        }
    }
}

impl From<EvalError> for SolverError {
    #[inline]
    fn from(error: EvalError) -> Self {
        Self::Evaluation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_mention_the_offending_value() {
        let error = EvalError::TotalOutOfRange { total: 130 };
        assert!(format!("{}", error).contains("130"));

        let error = EvalError::AttrCapacityExceeded { capacity: 20 };
        assert!(format!("{}", error).contains("20"));
    }

    #[test]
    fn test_solver_error_wraps_eval_error() {
        let inner = EvalError::TotalOutOfRange { total: 121 };
        let outer = SolverError::from(inner);
        assert_eq!(outer, SolverError::Evaluation(inner));

        use std::error::Error;
        assert!(outer.source().is_some());
        assert!(SolverError::WorkerPanicked.source().is_none());
    }
}

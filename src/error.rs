use std::fmt;

use thiserror::Error;

use crate::Complex;

/// The top-level error type for this crate.
///
/// Only hard failures are represented here. Numeric degeneracies (`0/0`,
/// `∞·0`, ...) are carried as NaN or infinite [`Complex`] values, and a root
/// finder that runs out of iterations reports a [`ConvergenceWarning`]
/// instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A string could not be parsed as a complex number
    #[error("invalid complex number {input:?}: {reason}")]
    Format { input: String, reason: &'static str },

    /// An argument was outside of the domain of the operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        Self::Format {
            input: input.to_owned(),
            reason,
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Soft failure of an iterative root finder.
///
/// The root finder hit its iteration cap before meeting the convergence
/// criterion. `estimate` is the best value available at that point and has
/// been used as the root anyway. A polishing run that fails keeps the
/// deflated root as `estimate` and is reported with `polishing` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergenceWarning {
    /// Position of the affected root in extraction order
    pub root_index: usize,
    pub iterations: usize,
    pub estimate: Complex,
    /// `true` if the failure happened while polishing a deflated root
    pub polishing: bool,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = if self.polishing { " while polishing" } else { "" };
        write!(
            f,
            "root {} did not converge{stage} within {} iterations, returning estimate {}",
            self.root_index, self.iterations, self.estimate
        )
    }
}

//! Root finding for complex polynomials.
//!
//! Polynomials of degree 1 to 3 are solved in closed form, higher degrees use
//! Laguerre's method with deflation. Exactly-zero low-order coefficients are
//! stripped beforehand and contribute roots at the origin.

use crate::{
    complex::array::{self, sort_by_real},
    error::Error,
    util::doc_macros::{errors_no_roots, warns_no_converge},
    Complex, ComplexPoly, ConvergenceWarning, Result,
};

mod closed_form;
pub use closed_form::{cubic, linear, quadratic};
mod laguerre;
pub use laguerre::{laguerre, laguerre_all, LaguerreOutcome, DEFAULT_CYCLE_BREAK_INTERVAL};

/// The roots found by a [`RootFinder`], together with any soft failures
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// Roots in ascending order of real part, ties ordered by imaginary part
    pub roots: Vec<Complex>,

    /// One entry per root that was returned as a best estimate because the
    /// iteration cap was reached
    pub warnings: Vec<ConvergenceWarning>,
}

impl Solution {
    /// `true` if every root met the convergence criterion
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Configurable root finder.
///
/// The default configuration polishes roots, starts every search at the
/// origin, breaks limit cycles every 1000 iterations and logs a warning for
/// every root that does not converge.
///
/// ```
/// use complex_poly::{complex, poly, roots::RootFinder};
///
/// let p = poly![1.0, 0.0, 0.0, 0.0, 1.0];
/// let solution = RootFinder::new()
///     .initial_estimate(complex!(0.5, 0.5))
///     .messages(false)
///     .solve(&p)
///     .unwrap();
/// assert_eq!(solution.roots.len(), 4);
/// assert!(solution.is_converged());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootFinder {
    polish: bool,
    initial_estimate: Complex,
    cycle_break_interval: usize,
    messages: bool,
}

impl Default for RootFinder {
    fn default() -> Self {
        Self {
            polish: true,
            initial_estimate: Complex::new(0.0, 0.0),
            cycle_break_interval: DEFAULT_CYCLE_BREAK_INTERVAL,
            messages: true,
        }
    }
}

impl RootFinder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refine every root found by deflation against the original polynomial
    #[must_use]
    pub const fn polish(mut self, polish: bool) -> Self {
        self.polish = polish;
        self
    }

    /// Where every Laguerre search starts. Roots closest to the estimate
    /// tend to be found first.
    #[must_use]
    pub const fn initial_estimate(mut self, estimate: Complex) -> Self {
        self.initial_estimate = estimate;
        self
    }

    /// Number of iterations between two fractional steps. The iteration cap
    /// is 8 times this value. Values below 1 are treated as 1.
    #[must_use]
    pub fn cycle_break_interval(mut self, interval: usize) -> Self {
        self.cycle_break_interval = interval.max(1);
        self
    }

    /// Whether convergence warnings are logged, they are always reported in
    /// [`Solution::warnings`]
    #[must_use]
    pub const fn messages(mut self, messages: bool) -> Self {
        self.messages = messages;
        self
    }

    /// Find all roots of `poly`.
    ///
    /// The polynomial is solved at its [`ComplexPoly::reduced_degree`], so
    /// zero high-order coefficients do not produce roots.
    ///
    #[doc = warns_no_converge!()]
    ///
    /// # Errors
    #[doc = errors_no_roots!()]
    pub fn solve(&self, poly: &ComplexPoly) -> Result<Solution> {
        let degree = poly.reduced_degree();
        if degree == 0 {
            return Err(Error::invalid_argument(
                "a polynomial of degree 0 has no roots",
            ));
        }

        let coeffs = &poly.coeffs()[..=degree];
        let n_zero = coeffs.iter().take_while(|c| c.is_zero()).count();
        let rest = &coeffs[n_zero..];
        log::debug!(
            "solving {{degree: {degree}, zero_roots: {n_zero}, remaining_degree: {}}}",
            rest.len() - 1
        );

        let mut solution = match rest {
            [_] => Solution::default(),
            [a, b] => Solution {
                roots: vec![linear(*a, *b)],
                warnings: vec![],
            },
            [c, b, a] => Solution {
                roots: quadratic(*c, *b, *a).to_vec(),
                warnings: vec![],
            },
            [a, b, c, d] => Solution {
                roots: cubic(*a, *b, *c, *d).to_vec(),
                warnings: vec![],
            },
            _ => laguerre_all(
                rest,
                self.polish,
                self.initial_estimate,
                self.cycle_break_interval,
            ),
        };

        solution.roots.extend(array::zeros(n_zero));
        sort_by_real(&mut solution.roots);

        if self.messages {
            for warning in &solution.warnings {
                log::warn!("{warning}");
            }
        }
        Ok(solution)
    }
}

impl ComplexPoly {
    /// Find all roots with the default [`RootFinder`]
    ///
    /// ```
    /// use complex_poly::{complex, poly};
    ///
    /// // x^2 + 1
    /// let roots = poly![1.0, 0.0, 1.0].roots().unwrap();
    /// assert_eq!(roots, vec![complex!(0.0, -1.0), complex!(0.0, 1.0)]);
    /// ```
    ///
    #[doc = warns_no_converge!()]
    ///
    /// # Errors
    #[doc = errors_no_roots!()]
    pub fn roots(&self) -> Result<Vec<Complex>> {
        RootFinder::new().solve(self).map(|s| s.roots)
    }

    /// # Errors
    #[doc = errors_no_roots!()]
    pub fn roots_polished(&self, polish: bool) -> Result<Vec<Complex>> {
        self.roots_with(polish, Complex::new(0.0, 0.0))
    }

    /// # Errors
    #[doc = errors_no_roots!()]
    pub fn roots_from(&self, initial_estimate: Complex) -> Result<Vec<Complex>> {
        self.roots_with(true, initial_estimate)
    }

    /// # Errors
    #[doc = errors_no_roots!()]
    pub fn roots_with(&self, polish: bool, initial_estimate: Complex) -> Result<Vec<Complex>> {
        RootFinder::new()
            .polish(polish)
            .initial_estimate(initial_estimate)
            .solve(self)
            .map(|s| s.roots)
    }

    /// Same as [`ComplexPoly::roots_with`], without logging convergence
    /// warnings
    ///
    /// # Errors
    #[doc = errors_no_roots!()]
    pub fn roots_no_messages(
        &self,
        polish: bool,
        initial_estimate: Complex,
    ) -> Result<Vec<Complex>> {
        RootFinder::new()
            .polish(polish)
            .initial_estimate(initial_estimate)
            .messages(false)
            .solve(self)
            .map(|s| s.roots)
    }
}

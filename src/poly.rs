use std::fmt::Display;

use itertools::Itertools;

use crate::{complex::array, error::Error, util::linalg::convolve_1d, Complex, Result};

mod calculus;
mod impl_num;
mod internals;
pub mod roots;

/// A univariate polynomial with complex coefficients.
///
/// Coefficients are stored in ascending order of degree, `coeff(k)` is the
/// coefficient multiplying `x^k`. The polynomial always has at least one
/// coefficient. Zero high-order coefficients are kept as given, so the
/// declared [`ComplexPoly::degree`] can be larger than the
/// [`ComplexPoly::reduced_degree`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComplexPoly {
    coeff: Vec<Complex>,
}

impl ComplexPoly {
    /// Create a polynomial from its coefficients, lowest degree first.
    ///
    /// ```
    /// use complex_poly::{Complex, ComplexPoly};
    ///
    /// let p = ComplexPoly::new(&[Complex::new(1.0, 0.0), Complex::new(0.0, 2.0)]).unwrap();
    /// assert_eq!(p.degree(), 1);
    /// ```
    ///
    /// # Errors
    /// - `InvalidArgument` if `coeffs` is empty
    pub fn new(coeffs: &[Complex]) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(Error::invalid_argument(
                "a polynomial needs at least one coefficient",
            ));
        }
        Ok(Self {
            coeff: coeffs.to_vec(),
        })
    }

    /// # Errors
    /// - `InvalidArgument` if `coeffs` is empty
    pub fn from_reals(coeffs: &[f64]) -> Result<Self> {
        Self::new(&array::from_reals(coeffs))
    }

    /// # Errors
    /// - `InvalidArgument` if `coeffs` is empty
    pub fn from_f32(coeffs: &[f32]) -> Result<Self> {
        let coeffs = coeffs.iter().map(|&c| f64::from(c)).collect_vec();
        Self::from_reals(&coeffs)
    }

    /// # Errors
    /// - `InvalidArgument` if `coeffs` is empty
    pub fn from_ints(coeffs: &[i32]) -> Result<Self> {
        let coeffs = coeffs.iter().map(|&c| f64::from(c)).collect_vec();
        Self::from_reals(&coeffs)
    }

    /// The zero polynomial with room for `degree + 1` coefficients
    #[must_use]
    pub fn with_degree(degree: usize) -> Self {
        Self {
            coeff: array::zeros(degree + 1),
        }
    }

    /// The monic polynomial `(x - r_1)(x - r_2)...(x - r_n)`
    ///
    /// ```
    /// use complex_poly::{poly, ComplexPoly, Complex};
    ///
    /// let p = ComplexPoly::from_roots(&[Complex::from_real(2.0), Complex::from_real(3.0)]);
    /// assert_eq!(p, poly![6.0, -5.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex]) -> Self {
        let coeff = roots
            .iter()
            .fold(vec![Complex::new(1.0, 0.0)], |acc, &r| {
                convolve_1d(&acc, &[-r, Complex::new(1.0, 0.0)])
            });
        Self { coeff }
    }

    #[doc(hidden)]
    #[must_use]
    pub fn __from_nonempty(coeff: Vec<Complex>) -> Self {
        debug_assert!(!coeff.is_empty());
        if coeff.is_empty() {
            return Self::with_degree(0);
        }
        Self { coeff }
    }

    /// The declared degree, i.e. the number of coefficients minus one
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeff.len() - 1
    }

    /// The degree ignoring zero high-order coefficients. The zero polynomial
    /// has reduced degree 0.
    ///
    /// ```
    /// use complex_poly::poly;
    ///
    /// let p = poly![1.0, 2.0, 0.0, 0.0];
    /// assert_eq!(p.degree(), 3);
    /// assert_eq!(p.reduced_degree(), 1);
    /// ```
    #[must_use]
    pub fn reduced_degree(&self) -> usize {
        self.coeff
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// The coefficient of `x^k`, if `k` is within the declared degree
    #[must_use]
    pub fn coeff(&self, k: usize) -> Option<Complex> {
        self.coeff.get(k).copied()
    }

    #[must_use]
    pub fn coeffs(&self) -> &[Complex] {
        &self.coeff
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex> {
        self.coeff.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex> {
        self.coeff.iter()
    }

    /// Replace the coefficient of `x^k`
    ///
    /// # Errors
    /// - `InvalidArgument` if `k` is larger than the declared degree
    pub fn reset_coeff(&mut self, k: usize, value: Complex) -> Result<()> {
        let degree = self.degree();
        let slot = self.coeff.get_mut(k).ok_or_else(|| {
            Error::invalid_argument(format!(
                "coefficient index {k} is out of range for a polynomial of degree {degree}"
            ))
        })?;
        *slot = value;
        Ok(())
    }

    /// Replace all coefficients at once, keeping the declared degree
    ///
    /// # Errors
    /// - `InvalidArgument` if `coeffs` does not have exactly `degree + 1`
    ///   elements
    pub fn reset_poly(&mut self, coeffs: &[Complex]) -> Result<()> {
        if coeffs.len() != self.coeff.len() {
            return Err(Error::invalid_argument(format!(
                "expected {} coefficients, got {}",
                self.coeff.len(),
                coeffs.len()
            )));
        }
        self.coeff.copy_from_slice(coeffs);
        Ok(())
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use complex_poly::{poly, Complex};
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(Complex::from_real(1.0)), Complex::from_real(6.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex) -> Complex {
        // use Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
        let Some((&last, rest)) = self.coeff.split_last() else {
            return Complex::new(0.0, 0.0);
        };
        rest.iter().rev().fold(last, |acc, &c| acc * x + c)
    }

    /// Evaluate the polynomial, its first derivative and half its second
    /// derivative in a single pass.
    ///
    /// ```
    /// use complex_poly::{poly, Complex};
    ///
    /// // p = x^3, p' = 3x^2, p''/2 = 3x
    /// let p = poly![0.0, 0.0, 0.0, 1.0];
    /// let (v, d1, d2_half) = p.eval_with_derivatives(Complex::from_real(2.0));
    /// assert_eq!(v, Complex::from_real(8.0));
    /// assert_eq!(d1, Complex::from_real(12.0));
    /// assert_eq!(d2_half, Complex::from_real(6.0));
    /// ```
    #[must_use]
    pub fn eval_with_derivatives(&self, x: Complex) -> (Complex, Complex, Complex) {
        let h = internals::horner_with_derivatives(&self.coeff, x);
        (h.value, h.d1, h.d2_half)
    }
}

impl<'a> IntoIterator for &'a ComplexPoly {
    type Item = &'a Complex;
    type IntoIter = std::slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for ComplexPoly {
    /// ```
    /// use complex_poly::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.to_string(), "(1 + j0) + (2 + j0)*x^1 + (3 + j0)*x^2");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (k, c) in self.coeff.iter().enumerate() {
            if k > 0 {
                write!(f, " + ")?;
            }
            write!(f, "(")?;
            Display::fmt(c, f)?;
            write!(f, ")")?;
            if k > 0 {
                write!(f, "*x^{k}")?;
            }
        }
        Ok(())
    }
}

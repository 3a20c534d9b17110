//! Complex arithmetic and complex polynomial root finding.
//!
//! The crate has two layers:
//! - [`Complex`], a double precision complex number with the full set of
//!   elementary functions and an explicit [`InfinityMode`] for products and
//!   quotients involving infinite values.
//! - [`ComplexPoly`], a polynomial with complex coefficients whose roots are
//!   found in closed form for degrees 1 to 3, and with Laguerre's method,
//!   deflation and polishing above that.
//!
//! ```
//! use complex_poly::{complex, poly};
//!
//! // x^2 - 5x + 6
//! let p = poly![6.0, -5.0, 1.0];
//! let roots = p.roots().unwrap();
//! assert!((roots[0] - complex!(2.0)).abs() < 1E-12);
//! assert!((roots[1] - complex!(3.0)).abs() < 1E-12);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

/// Shorthand for [`Complex::new`] and [`Complex::from_real`]
///
/// ```
/// use complex_poly::{complex, Complex};
///
/// assert_eq!(complex!(1.0), Complex::from_real(1.0));
/// assert_eq!(complex!(1.0, -2.0), Complex::new(1.0, -2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::Complex::from_real($re)
    };
    ($re:expr, $im:expr) => {
        $crate::Complex::new($re, $im)
    };
}

/// Build a [`ComplexPoly`] from its coefficients, lowest degree first.
///
/// Coefficients are either all real, or all given as `(re, im)` pairs. At
/// least one coefficient is required.
///
/// ```
/// use complex_poly::{complex, poly};
///
/// let p = poly![1.0, 2.0, 3.0];
/// assert_eq!(p.degree(), 2);
/// let q = poly![(1.0, 0.0), (0.0, 1.0)];
/// assert_eq!(q.coeff(1), Some(complex!(0.0, 1.0)));
/// ```
#[macro_export]
macro_rules! poly {
    ($(($re:expr, $im:expr)),+ $(,)?) => {
        $crate::ComplexPoly::__from_nonempty(vec![$($crate::Complex::new($re, $im)),+])
    };
    ($($re:expr),+ $(,)?) => {
        $crate::ComplexPoly::__from_nonempty(vec![$($crate::Complex::from_real($re)),+])
    };
}

pub mod complex;
pub use complex::{Complex, ComplexDisplay, ImaginaryUnit, InfinityMode};

mod error;
pub use error::{ConvergenceWarning, Error, Result};

mod poly;
pub use poly::roots;
pub use poly::ComplexPoly;

mod util;

#[doc(hidden)]
pub use util::__testing;

//! Closed form solutions for polynomials of degree 1 to 3.
//!
//! Coefficients are passed in ascending order of degree. The formulas pick
//! the sign of every square root so that the subtraction they feed into
//! never cancels, which keeps the smaller roots accurate.

use crate::Complex;

/// Root of `a + b x`
#[must_use]
pub fn linear(a: Complex, b: Complex) -> Complex {
    -a / b
}

/// Roots of `c + b x + a x^2`.
///
/// ```
/// use complex_poly::{complex, roots::quadratic};
///
/// // x^2 + 1
/// let [r1, r2] = quadratic(complex!(1.0), complex!(0.0), complex!(1.0));
/// assert_eq!(r1, complex!(0.0, -1.0));
/// assert_eq!(r2, complex!(0.0, 1.0));
/// ```
#[must_use]
pub fn quadratic(c: Complex, b: Complex, a: Complex) -> [Complex; 2] {
    let discriminant = (b.square() - a * c * 4.0).sqrt();
    let sign = if (b.conj() * discriminant).re() < 0.0 {
        -1.0
    } else {
        1.0
    };
    let q = -(b + discriminant * sign) * 0.5;
    if q.is_zero() {
        // b and the discriminant both vanish, so c does too
        return [Complex::new(0.0, 0.0); 2];
    }
    [q / a, c / q]
}

/// Roots of `a + b x + c x^2 + d x^3`.
///
/// ```
/// use complex_poly::{complex, roots::cubic};
///
/// // (x - 1)(x - 2)(x - 3)
/// let roots = cubic(complex!(-6.0), complex!(11.0), complex!(-6.0), complex!(1.0));
/// for (r, expected) in roots.iter().zip([1.0, 3.0, 2.0]) {
///     assert!((*r - complex!(expected)).abs() < 1E-12);
/// }
/// ```
#[must_use]
pub fn cubic(a: Complex, b: Complex, c: Complex, d: Complex) -> [Complex; 3] {
    // monic form x^3 + A x^2 + B x + C
    let ca = c / d;
    let cb = b / d;
    let cc = a / d;

    let q = (ca.square() - cb * 3.0) / 9.0;
    let r = (ca.square() * ca * 2.0 - ca * cb * 9.0 + cc * 27.0) / 54.0;

    let sq = (r.square() - q.square() * q).sqrt();
    let sign = if (r.conj() * sq).re() < 0.0 { -1.0 } else { 1.0 };
    let s = -(r + sq * sign).powf(1.0 / 3.0);
    let t = if s.is_zero() {
        Complex::new(0.0, 0.0)
    } else {
        q / s
    };

    let shift = ca / 3.0;
    let half_sum = -(s + t) * 0.5 - shift;
    let offset = Complex::i() * (s - t) * (3f64.sqrt() * 0.5);
    [s + t - shift, half_sum + offset, half_sum - offset]
}

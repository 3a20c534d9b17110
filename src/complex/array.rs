//! Helpers for slices of complex numbers

use super::Complex;

/// Real parts closer than this (relative to their magnitude, or absolutely
/// near zero) are considered tied when sorting
const REAL_TIE_TOLERANCE: f64 = 1E-10;

#[must_use]
pub fn zeros(n: usize) -> Vec<Complex> {
    vec![Complex::new(0.0, 0.0); n]
}

#[must_use]
pub fn ones(n: usize) -> Vec<Complex> {
    vec![Complex::new(1.0, 0.0); n]
}

#[must_use]
pub fn from_reals(values: &[f64]) -> Vec<Complex> {
    values.iter().copied().map(Complex::from_real).collect()
}

/// Sort in ascending order of real part, using a stable insertion sort.
///
/// Values whose real parts agree to within a tolerance of `1E-10` (relative,
/// or absolute near zero) are ordered by ascending imaginary part, so that
/// conjugate pairs always come out as `a - ib, a + ib`. Values involving NaN
/// keep their relative position.
///
/// The tie tolerance is not transitive. In a chain of values whose real parts
/// are each within tolerance of the next but not of both ends, the result can
/// depend on the input order, and real parts are then not guaranteed to be
/// ascending across the chain.
///
/// ```
/// use complex_poly::{complex, complex::array::sort_by_real};
///
/// let mut v = vec![complex!(1.0), complex!(0.0, 1.0), complex!(1E-17, -1.0), complex!(-2.0)];
/// sort_by_real(&mut v);
/// assert_eq!(v, vec![complex!(-2.0), complex!(1E-17, -1.0), complex!(0.0, 1.0), complex!(1.0)]);
/// ```
pub fn sort_by_real(v: &mut [Complex]) {
    for j in 1..v.len() {
        let x = v[j];
        let mut i = j;
        while i > 0 && precedes(x, v[i - 1]) {
            v[i] = v[i - 1];
            i -= 1;
        }
        v[i] = x;
    }
}

fn precedes(a: Complex, b: Complex) -> bool {
    let scale = 1.0 + a.re.abs().max(b.re.abs());
    if (a.re - b.re).abs() <= REAL_TIE_TOLERANCE * scale {
        a.im < b.im
    } else {
        a.re < b.re
    }
}

//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;

use crate::{
    util::float::{f64_make_nonzero, f64_make_safe},
    Complex, ComplexPoly,
};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // NOTE: I think fastrand::f64 does not emit subnormals, but just in case
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Endless stream of real values uniformly distributed in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max - self.min, self.min);
        Some(Complex::from_real(f64_make_safe(re)))
    }
}

/// Endless stream of complex values uniformly distributed in a rectangle
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex::new(f64_make_safe(re), f64_make_safe(im)))
    }
}

/// Pairs every value of the upstream with its conjugate
pub struct RandStreamConjugate64<I: Iterator<Item = Complex>> {
    upstream: I,
}

impl<I: Iterator<Item = Complex>> RandStreamConjugate64<I> {
    pub const fn new(upstream: I) -> Self {
        Self { upstream }
    }
}

impl<I: Iterator<Item = Complex>> Iterator for RandStreamConjugate64<I> {
    type Item = (Complex, Complex);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.upstream.next()?;
        Some((c, c.conj()))
    }
}

/// Generate one test case where the roots are known and can be compared
///
/// # Panics
/// If the scale stream is exhausted
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = Complex>,
    mut scale_stream: impl Iterator<Item = Complex>,
    degree: usize,
) -> (ComplexPoly, Vec<Complex>) {
    let roots = roots_stream.take(degree).collect_vec();
    let poly = ComplexPoly::from_roots(&roots)
        * scale_stream.next().expect("rng stream should be infinite");
    (poly, roots)
}

/// Generate one test case where the roots are known and can be compared, this
/// makes conjugate roots.
///
/// # Panics
/// If the scale stream is exhausted
pub fn test_case_conj_roots(
    roots_stream: impl Iterator<Item = Complex>,
    mut scale_stream: impl Iterator<Item = Complex>,
    degree: usize,
) -> (ComplexPoly, Vec<Complex>) {
    let roots = RandStreamConjugate64::new(roots_stream)
        .take((degree + 1) / 2)
        .flat_map(|(r1, r2)| [r1, r2])
        .take(degree)
        .collect_vec();
    let poly = ComplexPoly::from_roots(&roots)
        * scale_stream.next().expect("rng stream should be infinite");
    (poly, roots)
}

/// Check that all roots have been found, in any order
#[must_use]
pub fn check_roots(roots1: Vec<Complex>, mut roots2: Vec<Complex>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = r1.distance(*r2);
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

#[cfg(test)]
mod test {
    use super::{check_roots, RandStreamC64Cartesian, RandStreamR64};
    use crate::Complex;

    #[test]
    fn streams_are_seeded() {
        let a: Vec<_> = RandStreamC64Cartesian::new(1, -1.0, 1.0, -1.0, 1.0).take(4).collect();
        let b: Vec<_> = RandStreamC64Cartesian::new(1, -1.0, 1.0, -1.0, 1.0).take(4).collect();
        assert_eq!(a, b);
        assert!(RandStreamR64::new(2, 1.0, 2.0)
            .take(16)
            .all(|z| z.is_real() && (1.0..2.0).contains(&z.re())));
    }

    #[test]
    fn check_roots_unordered() {
        let a = vec![Complex::new(1.0, 0.0), Complex::new(0.0, 1.0)];
        let b = vec![Complex::new(0.0, 1.0 + 1E-9), Complex::new(1.0, 0.0)];
        assert!(check_roots(a.clone(), b, 1E-6));
        assert!(!check_roots(a.clone(), vec![Complex::new(1.0, 0.0)], 1E-6));
        assert!(!check_roots(
            a,
            vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)],
            1E-6
        ));
    }
}

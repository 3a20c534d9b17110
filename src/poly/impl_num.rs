// Implementation of operators between polynomials and with scalars

use std::ops::{Add, Div, Mul, Neg, Sub};

use itertools::{EitherOrBoth, Itertools};

use crate::{util::linalg::convolve_1d, Complex, ComplexPoly};

impl ComplexPoly {
    /// The polynomial multiplied by itself
    #[must_use]
    pub fn sqr(&self) -> Self {
        self * self
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(Complex, Complex) -> Complex) -> Self {
        let zero = Complex::new(0.0, 0.0);
        let coeff = self
            .iter()
            .zip_longest(rhs.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(&a, &b) => f(a, b),
                EitherOrBoth::Left(&a) => f(a, zero),
                EitherOrBoth::Right(&b) => f(zero, b),
            })
            .collect();
        Self::__from_nonempty(coeff)
    }

    fn map(&self, f: impl Fn(Complex) -> Complex) -> Self {
        Self::__from_nonempty(self.iter().copied().map(f).collect())
    }
}

impl Add<&ComplexPoly> for &ComplexPoly {
    type Output = ComplexPoly;

    fn add(self, rhs: &ComplexPoly) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub<&ComplexPoly> for &ComplexPoly {
    type Output = ComplexPoly;

    fn sub(self, rhs: &ComplexPoly) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul<&ComplexPoly> for &ComplexPoly {
    type Output = ComplexPoly;

    fn mul(self, rhs: &ComplexPoly) -> Self::Output {
        ComplexPoly::__from_nonempty(convolve_1d(self.coeffs(), rhs.coeffs()))
    }
}

macro_rules! impl_owned {
    ($($tr:ident $method:ident),*) => {
        $(
            impl $tr for ComplexPoly {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    $tr::$method(&self, &rhs)
                }
            }

            impl $tr<&ComplexPoly> for ComplexPoly {
                type Output = Self;

                fn $method(self, rhs: &Self) -> Self::Output {
                    $tr::$method(&self, rhs)
                }
            }
        )*
    };
}

impl_owned!(Add add, Sub sub, Mul mul);

impl Mul<Complex> for &ComplexPoly {
    type Output = ComplexPoly;

    fn mul(self, rhs: Complex) -> Self::Output {
        self.map(|c| c * rhs)
    }
}

impl Mul<Complex> for ComplexPoly {
    type Output = Self;

    fn mul(self, rhs: Complex) -> Self::Output {
        &self * rhs
    }
}

impl Div<Complex> for &ComplexPoly {
    type Output = ComplexPoly;

    fn div(self, rhs: Complex) -> Self::Output {
        self.map(|c| c / rhs)
    }
}

impl Div<Complex> for ComplexPoly {
    type Output = Self;

    fn div(self, rhs: Complex) -> Self::Output {
        &self / rhs
    }
}

impl Neg for &ComplexPoly {
    type Output = ComplexPoly;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl Neg for ComplexPoly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[cfg(test)]
mod test {
    use crate::Complex;

    #[test]
    fn add_sub() {
        let p1 = poly![1.0, 2.0, 3.0];
        let p2 = poly![(0.0, 1.0)];
        assert_eq!(&p1 + &p2, poly![(1.0, 1.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(p2.clone() + p1.clone(), &p1 + &p2);
        assert_eq!(p1.clone() - p1.clone(), poly![0.0, 0.0, 0.0]);
        assert_eq!(&p2 - &p1, poly![(-1.0, 1.0), (-2.0, 0.0), (-3.0, 0.0)]);
    }

    #[test]
    fn mul() {
        let p1 = poly![1.0, 1.0];
        let p2 = poly![-1.0, 1.0];
        assert_eq!(p1 * p2, poly![-1.0, 0.0, 1.0]);
        assert_eq!(poly![1.0, 1.0].sqr(), poly![1.0, 2.0, 1.0]);
    }

    #[test]
    fn scalar() {
        let p = poly![2.0, -4.0];
        assert_eq!(&p * Complex::i(), poly![(0.0, 2.0), (0.0, -4.0)]);
        assert_eq!(p.clone() / Complex::from_real(2.0), poly![1.0, -2.0]);
        assert_eq!(-p, poly![-2.0, 4.0]);
    }
}

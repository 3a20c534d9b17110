// Implementation of operators and the infinity handling policy

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Complex;

/// How multiplication and division treat infinite operands.
///
/// This is an explicit setting rather than process-wide state: the operator
/// impls (`*`, `/`, `*=`, `/=`) always use [`InfinityMode::default`], and
/// [`Complex::mul_with`] / [`Complex::div_with`] take the mode as an argument.
///
/// ```
/// use complex_poly::{Complex, InfinityMode};
///
/// let inf = Complex::from_real(f64::INFINITY);
/// let two = Complex::new(2.0, -1.0);
///
/// assert_eq!(inf * two, Complex::plus_infinity());
/// assert_eq!(inf.mul_with(two, InfinityMode::Ieee), Complex::new(f64::INFINITY, f64::NEG_INFINITY));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InfinityMode {
    /// Infinite results collapse to `(+∞, +∞)`:
    /// - `a * b` is `(+∞, +∞)` if either operand is infinite and the other
    ///   is non-zero, a zero operand falls back to componentwise IEEE
    ///   arithmetic
    /// - `a / b` is `(0, 0)` if `b` is infinite and `a` is not
    /// - `a / b` is `(+∞, +∞)` if `a` is infinite and `b` is finite and
    ///   non-zero
    #[default]
    Collapse,

    /// Plain componentwise IEEE 754 propagation
    Ieee,
}

impl InfinityMode {
    /// Multiply two complex numbers under this mode
    #[must_use]
    pub fn mul(self, a: Complex, b: Complex) -> Complex {
        if self == Self::Collapse
            && ((a.is_infinite() && !b.is_zero()) || (b.is_infinite() && !a.is_zero()))
        {
            return Complex::plus_infinity();
        }
        Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
    }

    /// Divide two complex numbers under this mode, using Smith's algorithm.
    ///
    /// Dividing by zero gives `(NaN, NaN)`, even for a zero dividend, while a
    /// zero dividend over any other divisor gives `(0, 0)`.
    #[must_use]
    pub fn div(self, a: Complex, b: Complex) -> Complex {
        if self == Self::Collapse {
            if b.is_infinite() && !a.is_infinite() {
                return Complex::new(0.0, 0.0);
            }
            if a.is_infinite() && !b.is_infinite() && !b.is_zero() {
                return Complex::plus_infinity();
            }
        }
        if b.is_zero() {
            return Complex::nan();
        }
        if a.is_zero() {
            return Complex::new(0.0, 0.0);
        }
        smith_div(a, b)
    }
}

/// Scale by the larger component of the divisor to avoid overflow and
/// underflow in the intermediate products
fn smith_div(a: Complex, b: Complex) -> Complex {
    if b.re.abs() >= b.im.abs() {
        let ratio = b.im / b.re;
        let denom = b.re + ratio * b.im;
        Complex::new(
            (a.re + ratio * a.im) / denom,
            (a.im - ratio * a.re) / denom,
        )
    } else {
        let ratio = b.re / b.im;
        let denom = b.im + ratio * b.re;
        Complex::new(
            (ratio * a.re + a.im) / denom,
            (ratio * a.im - a.re) / denom,
        )
    }
}

impl Complex {
    /// Multiply with an explicit [`InfinityMode`]
    #[must_use]
    pub fn mul_with(self, rhs: Self, mode: InfinityMode) -> Self {
        mode.mul(self, rhs)
    }

    /// Divide with an explicit [`InfinityMode`]
    #[must_use]
    pub fn div_with(self, rhs: Self, mode: InfinityMode) -> Self {
        mode.div(self, rhs)
    }

    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }

    /// `1 / self`
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(1.0, 0.0) / self
    }

    /// Multiply by a real number, without going through complex
    /// multiplication
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        InfinityMode::default().mul(self, rhs)
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        InfinityMode::default().div(self, rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

macro_rules! impl_real_rhs {
    ($($tr:ident $method:ident),*) => {
        $(
            impl $tr<f64> for Complex {
                type Output = Self;

                fn $method(self, rhs: f64) -> Self::Output {
                    $tr::$method(self, Self::from_real(rhs))
                }
            }

            impl $tr<Complex> for f64 {
                type Output = Complex;

                fn $method(self, rhs: Complex) -> Self::Output {
                    $tr::$method(Complex::from_real(self), rhs)
                }
            }
        )*
    };
}

impl_real_rhs!(Add add, Sub sub, Mul mul, Div div);

macro_rules! impl_assign {
    ($($tr:ident $method:ident $op:tt),*) => {
        $(
            impl $tr for Complex {
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl $tr<f64> for Complex {
                fn $method(&mut self, rhs: f64) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign!(
    AddAssign add_assign +,
    SubAssign sub_assign -,
    MulAssign mul_assign *,
    DivAssign div_assign /
);

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(0.0, 0.0), |acc, z| acc + z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(1.0, 0.0), |acc, z| acc * z)
    }
}

#[cfg(test)]
mod test {
    use super::InfinityMode;
    use crate::Complex;

    #[test]
    fn mul() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(2.0 * a, Complex::new(2.0, 4.0));
    }

    #[test]
    fn div() {
        let a = Complex::new(5.0, 5.0);
        let b = Complex::new(3.0, -1.0);
        assert!((a / b - Complex::new(1.0, 2.0)).abs() < 1E-15);
        // im-dominated branch of Smith's algorithm
        let c = Complex::new(1.0, 3.0);
        let q = a / c;
        assert!((q - Complex::new(2.0, -1.0)).abs() < 1E-15);
    }

    #[test]
    fn div_by_zero() {
        assert!((Complex::new(1.0, 1.0) / Complex::new(0.0, 0.0)).is_nan());
        assert!((Complex::new(0.0, 0.0) / Complex::new(0.0, 0.0)).is_nan());
        assert_eq!(
            Complex::new(0.0, 0.0) / Complex::new(2.0, 1.0),
            Complex::new(0.0, 0.0)
        );
    }

    #[test]
    fn smith_avoids_overflow() {
        let big = Complex::new(1E300, 1E300);
        let q = big / big;
        assert!((q - Complex::new(1.0, 0.0)).abs() < 1E-15);
    }

    #[test]
    fn collapse_mul() {
        let inf = Complex::from_real(f64::INFINITY);
        let z = Complex::new(0.0, 0.0);
        assert_eq!(inf * Complex::new(-1.0, 0.0), Complex::plus_infinity());
        assert_eq!(Complex::new(0.0, 3.0) * inf, Complex::plus_infinity());

        // a zero operand does not collapse
        let p = inf * z;
        assert_ne!(p, Complex::plus_infinity());
        assert!(p.is_nan());
    }

    #[test]
    fn ieee_mul() {
        let inf = Complex::from_real(f64::INFINITY);
        let p = inf.mul_with(Complex::new(-1.0, 0.0), InfinityMode::Ieee);
        assert_eq!(p.re(), f64::NEG_INFINITY);
        assert!(p.im().is_nan());
        assert!(inf.mul_with(Complex::new(0.0, 0.0), InfinityMode::Ieee).is_nan());
    }

    #[test]
    fn collapse_div() {
        let inf = Complex::new(f64::INFINITY, 1.0);
        assert_eq!(Complex::new(3.0, 4.0) / inf, Complex::new(0.0, 0.0));
        assert_eq!(inf / Complex::new(3.0, 4.0), Complex::plus_infinity());
        assert!((inf / inf).is_nan());
        assert!((inf / Complex::new(0.0, 0.0)).is_nan());
    }

    #[test]
    fn ieee_div() {
        let inf = Complex::new(f64::INFINITY, 0.0);
        let q = Complex::new(3.0, 4.0).div_with(inf, InfinityMode::Ieee);
        assert_eq!(q, Complex::new(0.0, 0.0));
        let q = inf.div_with(Complex::new(2.0, 0.0), InfinityMode::Ieee);
        assert_eq!(q.re(), f64::INFINITY);
        assert!(q.im().is_nan());
    }

    #[test]
    fn assign_ops() {
        let mut z = Complex::new(1.0, 1.0);
        z += Complex::new(1.0, 0.0);
        z -= 1.0;
        z *= Complex::i();
        z /= 2.0;
        assert_eq!(z, Complex::new(-0.5, 0.5));
    }

    #[test]
    fn inverse() {
        let a = Complex::new(3.0, -4.0);
        assert!((a * a.inverse() - Complex::new(1.0, 0.0)).abs() < 1E-15);
        assert!(Complex::new(0.0, 0.0).inverse().is_nan());
    }

    #[test]
    fn sum_product() {
        let v = [Complex::new(1.0, 1.0), Complex::new(2.0, -1.0)];
        assert_eq!(v.iter().copied().sum::<Complex>(), Complex::new(3.0, 0.0));
        assert_eq!(v.iter().copied().product::<Complex>(), Complex::new(3.0, 1.0));
    }
}

//! Elementary functions extended to the complex plane.
//!
//! Multi-valued functions (`ln`, `sqrt`, `pow`, the inverse trigonometric and
//! hyperbolic families) return their principal value, with the argument in
//! `(-π, π]`.

use std::f64::consts::{FRAC_PI_2, LN_10};

use super::Complex;
use crate::error::{Error, Result};

/// `sqrt(a² + b²)` without intermediate overflow or underflow
#[must_use]
pub fn hypot(a: f64, b: f64) -> f64 {
    let (a, b) = (a.abs(), b.abs());
    if a.is_infinite() || b.is_infinite() {
        return f64::INFINITY;
    }
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let (big, small) = if a >= b { (a, b) } else { (b, a) };
    if big == 0.0 {
        return 0.0;
    }
    let ratio = small / big;
    big * ratio.mul_add(ratio, 1.0).sqrt()
}

impl Complex {
    /// Modulus, computed by scaling with the larger component
    #[must_use]
    pub fn abs(self) -> f64 {
        hypot(self.re, self.im)
    }

    /// Squared modulus
    #[must_use]
    pub fn abs_sqr(self) -> f64 {
        self.re.mul_add(self.re, self.im * self.im)
    }

    /// Argument in `(-π, π]`
    #[must_use]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Distance between two points of the complex plane
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).abs()
    }

    #[must_use]
    pub fn exp(self) -> Self {
        let modulus = self.re.exp();
        if self.im == 0.0 {
            return Self::new(modulus, 0.0);
        }
        Self::polar(modulus, self.im)
    }

    /// Natural logarithm (principal value). `ln(0)` is `(-∞, 0)`.
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    #[must_use]
    pub fn log10(self) -> Self {
        self.ln().scale(LN_10.recip())
    }

    /// Principal square root.
    ///
    /// The branch is chosen as in Numerical Recipes: the real part of the
    /// result is non-negative, and the sign of the imaginary part follows the
    /// sign of the input's imaginary part.
    ///
    /// ```
    /// use complex_poly::Complex;
    ///
    /// assert_eq!(Complex::new(-4.0, 0.0).sqrt(), Complex::new(0.0, 2.0));
    /// assert_eq!(Complex::new(-4.0, -0.0).sqrt(), Complex::new(0.0, -2.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return Self::new(0.0, 0.0);
        }
        let x = self.re.abs();
        let y = self.im.abs();
        let w = if x >= y {
            let r = y / x;
            x.sqrt() * (0.5 * (1.0 + r.mul_add(r, 1.0).sqrt())).sqrt()
        } else {
            let r = x / y;
            y.sqrt() * (0.5 * (r + r.mul_add(r, 1.0).sqrt())).sqrt()
        };
        if self.re >= 0.0 {
            Self::new(w, self.im / (2.0 * w))
        } else {
            let im = if self.im.is_sign_negative() { -w } else { w };
            Self::new(y / (2.0 * w), im)
        }
    }

    /// Principal `n`-th root
    ///
    /// # Errors
    /// - `InvalidArgument` if `n` is zero
    pub fn nth_root(self, n: u32) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_argument("the zeroth root is undefined"));
        }
        Ok(self.powf(f64::from(n).recip()))
    }

    /// Raise to a real power (principal value).
    ///
    /// For a zero base: `0^0 = 1`, `0^b = 0` for `b > 0` and `0^b = (+∞, 0)`
    /// for `b < 0`.
    #[must_use]
    pub fn powf(self, exponent: f64) -> Self {
        if self.is_zero() {
            return zero_base_pow(exponent);
        }
        Self::polar(self.abs().powf(exponent), self.arg() * exponent)
    }

    /// Raise to an integer power by repeated squaring, the zero base is
    /// handled as in [`Complex::powf`].
    #[must_use]
    pub fn powi(self, exponent: i32) -> Self {
        if self.is_zero() {
            return zero_base_pow(f64::from(exponent));
        }
        let mut base = if exponent < 0 { self.inverse() } else { self };
        let mut n = exponent.unsigned_abs();
        let mut acc = Self::new(1.0, 0.0);
        while n > 0 {
            if n & 1 == 1 {
                acc *= base;
            }
            base *= base;
            n >>= 1;
        }
        acc
    }

    /// Raise to a complex power, `exp(exponent · ln(self))`.
    ///
    /// For a zero base the sign of the exponent's real part decides between
    /// `0` and `(+∞, 0)`, and `0^0 = 1`. A purely imaginary exponent gives
    /// `(NaN, NaN)`.
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        if self.is_zero() {
            if exponent.is_zero() {
                return Self::new(1.0, 0.0);
            }
            if exponent.re == 0.0 {
                return Self::nan();
            }
            return zero_base_pow(exponent.re);
        }
        (exponent * self.ln()).exp()
    }

    #[must_use]
    pub fn sin(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self::new(sin * self.im.cosh(), cos * self.im.sinh())
    }

    #[must_use]
    pub fn cos(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self::new(cos * self.im.cosh(), -sin * self.im.sinh())
    }

    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    #[must_use]
    pub fn cot(self) -> Self {
        self.cos() / self.sin()
    }

    #[must_use]
    pub fn sec(self) -> Self {
        self.cos().inverse()
    }

    #[must_use]
    pub fn csc(self) -> Self {
        self.sin().inverse()
    }

    #[must_use]
    pub fn sinh(self) -> Self {
        let (sin, cos) = self.im.sin_cos();
        Self::new(self.re.sinh() * cos, self.re.cosh() * sin)
    }

    #[must_use]
    pub fn cosh(self) -> Self {
        let (sin, cos) = self.im.sin_cos();
        Self::new(self.re.cosh() * cos, self.re.sinh() * sin)
    }

    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    #[must_use]
    pub fn coth(self) -> Self {
        self.cosh() / self.sinh()
    }

    #[must_use]
    pub fn sech(self) -> Self {
        self.cosh().inverse()
    }

    #[must_use]
    pub fn csch(self) -> Self {
        self.sinh().inverse()
    }

    /// `-i ln(iz + sqrt(1 - z²))`
    #[must_use]
    pub fn asin(self) -> Self {
        let one = Self::new(1.0, 0.0);
        let w = (Self::i() * self + (one - self.square()).sqrt()).ln();
        Self::new(w.im, -w.re)
    }

    /// `π/2 - asin(z)`
    #[must_use]
    pub fn acos(self) -> Self {
        Self::from_real(FRAC_PI_2) - self.asin()
    }

    /// `(i/2) (ln(1 - iz) - ln(1 + iz))`
    #[must_use]
    pub fn atan(self) -> Self {
        let one = Self::new(1.0, 0.0);
        let iz = Self::i() * self;
        let w = (one - iz).ln() - (one + iz).ln();
        Self::new(-0.5 * w.im, 0.5 * w.re)
    }

    #[must_use]
    pub fn acot(self) -> Self {
        self.inverse().atan()
    }

    #[must_use]
    pub fn asec(self) -> Self {
        self.inverse().acos()
    }

    #[must_use]
    pub fn acsc(self) -> Self {
        self.inverse().asin()
    }

    /// `ln(z + sqrt(z² + 1))`
    #[must_use]
    pub fn asinh(self) -> Self {
        (self + (self.square() + 1.0).sqrt()).ln()
    }

    /// `ln(z + sqrt(z + 1) sqrt(z - 1))`
    #[must_use]
    pub fn acosh(self) -> Self {
        (self + (self + 1.0).sqrt() * (self - 1.0).sqrt()).ln()
    }

    /// `(ln(1 + z) - ln(1 - z)) / 2`
    #[must_use]
    pub fn atanh(self) -> Self {
        let one = Self::new(1.0, 0.0);
        ((one + self).ln() - (one - self).ln()).scale(0.5)
    }

    #[must_use]
    pub fn acoth(self) -> Self {
        self.inverse().atanh()
    }

    #[must_use]
    pub fn asech(self) -> Self {
        self.inverse().acosh()
    }

    #[must_use]
    pub fn acsch(self) -> Self {
        self.inverse().asinh()
    }
}

fn zero_base_pow(exponent: f64) -> Complex {
    if exponent == 0.0 {
        Complex::new(1.0, 0.0)
    } else if exponent > 0.0 {
        Complex::new(0.0, 0.0)
    } else if exponent < 0.0 {
        Complex::new(f64::INFINITY, 0.0)
    } else {
        Complex::nan()
    }
}

use std::hash::{Hash, Hasher};

use num::{One, Zero};

mod arith;
pub use arith::InfinityMode;
pub mod array;
mod elementary;
mod display;
pub use display::{ComplexDisplay, ImaginaryUnit};

/// A complex number `re + i·im` in double precision.
///
/// `Complex` is an immutable value type: every operation returns a new value
/// and the compound-assignment operators (`+=`, `*=`, ...) are the only way
/// to update one in place.
///
/// NaN and infinite components are valid states, arithmetic never fails and
/// degenerate results propagate as NaN or infinity.
///
/// # Equality
///
/// Equality is exact and componentwise, with one deliberate deviation from
/// IEEE 754: two NaN components compare **equal**. This makes `==` reflexive,
/// so that `Complex` can implement [`Eq`] and [`Hash`] consistently. Use
/// [`Complex::is_equal_within_limits`] for tolerance based comparisons.
///
/// ```
/// use complex_poly::Complex;
///
/// assert_eq!(Complex::nan(), Complex::nan());
/// assert_eq!(Complex::new(0.0, 1.0), Complex::new(-0.0, 1.0));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Create a complex number from its modulus and argument (in radians)
    #[must_use]
    pub fn polar(modulus: f64, argument: f64) -> Self {
        let (sin, cos) = argument.sin_cos();
        Self::new(modulus * cos, modulus * sin)
    }

    /// The imaginary unit
    #[must_use]
    pub const fn i() -> Self {
        Self::new(0.0, 1.0)
    }

    /// `(+∞, +∞)`, the value infinite products collapse to
    #[must_use]
    pub const fn plus_infinity() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY)
    }

    #[must_use]
    pub const fn minus_infinity() -> Self {
        Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY)
    }

    #[must_use]
    pub const fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    #[must_use]
    pub const fn re(self) -> f64 {
        self.re
    }

    #[must_use]
    pub const fn im(self) -> f64 {
        self.im
    }

    /// Both components are exactly zero (either sign)
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// The imaginary component is exactly zero
    #[must_use]
    pub fn is_real(self) -> bool {
        self.im == 0.0
    }

    /// At least one component is infinite
    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// At least one component is `+∞`
    #[must_use]
    pub fn is_plus_infinity(self) -> bool {
        self.re == f64::INFINITY || self.im == f64::INFINITY
    }

    /// At least one component is `-∞`
    #[must_use]
    pub fn is_minus_infinity(self) -> bool {
        self.re == f64::NEG_INFINITY || self.im == f64::NEG_INFINITY
    }

    /// At least one component is NaN
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Compare two values component by component, using a tolerance relative
    /// to the larger magnitude of each pair of components.
    ///
    /// A pair of components is accepted when
    /// `|x - y| / max(|x|, |y|) <= fractional_tolerance`. Two zero components
    /// (and, following the crate's equality convention, two NaN components)
    /// always match.
    ///
    /// ```
    /// use complex_poly::Complex;
    ///
    /// let a = Complex::new(1.0, -2.0);
    /// let b = Complex::new(1.0 + 1E-12, -2.0);
    /// assert!(a.is_equal_within_limits(b, 1E-10));
    /// assert!(!a.is_equal_within_limits(Complex::new(1.1, -2.0), 1E-10));
    /// ```
    #[must_use]
    pub fn is_equal_within_limits(self, other: Self, fractional_tolerance: f64) -> bool {
        fn component_within(x: f64, y: f64, tol: f64) -> bool {
            if same_component(x, y) {
                return true;
            }
            let scale = x.abs().max(y.abs());
            (x - y).abs() / scale <= tol
        }
        component_within(self.re, other.re, fractional_tolerance)
            && component_within(self.im, other.im, fractional_tolerance)
    }

    /// Round both components to `precision` decimal places.
    ///
    /// Rounding is half away from zero and works on the shortest decimal
    /// representation of each component, the one `Display` prints, so
    /// `1.005` rounds to `1.01`. A negative precision leaves the value
    /// unchanged, as do non-finite components and precisions beyond the
    /// digits a component already has.
    ///
    /// ```
    /// use complex_poly::Complex;
    ///
    /// let z = Complex::new(1.23456, -9.87654);
    /// assert_eq!(z.truncate(2), Complex::new(1.23, -9.88));
    /// assert_eq!(z.truncate(-1), z);
    /// assert_eq!(Complex::new(2.5, -0.125).truncate(0), Complex::new(3.0, -0.0));
    /// ```
    #[must_use]
    pub fn truncate(self, precision: i32) -> Self {
        let places = i64::from(precision);
        if places < 0 {
            return self;
        }
        Self::new(round_decimal(self.re, places), round_decimal(self.im, places))
    }
}

/// Round `x` half away from zero to `places` decimal places
fn round_decimal(x: f64, places: i64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let sci = format!("{:e}", x.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return x;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return x;
    };
    let mut digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect::<Vec<_>>();

    // digit k has place value 10^(exponent - k)
    let n_kept = exponent.saturating_add(places).saturating_add(1);
    let Ok(kept) = usize::try_from(n_kept) else {
        return 0.0_f64.copysign(x);
    };
    if kept >= digits.len() {
        return x;
    }

    let round_up = digits[kept] >= 5;
    digits.truncate(kept);
    if round_up {
        match digits.iter().rposition(|&d| d != 9) {
            Some(k) => {
                digits[k] += 1;
                digits[k + 1..].fill(0);
            }
            None => {
                digits.fill(0);
                digits.insert(0, 1);
            }
        }
    }
    if digits.is_empty() {
        digits.push(0);
    }

    let mantissa: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    let scale = exponent + 1 - n_kept;
    format!("{mantissa}e{scale}")
        .parse::<f64>()
        .map_or(x, |r| r.copysign(x))
}

/// Exact equality, except that NaN matches NaN
fn same_component(x: f64, y: f64) -> bool {
    x == y || (x.is_nan() && y.is_nan())
}

/// Bits used for hashing, consistent with [`same_component`]
fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0.0_f64.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        same_component(self.re, other.re) && same_component(self.im, other.im)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.re).hash(state);
        canonical_bits(self.im).hash(state);
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl One for Complex {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl From<num::Complex<f64>> for Complex {
    fn from(z: num::Complex<f64>) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<Complex> for num::Complex<f64> {
    fn from(z: Complex) -> Self {
        Self::new(z.re, z.im)
    }
}

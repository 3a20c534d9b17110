//! floating point utilities

/// Smallest magnitude that can be squared without underflowing to subnormals
const SMALL_SAFE: f64 = 1E-150;

/// Largest magnitude that can be squared without overflowing
const LARGE_SAFE: f64 = 1E150;

/// Makes a degenerate float normal again by either clamping it or replacing
/// NaN with zero.
pub(crate) fn f64_make_normal(x: f64) -> f64 {
    if x.is_nan() || x.is_subnormal() {
        return 0.0;
    }
    if x.is_infinite() {
        return f64::MAX.copysign(x);
    }
    x
}

/// If a float is subnormal or zero, bump it to the nearest normal number or
/// `MIN_POSITIVE` if it's zero.
pub(crate) fn f64_make_nonzero(x: f64) -> f64 {
    let x = f64_make_normal(x);
    if x.abs() < f64::MIN_POSITIVE {
        f64::MIN_POSITIVE.copysign(x)
    } else {
        x
    }
}

/// If a float's absolute value is outside of the safe range
/// `[1E-150, 1E150]`, bump it to the nearest safe value. This also bumps
/// zeros, and NaNs are treated as the smallest safe value.
pub(crate) fn f64_make_safe(x: f64) -> f64 {
    let x = f64_make_normal(x);
    if x.abs() < SMALL_SAFE {
        SMALL_SAFE.copysign(x)
    } else if x.abs() > LARGE_SAFE {
        LARGE_SAFE.copysign(x)
    } else {
        x
    }
}

#[cfg(test)]
mod test {
    use super::{f64_make_nonzero, f64_make_safe};

    #[test]
    fn make_safe() {
        assert_eq!(f64_make_safe(0.0), 1E-150);
        assert_eq!(f64_make_safe(-1E200), -1E150);
        assert_eq!(f64_make_safe(f64::NAN), 1E-150);
        assert_eq!(f64_make_safe(0.5), 0.5);
    }

    #[test]
    fn make_nonzero() {
        assert_eq!(f64_make_nonzero(0.0), f64::MIN_POSITIVE);
        assert_eq!(f64_make_nonzero(f64::INFINITY), f64::MAX);
        assert_eq!(f64_make_nonzero(2.0), 2.0);
    }
}

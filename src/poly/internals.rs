use crate::Complex;

/// Value of a polynomial together with its first derivative, half of its
/// second derivative and a bound on the round-off error of `value`
#[derive(Clone, Copy, Debug)]
pub(crate) struct HornerEval {
    pub value: Complex,
    pub d1: Complex,
    pub d2_half: Complex,
    pub round_off: f64,
}

/// Horner's scheme extended to the first two derivatives, over coefficients
/// in ascending order of degree.
///
/// The round-off bound follows the classic estimate
/// `eps * sum(|b_k| |x|^k)` accumulated alongside the evaluation.
pub(crate) fn horner_with_derivatives(coeffs: &[Complex], x: Complex) -> HornerEval {
    let zero = Complex::new(0.0, 0.0);
    let Some((&last, rest)) = coeffs.split_last() else {
        return HornerEval {
            value: zero,
            d1: zero,
            d2_half: zero,
            round_off: 0.0,
        };
    };

    let abx = x.abs();
    let mut b = last;
    let mut err = b.abs();
    let mut d = zero;
    let mut f = zero;
    for &a in rest.iter().rev() {
        f = x * f + d;
        d = x * d + b;
        b = x * b + a;
        err = b.abs() + abx * err;
    }

    HornerEval {
        value: b,
        d1: d,
        d2_half: f,
        round_off: err * f64::EPSILON,
    }
}

use crate::{
    complex::array::sort_by_real,
    poly::internals::horner_with_derivatives,
    util::casting::usize_to_f64,
    Complex, ConvergenceWarning,
};

use super::Solution;

/// Fractional steps taken to break limit cycles, one per cycle-break point
const CYCLE_BREAK_FRACTIONS: [f64; 8] = [0.5, 0.25, 0.75, 0.13, 0.38, 0.62, 0.88, 1.0];

/// Imaginary parts smaller than `2 * SNAP_EPSILON * |re|` are dropped from
/// roots found by [`laguerre_all`]
const SNAP_EPSILON: f64 = 2E-6;

/// Factor applied to an estimate whose evaluation overflows, pulling it back
/// toward the origin
const OVERFLOW_DAMPING: f64 = 1.5E-8;

/// Default number of iterations between two cycle-breaking steps
pub const DEFAULT_CYCLE_BREAK_INTERVAL: usize = 1000;

/// Result of a single run of [`laguerre`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaguerreOutcome {
    /// The root, or the best estimate if the iteration did not converge
    pub root: Complex,
    pub iterations: usize,
    pub converged: bool,
}

/// Find a single root using Laguerre's method.
///
/// `coeffs` are in ascending order of degree. Iteration stops when `|p(x)|`
/// drops below the accumulated round-off bound of the evaluation, or when a
/// step no longer changes the estimate. Every `cycle_break_interval`
/// iterations a fractional step is taken instead of the full step, and
/// after `8 * cycle_break_interval` iterations the current estimate is
/// returned with `converged: false`.
///
/// An estimate at which the evaluation overflows is never accepted as a
/// root. It is pulled toward the origin instead, and those iterations count
/// toward the cap.
///
/// ```
/// use complex_poly::{complex, roots::laguerre};
///
/// // x^2 - 2
/// let out = laguerre(&[complex!(-2.0), complex!(0.0), complex!(1.0)], complex!(1.0), 1000);
/// assert!(out.converged);
/// assert!((out.root - complex!(2f64.sqrt())).abs() < 1E-14);
/// ```
#[must_use]
pub fn laguerre(
    coeffs: &[Complex],
    estimate: Complex,
    cycle_break_interval: usize,
) -> LaguerreOutcome {
    log::trace!("starting with arguments: {{degree: {}, estimate: \"{estimate}\", cycle_break_interval: {cycle_break_interval}}}", coeffs.len().saturating_sub(1));

    let interval = cycle_break_interval.max(1);
    let max_iter = CYCLE_BREAK_FRACTIONS.len() * interval;
    let m = usize_to_f64(coeffs.len().saturating_sub(1));

    let mut x = estimate;
    for iter in 1..=max_iter {
        let h = horner_with_derivatives(coeffs, x);

        if !h.value.is_finite() || !h.round_off.is_finite() {
            if !x.is_finite() {
                log::trace!("estimate is not finite, giving up {{iterations: {iter}, x: \"{x}\"}}");
                return LaguerreOutcome {
                    root: x,
                    iterations: iter,
                    converged: false,
                };
            }
            log::trace!("evaluation overflowed, damping estimate {{iteration: {iter}, x: \"{x}\"}}");
            x = x.scale(OVERFLOW_DAMPING);
            continue;
        }

        // stopping criterion 1: value is indistinguishable from round-off
        if h.value.abs() <= h.round_off {
            log::trace!("stopping because value is within round-off {{iterations: {iter}, root: \"{x}\"}}");
            return LaguerreOutcome {
                root: x,
                iterations: iter,
                converged: true,
            };
        }

        let g = h.d1 / h.value;
        let g2 = g.square();
        let hh = g2 - h.d2_half * 2.0 / h.value;
        let sq = ((hh * m - g2) * (m - 1.0)).sqrt();
        let gp = g + sq;
        let gm = g - sq;
        let abp = gp.abs();
        let abm = gm.abs();
        let denominator = if abp < abm { gm } else { gp };

        let dx = if abp.max(abm) > 0.0 {
            Complex::from_real(m) / denominator
        } else {
            log::trace!("zero denominator, perturbing estimate {{iteration: {iter}, x: \"{x}\"}}");
            Complex::polar((1.0 + x.abs()).exp(), usize_to_f64(iter))
        };

        let x1 = x - dx;

        // stopping criterion 2: the step does not move the estimate anymore
        if x1.re() == x.re() && x1.im() == x.im() {
            log::trace!("stopping because the step vanished {{iterations: {iter}, root: \"{x}\"}}");
            return LaguerreOutcome {
                root: x,
                iterations: iter,
                converged: true,
            };
        }

        if iter % interval == 0 {
            let frac = CYCLE_BREAK_FRACTIONS[iter / interval - 1];
            log::trace!("breaking limit cycle {{iteration: {iter}, fraction: {frac}}}");
            x -= dx * frac;
        } else {
            x = x1;
        }
    }

    log::trace!("did not converge {{best_guess: \"{x}\", iterations: {max_iter}}}");
    LaguerreOutcome {
        root: x,
        iterations: max_iter,
        converged: false,
    }
}

/// Find all roots of a polynomial using Laguerre's method with deflation.
///
/// Each root is searched starting from `estimate`, then divided out of a
/// working copy of the coefficients. With `polish` enabled, every root is
/// refined once more against the original coefficients, which undoes most
/// of the error accumulated by repeated deflation. Roots are returned
/// sorted by ascending real part.
///
/// Deflation error grows with the degree, so ill-conditioned polynomials of
/// high degree can still produce inaccurate roots, even after polishing.
#[must_use]
pub fn laguerre_all(
    coeffs: &[Complex],
    polish: bool,
    estimate: Complex,
    cycle_break_interval: usize,
) -> Solution {
    let degree = coeffs.len().saturating_sub(1);
    let mut working = coeffs.to_vec();
    let mut roots = Vec::with_capacity(degree);
    let mut warnings = vec![];

    for j in (1..=degree).rev() {
        let outcome = laguerre(&working[..=j], estimate, cycle_break_interval);
        let mut root = outcome.root;
        if !outcome.converged {
            warnings.push(ConvergenceWarning {
                root_index: roots.len(),
                iterations: outcome.iterations,
                estimate: root,
                polishing: false,
            });
        }
        if root.im().abs() <= 2.0 * SNAP_EPSILON * root.re().abs() {
            root = Complex::from_real(root.re());
        }

        // synthetic division by (x - root)
        let mut b = working[j];
        for jj in (0..j).rev() {
            let c = working[jj];
            working[jj] = b;
            b = root * b + c;
        }
        working.truncate(j);

        roots.push(root);
    }

    if polish {
        for (i, root) in roots.iter_mut().enumerate() {
            let outcome = laguerre(coeffs, *root, cycle_break_interval);
            if outcome.converged {
                *root = outcome.root;
            } else {
                log::trace!("polishing did not converge, keeping deflated root {{index: {i}, root: \"{root}\"}}");
                warnings.push(ConvergenceWarning {
                    root_index: i,
                    iterations: outcome.iterations,
                    estimate: *root,
                    polishing: true,
                });
            }
        }
    }

    sort_by_real(&mut roots);
    Solution { roots, warnings }
}

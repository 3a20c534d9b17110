use anyhow::Result;
use complex_poly::{
    complex, poly,
    roots::{laguerre, RootFinder},
    Complex, ComplexPoly, Error, ImaginaryUnit, InfinityMode, __testing::check_roots,
};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn init_logger() {
    // several tests race to install the logger, only the first one wins
    let _ = SimpleLogger::new().with_level(LevelFilter::Warn).init();
}

fn samples() -> Vec<Complex> {
    vec![
        complex!(1.0, 2.0),
        complex!(-3.5, 0.25),
        complex!(0.25, -7.0),
        complex!(42.0),
        complex!(-0.5, -0.5),
    ]
}

#[test]
fn exp_ln_round_trip() {
    for z in samples() {
        let w = z.ln().exp();
        assert!(w.is_equal_within_limits(z, 1E-12), "{w} != {z}");
    }
}

#[test]
fn add_sub_round_trip() {
    for a in samples() {
        for b in samples() {
            let c = (a + b) - b;
            assert!(c.distance(a) <= 1E-12 * (1.0 + b.abs()), "{c} != {a}");
        }
    }
}

#[test]
fn mul_inverse() {
    for a in samples() {
        let one = a * a.inverse();
        assert!(one.distance(complex!(1.0)) < 1E-14, "{one}");
    }
}

#[test]
fn known_roots() -> Result<()> {
    init_logger();

    let roots = poly![6.0, -5.0, 1.0].roots()?;
    assert!(check_roots(roots, vec![complex!(2.0), complex!(3.0)], 1E-12));

    let roots = poly![-6.0, 11.0, -6.0, 1.0].roots()?;
    assert!(check_roots(
        roots,
        vec![complex!(1.0), complex!(2.0), complex!(3.0)],
        1E-12
    ));

    let roots = poly![1.0, 0.0, 1.0].roots()?;
    assert_eq!(roots, vec![complex!(0.0, -1.0), complex!(0.0, 1.0)]);

    let roots = poly![0.0, 0.0, -1.0, 1.0].roots()?;
    assert_eq!(roots, vec![complex!(0.0), complex!(0.0), complex!(1.0)]);
    Ok(())
}

#[test]
fn roots_to_poly_round_trip() -> Result<()> {
    init_logger();

    let expected = vec![
        complex!(-1.5, 0.5),
        complex!(-1.5, -0.5),
        complex!(0.3),
        complex!(2.0, 1.0),
        complex!(1.0, -3.0),
        complex!(4.0),
    ];
    let p = ComplexPoly::from_roots(&expected) * complex!(0.5, 2.0);
    let roots = p.roots()?;
    assert!(
        check_roots(roots.clone(), expected.clone(), 1E-9),
        "{roots:?} != {expected:?}"
    );

    // the found roots reconstruct the polynomial up to its leading coefficient
    let q = ComplexPoly::from_roots(&roots) * complex!(0.5, 2.0);
    for (a, b) in p.iter().zip(q.iter()) {
        assert!(a.distance(*b) < 1E-8, "{p} != {q}");
    }
    Ok(())
}

#[test]
fn sorted_output() -> Result<()> {
    let p = ComplexPoly::from_roots(&[
        complex!(3.0),
        complex!(-1.0, 2.0),
        complex!(-1.0, -2.0),
        complex!(0.5),
        complex!(-4.0),
    ]);
    let roots = p.roots()?;
    assert!(roots.windows(2).all(|w| w[0].re() <= w[1].re() + 1E-9));
    // conjugate pair comes out with the negative imaginary part first
    assert!(roots[1].im() < 0.0 && roots[2].im() > 0.0);
    Ok(())
}

#[test]
fn invalid_inputs() {
    assert!(matches!(poly![5.0].roots(), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        poly![5.0, 0.0, 0.0, 0.0].roots(),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(ComplexPoly::new(&[]), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        "3+4".parse::<Complex>(),
        Err(Error::Format { .. })
    ));
}

#[test]
fn degradation_reports_warning() -> Result<()> {
    init_logger();

    let p = ComplexPoly::from_roots(&[complex!(1.0), complex!(2.0), complex!(3.0), complex!(4.0)]);

    let outcome = laguerre(p.coeffs(), complex!(1E6), 1);
    assert!(!outcome.converged);
    assert_eq!(outcome.iterations, 8);

    let solution = RootFinder::new()
        .cycle_break_interval(1)
        .initial_estimate(complex!(1E6))
        .solve(&p)?;
    assert!(!solution.is_converged());
    assert_eq!(solution.roots.len(), 4);
    assert!(solution.roots.iter().all(|r| r.is_finite()));
    for w in &solution.warnings {
        assert!(w.estimate.is_finite());
        assert!(w.to_string().contains("did not converge"));
    }

    // the same run without logging reports the same roots
    let quiet = RootFinder::new()
        .cycle_break_interval(1)
        .initial_estimate(complex!(1E6))
        .messages(false)
        .solve(&p)?;
    assert_eq!(quiet, solution);
    Ok(())
}

#[test]
fn far_initial_estimate() -> Result<()> {
    init_logger();

    let expected = [1.0, 2.0, 3.0, 4.0, 5.0].map(Complex::from_real);
    let p = ComplexPoly::from_roots(&expected);

    let solution = RootFinder::new()
        .initial_estimate(complex!(1E200, 1E200))
        .solve(&p)?;
    assert_eq!(solution.roots.len(), 5);
    assert!(solution.roots.iter().all(|r| r.is_finite()));
    // a converged solution has to be an accurate one
    if solution.is_converged() {
        assert!(check_roots(solution.roots, expected.to_vec(), 1E-6));
    }
    Ok(())
}

#[test]
fn infinity_modes() {
    let inf = complex!(f64::INFINITY, 1.0);
    let z = complex!(2.0, -3.0);

    assert_eq!(inf.mul_with(z, InfinityMode::Collapse), Complex::plus_infinity());
    assert_eq!(z.div_with(inf, InfinityMode::Collapse), complex!(0.0));
    assert_eq!(inf.div_with(z, InfinityMode::Collapse), Complex::plus_infinity());

    let p = inf.mul_with(z, InfinityMode::Ieee);
    assert!(p.is_infinite());
    assert_ne!(p, Complex::plus_infinity());

    // the default mode is the one used by the operators
    assert_eq!(inf * z, inf.mul_with(z, InfinityMode::default()));
}

#[test]
fn format_round_trip() -> Result<()> {
    let z: Complex = "1.5 - j2.25".parse()?;
    assert_eq!(z, complex!(1.5, -2.25));
    assert_eq!(z.to_string(), "1.5 - j2.25");
    assert_eq!(z.display_with(ImaginaryUnit::I).to_string(), "1.5 - i2.25");
    assert_eq!("1.5-i2.25".parse::<Complex>()?, z);
    Ok(())
}

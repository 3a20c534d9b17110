//! Exploratory tests which use randomized test cases

use complex_poly::__testing::{
    check_roots, test_case_conj_roots, test_case_roots, RandStreamC64Cartesian, RandStreamR64,
};
use fastrand::Rng;

#[test]
fn test_uniform_real_roots() {
    let case = |deg, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream = RandStreamR64::new(seed_stream.u64(..), -10.0, 10.0);
        let mut scale_stream = RandStreamR64::new(seed_stream.u64(..), 0.1, 10.0);
        for i in 0..100 {
            let (poly, expected_roots) = test_case_roots(&mut roots_stream, &mut scale_stream, deg);
            let roots = poly.roots_no_messages(true, Default::default()).unwrap();
            assert!(
                check_roots(roots.clone(), expected_roots.clone(), 1E-4),
                "{:?} != {:?} @ iter = {}",
                roots,
                expected_roots,
                i
            );
        }
    };

    case(1, 1);
    case(2, 2);
    case(3, 3);
    case(4, 4);
    case(5, 5);
    case(6, 6);
}

#[test]
fn test_uniform_complex_roots() {
    let case = |deg, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream =
            RandStreamC64Cartesian::new(seed_stream.u64(..), -1.0, 1.0, -1.0, 1.0);
        let mut scale_stream =
            RandStreamC64Cartesian::new(seed_stream.u64(..), 0.1, 10.0, 0.1, 10.0);
        for i in 0..100 {
            let (poly, expected_roots) = test_case_roots(&mut roots_stream, &mut scale_stream, deg);
            let roots = poly.roots_no_messages(true, Default::default()).unwrap();
            assert!(
                check_roots(roots.clone(), expected_roots.clone(), 1E-4),
                "{:?} != {:?} @ iter = {}",
                roots,
                expected_roots,
                i
            );
        }
    };

    case(1, 1);
    case(2, 2);
    case(3, 3);
    case(4, 4);
    case(5, 5);
    case(6, 6);
}

#[test]
fn test_conjugate_roots() {
    let case = |deg, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream =
            RandStreamC64Cartesian::new(seed_stream.u64(..), -5.0, 5.0, -5.0, 5.0);
        let mut scale_stream = RandStreamR64::new(seed_stream.u64(..), 0.1, 10.0);
        for i in 0..100 {
            let (poly, expected_roots) =
                test_case_conj_roots(&mut roots_stream, &mut scale_stream, deg);
            let roots = poly.roots_no_messages(true, Default::default()).unwrap();
            assert!(
                check_roots(roots.clone(), expected_roots.clone(), 1E-4),
                "{:?} != {:?} @ iter = {}",
                roots,
                expected_roots,
                i
            );
        }
    };

    case(2, 7);
    case(4, 8);
    case(6, 9);
}

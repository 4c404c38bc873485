// tests/multivector_tests.rs

use ga_core::{Algebra, AlgebraRef, GaError, Multivector, Scalar, Signature};

fn euclidean(n: usize) -> AlgebraRef {
    Algebra::new(Signature::new(n, 0, 0, true).unwrap())
}

#[test]
fn zero_and_component_access() {
    let alg = euclidean(3);
    let mut mv = Multivector::zero(&alg);
    assert_eq!(mv.blade_count(), 8);
    assert!(mv.components().iter().all(|&c| c == 0.0));

    mv.set_component(0b011, 2.5);
    assert_eq!(mv.component(0b011), 2.5);
    assert_eq!(mv.component(0), 0.0);
}

#[test]
fn factory_constructors() {
    let alg = euclidean(3);

    let s = Multivector::scalar(&alg, 4.0);
    assert_eq!(s.component(0), 4.0);

    let e2 = Multivector::basis(&alg, 1).unwrap();
    assert_eq!(e2.component(0b010), 1.0);

    let i = Multivector::pseudoscalar(&alg);
    assert_eq!(i.component(0b111), 1.0);

    // blade axes are canonicalized with parity
    let e12 = Multivector::blade(&alg, &[0, 1], 3.0).unwrap();
    assert_eq!(e12.component(0b011), 3.0);
    let e21 = Multivector::blade(&alg, &[1, 0], 3.0).unwrap();
    assert_eq!(e21.component(0b011), -3.0);

    // repeated axis wedges to zero
    let degenerate = Multivector::blade(&alg, &[1, 1], 3.0).unwrap();
    assert!(degenerate.components().iter().all(|&c| c == 0.0));
}

#[test]
fn out_of_range_axis_is_reported() {
    let alg = euclidean(3);
    let err = Multivector::basis(&alg, 3).unwrap_err();
    assert_eq!(err, GaError::OutOfRange { index: 3, dims: 3 });

    let err = Multivector::blade(&alg, &[0, 5], 1.0).unwrap_err();
    assert_eq!(err, GaError::OutOfRange { index: 5, dims: 3 });
}

#[test]
fn arithmetic_operators() {
    let alg = euclidean(2);
    let a = Multivector::from_components(&alg, vec![1.0, 2.0, 3.0, 4.0]);
    let b = Multivector::from_components(&alg, vec![0.5, 0.5, 0.5, 0.5]);

    let sum = a.clone() + b.clone();
    assert_eq!(sum.components(), &[1.5, 2.5, 3.5, 4.5]);

    let diff = a.clone() - b;
    assert_eq!(diff.components(), &[0.5, 1.5, 2.5, 3.5]);

    let neg = -a.clone();
    assert_eq!(neg.components(), &[-1.0, -2.0, -3.0, -4.0]);

    let scaled = a * 2.0 as Scalar;
    assert_eq!(scaled.components(), &[2.0, 4.0, 6.0, 8.0]);
}

#[test]
#[should_panic]
fn from_components_rejects_wrong_length() {
    let alg = euclidean(2);
    let _ = Multivector::from_components(&alg, vec![1.0; 3]);
}

#[test]
fn equality_requires_the_same_algebra() {
    let alg = euclidean(2);
    let twin = euclidean(2); // same signature, different identity

    let a = Multivector::scalar(&alg, 1.0);
    let b = Multivector::scalar(&alg, 1.0);
    let c = Multivector::scalar(&twin, 1.0);

    assert_eq!(a, b);
    assert!(a.same_algebra(&b));
    assert_ne!(a, c);
    assert!(!a.same_algebra(&c));
}

#[test]
fn display_prints_nonzero_terms() {
    let alg = euclidean(3);
    let mut mv = Multivector::scalar(&alg, 1.0);
    mv.set_component(0b011, 2.0);
    assert_eq!(format!("{}", mv), "1 + 2e12");

    let zero = Multivector::zero(&alg);
    assert_eq!(format!("{}", zero), "0");

    let e3 = Multivector::basis(&alg, 2).unwrap();
    assert_eq!(format!("{}", e3), "1e3");
}

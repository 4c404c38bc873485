// tests/dual_tests.rs

use ga_core::{Algebra, AlgebraRef, Multivector, Scalar, Signature};

const EPS: Scalar = 1e-12;

fn euclidean3() -> AlgebraRef {
    Algebra::new(Signature::new(3, 0, 0, true).unwrap())
}

fn assert_only_component(mv: &Multivector, mask: u16, value: Scalar) {
    for m in 0..mv.blade_count() {
        let expected = if m as u16 == mask { value } else { 0.0 };
        assert!(
            (mv.component(m as u16) - expected).abs() < EPS,
            "component {m:#05b}: got {}, expected {}",
            mv.component(m as u16),
            expected
        );
    }
}

#[test]
fn euclidean3_dual_table() {
    let alg = euclidean3();

    // the full complement table for Cl(3,0,0), signs included
    let cases: [(u16, u16, Scalar); 8] = [
        (0b000, 0b111, 1.0),  // dual(1) = e123
        (0b001, 0b110, 1.0),  // dual(e1) = e23
        (0b010, 0b101, -1.0), // dual(e2) = -e13
        (0b100, 0b011, 1.0),  // dual(e3) = e12
        (0b011, 0b100, 1.0),  // dual(e12) = e3
        (0b101, 0b010, -1.0), // dual(e13) = -e2
        (0b110, 0b001, 1.0),  // dual(e23) = e1
        (0b111, 0b000, 1.0),  // dual(e123) = 1
    ];

    for (mask, comp, sign) in cases {
        let mut mv = Multivector::zero(&alg);
        mv.set_component(mask, 1.0);
        assert_only_component(&mv.dual(), comp, sign);
    }
}

#[test]
fn euclidean3_dual_is_an_involution() {
    let alg = euclidean3();
    let a = Multivector::from_components(
        &alg,
        vec![1.0, -2.0, 0.5, 3.0, 4.0, -1.5, 2.5, -0.25],
    );

    let dd = a.dual().dual();
    for m in 0..a.blade_count() {
        assert!(
            (dd.component(m as u16) - a.component(m as u16)).abs() < EPS,
            "component {m:#05b} not restored"
        );
    }
}

#[test]
fn dual_is_linear() {
    let alg = euclidean3();
    let a = Multivector::from_components(&alg, vec![1.0, 2.0, 0.0, -1.0, 0.5, 0.0, 3.0, 1.0]);
    let b = Multivector::from_components(&alg, vec![0.0, 1.0, -2.0, 0.0, 1.5, 2.0, 0.0, -1.0]);

    let lhs = (a.clone() + b.clone()).dual();
    let rhs = a.dual() + b.dual();
    for m in 0..lhs.blade_count() {
        assert!((lhs.component(m as u16) - rhs.component(m as u16)).abs() < EPS);
    }
}

#[test]
fn degenerate_dual_still_maps_complements() {
    // In (3,0,1) a blade and its complement never share an axis, so the
    // complement product stays defined even though the metric is degenerate.
    let alg = Algebra::new(Signature::new(3, 0, 1, true).unwrap());
    let e1 = Multivector::basis(&alg, 0).unwrap();

    let d = e1.dual();
    let comp = alg.pseudoscalar_mask() ^ 0b0001;
    assert!((d.component(comp).abs() - 1.0).abs() < EPS);
}

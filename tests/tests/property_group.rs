//! Property-based tests for the curve group law

use proptest::prelude::*;
use smallecc_algorithms::ec::{Curve, Point};
use smallecc_params::curves::{M61_K7, PAAR_P17, TOY_K7_P17};
use smallecc_tests::{preset, repeated_addition, subgroup};

/// Every affine point of a curve together with the identity
fn all_points(curve: &Curve) -> Vec<Point> {
    let mut points: Vec<Point> = curve.points().collect();
    points.push(Point::Infinity);
    points
}

#[test]
fn toy_subgroup_closes_without_repetition() {
    let (curve, g) = preset(&TOY_K7_P17);
    let group = subgroup(&curve, &g);
    // the listing stops before the identity
    assert_eq!(group.len() as u64 + 1, TOY_K7_P17.order.unwrap());
    for (i, point) in group.iter().enumerate() {
        assert_eq!(curve.scalar_mul(&g, i as i64 + 1), Ok(*point));
        assert!(group[..i].iter().all(|earlier| earlier != point));
    }
    let order = group.len() as i64 + 1;
    assert_eq!(curve.scalar_mul(&g, order), Ok(Point::Infinity));
    assert_eq!(curve.scalar_mul(&g, order + 1), Ok(g));
}

#[test]
fn paar_group_is_cyclic_of_prime_order() {
    let (curve, g) = preset(&PAAR_P17);
    let group = subgroup(&curve, &g);
    assert_eq!(group.len(), 18);
    let mut sorted = group.clone();
    sorted.sort_by_key(|p| p.coordinates());
    assert_eq!(sorted, curve.points().collect::<Vec<_>>());
}

#[test]
fn negation_annihilates_every_point() {
    for params in [TOY_K7_P17, PAAR_P17] {
        let (curve, _) = preset(&params);
        for point in curve.points() {
            let neg = curve.negate(&point);
            assert_eq!(curve.add(&point, &neg), Ok(Point::Infinity), "P = {}", point);
            if point.y() != Some(0) {
                assert_ne!(neg, point);
            }
        }
    }
}

#[test]
fn group_axioms_exhaustive_on_toy_curve() {
    let (curve, _) = preset(&TOY_K7_P17);
    let points = all_points(&curve);
    for a in &points {
        for b in &points {
            let ab = curve.add(a, b).unwrap();
            assert!(curve.contains(&ab));
            assert_eq!(ab, curve.add(b, a).unwrap());
            for c in &points {
                let left = curve.add(&ab, c).unwrap();
                let right = curve.add(a, &curve.add(b, c).unwrap()).unwrap();
                assert_eq!(left, right, "({} + {}) + {}", a, b, c);
            }
        }
    }
}

proptest! {
    #[test]
    fn scalar_mul_matches_repeated_addition(k in 0u64..200, index in 0usize..18) {
        let (curve, _) = preset(&PAAR_P17);
        let point = curve.points().nth(index).unwrap();
        prop_assert_eq!(curve.scalar_mul(&point, k as i64).unwrap(), repeated_addition(&curve, &point, k));
    }

    #[test]
    fn scalar_mul_is_linear(k1 in -(1i64 << 40)..(1 << 40), k2 in -(1i64 << 40)..(1 << 40)) {
        let (curve, g) = preset(&M61_K7);
        let lhs = curve.scalar_mul(&g, k1 + k2).unwrap();
        let rhs = curve.add(&curve.scalar_mul(&g, k1).unwrap(), &curve.scalar_mul(&g, k2).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
        prop_assert!(curve.contains(&lhs));
    }

    #[test]
    fn scalar_mul_composes(k1 in 1i64..(1 << 30), k2 in 1i64..(1 << 30)) {
        let (curve, g) = preset(&M61_K7);
        let inner = curve.scalar_mul(&g, k1).unwrap();
        prop_assert_eq!(curve.scalar_mul(&inner, k2).unwrap(), curve.scalar_mul(&g, k1 * k2).unwrap());
    }

    #[test]
    fn negative_scalar_negates(k in 1i64..(1 << 40)) {
        let (curve, g) = preset(&M61_K7);
        let pos = curve.scalar_mul(&g, k).unwrap();
        prop_assert_eq!(curve.scalar_mul(&g, -k).unwrap(), curve.negate(&pos));
    }
}

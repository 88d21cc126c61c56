//! Property-based tests for the modular arithmetic layer

use proptest::prelude::*;
use smallecc_algorithms::modular::{extended_euclid, gcd, mod_mul, mod_pow};
use smallecc_algorithms::{mod_inverse, reduce, Error};
use smallecc_tests::{inverse_brute_force, SMALL_PRIMES};

/// A prime from the fixture list together with a unit modulo it
fn prime_and_unit() -> impl Strategy<Value = (i64, i64)> {
    prop::sample::select(SMALL_PRIMES.to_vec()).prop_flat_map(|p| (Just(p), 1..p))
}

#[test]
fn inverse_law_holds_for_every_unit() {
    for &p in SMALL_PRIMES.iter() {
        for a in 1..p {
            let r = mod_inverse(a, p).unwrap();
            assert!((0..p).contains(&r));
            assert_eq!(mod_mul(a, r, p), 1, "inverse of {} mod {}", a, p);
            assert_eq!(Some(r), inverse_brute_force(a, p));
        }
    }
}

#[test]
fn zero_and_modulus_have_no_inverse() {
    for &p in SMALL_PRIMES.iter() {
        for a in [0, p, 2 * p, -p] {
            assert_eq!(
                mod_inverse(a, p),
                Err(Error::NoInverseExists {
                    context: "mod_inverse",
                    value: 0,
                    modulus: p
                })
            );
        }
    }
}

#[test]
fn composite_moduli_fail_for_shared_factors() {
    assert!(mod_inverse(6, 15).unwrap_err().is_no_inverse());
    assert_eq!(mod_inverse(7, 15), Ok(13));
}

proptest! {
    #[test]
    fn inverse_of_arbitrary_representatives((p, a) in prime_and_unit(), shift in -1000i64..1000) {
        let unreduced = a + shift * p;
        let r = mod_inverse(unreduced, p).unwrap();
        prop_assert_eq!(mod_mul(unreduced, r, p), 1);
        prop_assert_eq!(mod_inverse(r, p).unwrap(), a);
    }

    #[test]
    fn bezout_identity(r0 in -1_000_000_000i64..1_000_000_000, r1 in -1_000_000_000i64..1_000_000_000) {
        let b = extended_euclid(r0, r1);
        prop_assert!(b.gcd >= 0);
        prop_assert_eq!(r0 as i128 * b.s as i128 + r1 as i128 * b.t as i128, b.gcd as i128);
        prop_assert_eq!(b.gcd, gcd(r1, r0));
        if b.gcd != 0 {
            prop_assert_eq!(r0 % b.gcd, 0);
            prop_assert_eq!(r1 % b.gcd, 0);
        }
    }

    #[test]
    fn reduce_is_canonical(a in any::<i64>(), m in 1i64..(1 << 62)) {
        let r = reduce(a, m);
        prop_assert!((0..m).contains(&r));
        prop_assert_eq!((a as i128 - r as i128).rem_euclid(m as i128), 0);
    }

    #[test]
    fn fermat_little_theorem((p, a) in prime_and_unit()) {
        prop_assert_eq!(mod_pow(a, p - 1, p).unwrap(), 1);
        prop_assert_eq!(mod_pow(a, p - 2, p).unwrap(), mod_inverse(a, p).unwrap());
    }

    #[test]
    fn large_modulus_inverse(a in 1i64..2_305_843_009_213_693_951) {
        let p = 2_305_843_009_213_693_951i64;
        let r = mod_inverse(a, p).unwrap();
        prop_assert_eq!(mod_mul(a, r, p), 1);
    }
}

use num_bigint::BigInt;

use ecgroup::curves::{self, Curve};

fn int(n: i64) -> BigInt {
    BigInt::from(n)
}

/// The group laws every curve must satisfy, checked one curve at a time
/// so a failure names the offender.
fn check_group_laws(curve: Curve) {
    let name = curve.name();
    let g = curve.generator();
    let identity = curve.identity();

    assert!(identity.is_identity(), "{name}: identity flag");
    assert!(!identity.is_valid(), "{name}: identity is not a finite point");
    assert!((-curve.identity()).is_identity(), "{name}: -identity");
    assert!(g.is_valid(), "{name}: generator on curve");

    assert!((&g * &int(0)).is_identity(), "{name}: G * 0");
    assert_eq!(&g * &int(1), g, "{name}: G * 1");
    assert_eq!(&g + &(&g * &int(0)), g, "{name}: G + G * 0");
    assert_eq!(&g + &g, &g * &int(2), "{name}: G + G");
    assert_eq!(&(&g * &int(2)) + &g, &g * &int(3), "{name}: 2G + G");
    assert_eq!(&(&g * &int(2)) - &g, g, "{name}: 2G - G");
    assert_eq!(&(&g * &int(6)) / &int(3), &g * &int(2), "{name}: 6G / 3");

    assert!(
        (&g * curve.order()).is_identity(),
        "{name}: order * G must vanish",
    );
}

#[test]
fn group_laws_hold_on_every_curve() {
    for curve in curves::supported() {
        check_group_laws(curve);
    }
}

#[test]
fn scalar_multiplication_commutes() {
    let mut rng = rand::thread_rng();

    for curve in curves::supported() {
        let k = curve.private_key(&mut rng, &int(1));
        let m = curve.private_key(&mut rng, &int(1));
        let g = curve.generator();

        assert_eq!(
            &(&g * &k) * &m,
            &(&g * &m) * &k,
            "{}: (kG)m == (mG)k",
            curve.name(),
        );
    }
}

#[test]
fn negation_inverts_addition() {
    for curve in curves::supported() {
        let g = curve.generator();
        let two_g = &g * &int(2);

        assert!(
            (&two_g + &-&two_g).is_identity(),
            "{}: P + (-P)",
            curve.name(),
        );
        assert_eq!(&(&two_g - &g) + &g, two_g, "{}: (P - G) + G", curve.name());
    }
}

#[test]
fn private_keys_stay_in_range() {
    let mut rng = rand::thread_rng();
    let min = int(1);

    for curve in curves::supported() {
        for _ in 0..8 {
            let k = curve.private_key(&mut rng, &min);
            assert!(k >= min, "{}: key below minimum", curve.name());
            assert!(&k < curve.order(), "{}: key above order", curve.name());
        }
    }
}

#[test]
fn identity_formats_as_infinity() {
    let identity = curves::secp256r1().identity();
    assert_eq!(identity.to_string(), "secp256r1(∞)");
}

#[test]
fn generator_formats_as_fixed_width_hex() {
    let g = curves::secp192r1().generator();
    assert_eq!(
        g.to_string(),
        "secp192r1(188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012, \
         07192B95FFC8DA78631011ED6B24CDD573F977A11E794811)",
    );
}

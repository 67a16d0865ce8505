use num_bigint::BigInt;

use ecgroup::math::{Endian, egcd, inv, ldec, legendre, lenc, sqrt};

fn int(n: i64) -> BigInt {
    BigInt::from(n)
}

#[test]
fn legendre_classifies_residues() {
    assert_eq!(legendre(&int(27), &int(7)), -1);
    assert_eq!(legendre(&int(28), &int(7)), 0);
    assert_eq!(legendre(&int(29), &int(7)), 1);
}

#[test]
fn sqrt_mod_13() {
    let p = int(13);
    let expected = [0, 1, 0, 9, 11, 0, 0, 0, 0, 3, 7, 0, 8];

    for (n, root) in expected.iter().enumerate() {
        let r = sqrt(&int(n as i64), &p);
        assert_eq!(r, int(*root), "sqrt({n}) mod 13");
        if *root != 0 {
            assert_eq!((&r * &r) % &p, int(n as i64), "root of {n} must square back");
        }
    }
}

#[test]
fn sqrt_shortcut_for_three_mod_four() {
    // 7 ≡ 3 (mod 4), so the exponent shortcut is taken; 4² = 2 (mod 7).
    assert_eq!(sqrt(&int(2), &int(7)), int(4));
}

#[test]
fn sqrt_of_non_residue_is_zero() {
    assert_eq!(sqrt(&int(5), &int(13)), int(0));
    assert_eq!(sqrt(&int(0), &int(13)), int(0));
}

#[test]
fn egcd_bezout_identity() {
    let (g, x, y) = egcd(&int(3), &int(7));
    assert_eq!((g.clone(), x.clone(), y.clone()), (int(1), int(-2), int(1)));
    assert_eq!(int(3) * x + int(7) * y, g);
}

#[test]
fn inverse_exists_only_for_coprime_moduli() {
    assert_eq!(inv(&int(7), &int(13)), Some(int(2)));
    assert_eq!(inv(&int(6), &int(9)), None);
}

#[test]
fn lenc_pads_to_fixed_width() {
    assert_eq!(lenc(&int(0xff), 1, Endian::Big).unwrap(), vec![0xff]);
    assert_eq!(lenc(&int(0xff), 1, Endian::Little).unwrap(), vec![0xff]);
    assert_eq!(lenc(&int(0xff), 2, Endian::Big).unwrap(), vec![0x00, 0xff]);
    assert_eq!(lenc(&int(0xff), 2, Endian::Little).unwrap(), vec![0xff, 0x00]);
}

#[test]
fn lenc_rejects_values_that_do_not_fit() {
    assert!(lenc(&int(0x100), 1, Endian::Big).is_err());
    assert!(lenc(&int(-1), 4, Endian::Big).is_err());
}

#[test]
fn ldec_reads_both_byte_orders() {
    assert_eq!(ldec(&[0xff], Endian::Big), int(255));
    assert_eq!(ldec(&[0xff], Endian::Little), int(255));
    assert_eq!(ldec(&[0x00, 0xff], Endian::Big), int(255));
    assert_eq!(ldec(&[0x00, 0xff], Endian::Little), int(65280));
}

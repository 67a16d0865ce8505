//! The SEC 2 / NIST prime curves.
//!
//! Parameters are transcribed from SEC 2 version 2.0; the generator
//! coordinates and orders also appear in FIPS 186-4 appendix D under the
//! P-xxx names.

use once_cell::sync::Lazy;

use super::hex_int;
use super::weierstrass::Params;

pub(super) static SECP192R1: Lazy<Params> = Lazy::new(|| Params {
    name: "secp192r1",
    aliases: &["P192", "P-192"],
    oid: Some("1.2.840.10045.3.1.1"),
    p: hex_int("fffffffffffffffffffffffffffffffeffffffffffffffff"),
    a: hex_int("fffffffffffffffffffffffffffffffefffffffffffffffc"),
    b: hex_int("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
    order: hex_int("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
    cofactor: 1,
    bits: 192,
    gx: hex_int("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
    gy: hex_int("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
});

pub(super) static SECP224R1: Lazy<Params> = Lazy::new(|| Params {
    name: "secp224r1",
    aliases: &["P224", "P-224"],
    oid: Some("1.3.132.0.33"),
    p: hex_int("ffffffffffffffffffffffffffffffff000000000000000000000001"),
    a: hex_int("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
    b: hex_int("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
    order: hex_int("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    cofactor: 1,
    bits: 224,
    gx: hex_int("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
    gy: hex_int("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
});

pub(super) static SECP256R1: Lazy<Params> = Lazy::new(|| Params {
    name: "secp256r1",
    aliases: &["P256", "P-256"],
    oid: Some("1.2.840.10045.3.1.7"),
    p: hex_int("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    a: hex_int("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
    b: hex_int("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    order: hex_int("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    cofactor: 1,
    bits: 256,
    gx: hex_int("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
    gy: hex_int("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
});

#[rustfmt::skip]
pub(super) static SECP384R1: Lazy<Params> = Lazy::new(|| Params {
    name: "secp384r1",
    aliases: &["P384", "P-384"],
    oid: Some("1.3.132.0.34"),
    p: hex_int("fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"),
    a: hex_int("fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc"),
    b: hex_int("b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef"),
    order: hex_int("ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"),
    cofactor: 1,
    bits: 384,
    gx: hex_int("aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"),
    gy: hex_int("3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"),
});

#[rustfmt::skip]
pub(super) static SECP521R1: Lazy<Params> = Lazy::new(|| Params {
    name: "secp521r1",
    aliases: &["P521", "P-521"],
    oid: Some("1.3.132.0.35"),
    p: hex_int("01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
    a: hex_int("01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc"),
    b: hex_int("0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00"),
    order: hex_int("01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"),
    cofactor: 1,
    bits: 521,
    gx: hex_int("00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"),
    gy: hex_int("011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650"),
});

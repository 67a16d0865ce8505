//! The CFRG twisted Edwards curves.
//!
//! `edwards25519` is the curve underlying Ed25519 (RFC 8032), defined
//! over the field of `2^255 - 19` with `a = -1`; `edwards448` is the
//! untwisted Goldilocks curve over `2^448 - 2^224 - 1`. The `bits` widths
//! follow the RFC 8032 encodings: 255 leaves the top bit of a 32-byte
//! string free for the sign of x, 455 does the same for a 57-byte string.

use num_bigint::BigInt;
use once_cell::sync::Lazy;

use super::edwards::Params;
use super::hex_int;

pub(super) static EDWARDS25519: Lazy<Params> = Lazy::new(|| Params {
    name: "edwards25519",
    aliases: &["ed25519"],
    oid: None,
    p: hex_int("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"),
    a: BigInt::from(-1),
    d: hex_int("52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3"),
    order: hex_int("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"),
    cofactor: 8,
    bits: 255,
    gx: hex_int("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
    gy: hex_int("6666666666666666666666666666666666666666666666666666666666666658"),
});

// The base point printed in RFC 7748 lies outside the prime-order
// subgroup (its order is twice the group order). The generator below is
// its double, which has order exactly `order`.
#[rustfmt::skip]
pub(super) static EDWARDS448: Lazy<Params> = Lazy::new(|| Params {
    name: "edwards448",
    aliases: &["ed448"],
    oid: None,
    p: hex_int("fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
    a: BigInt::from(1),
    d: hex_int("d78b4bdc7f0daf19f24f38c29373a2ccad46157242a50f37809b1da3412a12e79ccc9c81264cfe9ad080997058fb61c4243cc32dbaa156b9"),
    order: hex_int("3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3"),
    cofactor: 4,
    bits: 455,
    gx: hex_int("448dfc840aa2e026c549e279d1dd30fd383a6fcb62c39866a2eb09071e18cc0db5c90b56a8a6cc58206d42b699c7f19d57609c3459f9bbb0"),
    gy: hex_int("289ded68857a5e30ebb712bce84346051d99e5e7fcd7dcd2948f8eeeffd75a0600968505a7a501ae3a811aba3408956ce924a6860daafa37"),
});

use num_bigint::BigInt;
use sha2::{Digest, Sha256, Sha384, Sha512};

use ecgroup::curves::{self, Curve};
use ecgroup::signatures::ecdsa;

fn hex(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 16).unwrap()
}

struct Rfc4754Vector {
    curve: Curve,
    digest: Vec<u8>,
    prv: BigInt,
    k: BigInt,
    r: BigInt,
    s: BigInt,
}

/// The "abc" signing vectors of RFC 4754 §8.
fn rfc4754_vectors() -> Vec<Rfc4754Vector> {
    vec![
        Rfc4754Vector {
            curve: curves::secp256r1(),
            digest: Sha256::digest(b"abc").to_vec(),
            prv: hex("DC51D3866A15BACDE33D96F992FCA99DA7E6EF0934E7097559C27F1614C88A7F"),
            k: hex("9E56F509196784D963D1C0A401510EE7ADA3DCC5DEE04B154BF61AF1D5A6DECE"),
            r: hex("CB28E0999B9C7715FD0A80D8E47A77079716CBBF917DD72E97566EA1C066957C"),
            s: hex("86FA3BB4E26CAD5BF90B7F81899256CE7594BB1EA0C89212748BFF3B3D5B0315"),
        },
        Rfc4754Vector {
            curve: curves::secp384r1(),
            digest: Sha384::digest(b"abc").to_vec(),
            prv: hex(
                "0BEB646634BA87735D77AE4809A0EBEA865535DE4C1E1DCB692E84708E81A5AF\
                 62E528C38B2A81B35309668D73524D9F",
            ),
            k: hex(
                "B4B74E44D71A13D568003D7489908D564C7761E229C58CBFA18950096EB7463B\
                 854D7FA992F934D927376285E63414FA",
            ),
            r: hex(
                "FB017B914E29149432D8BAC29A514640B46F53DDAB2C69948084E2930F1C8F7E\
                 08E07C9C63F2D21A07DCB56A6AF56EB3",
            ),
            s: hex(
                "B263A1305E057F984D38726A1B46874109F417BCA112674C528262A40A629AF1\
                 CBB9F516CE0FA7D2FF630863A00E8B9F",
            ),
        },
        Rfc4754Vector {
            curve: curves::secp521r1(),
            digest: Sha512::digest(b"abc").to_vec(),
            prv: hex(
                "0065FDA3409451DCAB0A0EAD45495112A3D813C17BFD34BDF8C1209D7DF58491\
                 20597779060A7FF9D704ADF78B570FFAD6F062E95C7E0C5D5481C5B153B48B37\
                 5FA1",
            ),
            k: hex(
                "00C1C2B305419F5A41344D7E4359933D734096F556197A9B244342B8B62F46F9\
                 373778F9DE6B6497B1EF825FF24F42F9B4A4BD7382CFC3378A540B1B7F0C1B95\
                 6C2F",
            ),
            r: hex(
                "0154FD3836AF92D0DCA57DD5341D3053988534FDE8318FC6AAAAB68E2E6F4339\
                 B19F2F281A7E0B22C269D93CF8794A9278880ED7DBB8D9362CAEACEE54432055\
                 2251",
            ),
            s: hex(
                "017705A7030290D1CEB605A9A1BB03FF9CDD521E87A696EC926C8C10C8362DF4\
                 975367101F67D1CF9BCCBF2F3D239534FA509E70AAC851AE01AAC68D62F86647\
                 2660",
            ),
        },
    ]
}

#[test]
fn sign_reproduces_rfc4754_vectors() {
    let mut rng = rand::thread_rng();

    for v in rfc4754_vectors() {
        let (r, s) =
            ecdsa::sign(v.curve, &v.prv, &v.digest, Some(&v.k), &mut rng).unwrap();
        assert_eq!(r, v.r, "{}: r", v.curve.name());
        assert_eq!(s, v.s, "{}: s", v.curve.name());
    }
}

#[test]
fn verify_accepts_rfc4754_vectors() {
    for v in rfc4754_vectors() {
        let public = &v.curve.generator() * &v.prv;
        assert!(
            ecdsa::verify(&public, &v.digest, &v.r, &v.s),
            "{}: valid signature must verify",
            v.curve.name(),
        );
    }
}

#[test]
fn verify_rejects_zero_signature_components() {
    for v in rfc4754_vectors() {
        let public = &v.curve.generator() * &v.prv;
        let zero = BigInt::from(0);

        assert!(!ecdsa::verify(&public, &v.digest, &zero, &v.s));
        assert!(!ecdsa::verify(&public, &v.digest, &v.r, &zero));
        assert!(!ecdsa::verify(&public, &v.digest, v.curve.order(), &v.s));
    }
}

#[test]
fn verify_rejects_wrong_digest_and_wrong_key() {
    let vectors = rfc4754_vectors();
    let v = &vectors[0];
    let public = &v.curve.generator() * &v.prv;

    let wrong_digest = Sha256::digest(b"abd").to_vec();
    assert!(!ecdsa::verify(&public, &wrong_digest, &v.r, &v.s));

    let wrong_key = &v.curve.generator() * &BigInt::from(2);
    assert!(!ecdsa::verify(&wrong_key, &v.digest, &v.r, &v.s));
}

#[test]
fn verify_rejects_small_order_public_key() {
    // order * G is the identity, which is not a valid public key.
    let vectors = rfc4754_vectors();
    let v = &vectors[0];
    let public = &v.curve.generator() * v.curve.order();
    assert!(!ecdsa::verify(&public, &v.digest, &v.r, &v.s));
}

#[test]
fn sign_and_verify_with_random_keys() {
    let mut rng = rand::thread_rng();
    let one = BigInt::from(1);

    for curve in [curves::secp256r1(), curves::brainpool_p320r1()] {
        let prv = curve.private_key(&mut rng, &one);
        let public = &curve.generator() * &prv;
        let digest = Sha256::digest(b"sample message").to_vec();

        let (r, s) = ecdsa::sign(curve, &prv, &digest, None, &mut rng).unwrap();
        assert!(ecdsa::verify(&public, &digest, &r, &s), "{}", curve.name());
    }
}

#[test]
fn sign_rejects_out_of_range_scalars() {
    let mut rng = rand::thread_rng();
    let curve = curves::secp256r1();
    let digest = Sha256::digest(b"abc").to_vec();

    let zero = BigInt::from(0);
    assert!(ecdsa::sign(curve, &zero, &digest, None, &mut rng).is_err());
    assert!(ecdsa::sign(curve, curve.order(), &digest, None, &mut rng).is_err());
    assert!(
        ecdsa::sign(curve, &BigInt::from(7), &digest, Some(&zero), &mut rng).is_err(),
        "a zero nonce override must be rejected",
    );
}

#[test]
fn sign_is_not_defined_for_edwards_curves() {
    let mut rng = rand::thread_rng();
    let curve = curves::edwards25519();
    let digest = Sha256::digest(b"abc").to_vec();

    assert!(ecdsa::sign(curve, &BigInt::from(7), &digest, None, &mut rng).is_err());
    assert!(!ecdsa::verify(
        &(&curve.generator() * &BigInt::from(7)),
        &digest,
        &BigInt::from(1),
        &BigInt::from(1),
    ));
}

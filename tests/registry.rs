use ecgroup::curves::{find, supported};

#[test]
fn find_accepts_canonical_names() {
    for name in ["secp256r1", "brainpoolP512r1", "edwards448", "MDC201601"] {
        assert_eq!(find(name).unwrap().name(), name);
    }
}

#[test]
fn find_accepts_nist_shorthands() {
    assert_eq!(find("P-256").unwrap().name(), "secp256r1");
    assert_eq!(find("P256").unwrap().name(), "secp256r1");
    assert_eq!(find("P-384").unwrap().name(), "secp384r1");
    assert_eq!(find("P-521").unwrap().name(), "secp521r1");
}

#[test]
fn find_accepts_short_aliases() {
    assert_eq!(find("ed25519").unwrap().name(), "edwards25519");
    assert_eq!(find("ed448").unwrap().name(), "edwards448");
}

#[test]
fn find_accepts_dotted_oids() {
    assert_eq!(find("1.2.840.10045.3.1.1").unwrap().name(), "secp192r1");
    assert_eq!(find("1.2.840.10045.3.1.7").unwrap().name(), "secp256r1");
    assert_eq!(find("1.3.132.0.35").unwrap().name(), "secp521r1");
    assert_eq!(find("1.3.36.3.3.2.8.1.1.7").unwrap().name(), "brainpoolP256r1");
}

#[test]
fn find_rejects_unknown_identifiers() {
    let err = find("snoopyCurve").unwrap_err();
    assert!(err.to_string().contains("snoopyCurve"));
    assert!(find("").is_err());
}

#[test]
fn supported_lists_every_curve_once() {
    let mut names: Vec<&str> = supported().iter().map(|c| c.name()).collect();
    names.sort_unstable();

    assert_eq!(
        names,
        [
            "MDC201601",
            "brainpoolP160r1",
            "brainpoolP192r1",
            "brainpoolP224r1",
            "brainpoolP256r1",
            "brainpoolP320r1",
            "brainpoolP384r1",
            "brainpoolP512r1",
            "edwards25519",
            "edwards448",
            "secp192r1",
            "secp224r1",
            "secp256r1",
            "secp384r1",
            "secp521r1",
        ],
    );
}

#[test]
fn curve_constants_are_coherent() {
    for curve in supported() {
        assert!(curve.cofactor() >= 1, "{}", curve.name());
        assert!(
            curve.order() < curve.prime(),
            "{}: order below the field prime",
            curve.name(),
        );
        assert!(curve.bits() >= 160, "{}", curve.name());
    }
}

//! The Million Dollar Curve, MDC201601.
//!
//! A twisted Edwards curve whose parameters were drawn from publicly
//! verifiable lottery outputs. The defining publication states the
//! constants in decimal, which is preserved here.

use num_bigint::BigInt;
use once_cell::sync::Lazy;

use super::dec_int;
use super::edwards::Params;

#[rustfmt::skip]
pub(super) static MDC201601: Lazy<Params> = Lazy::new(|| Params {
    name: "MDC201601",
    aliases: &[],
    oid: None,
    p: dec_int("109112363276961190442711090369149551676330307646118204517771511330536253156371"),
    a: BigInt::from(1),
    d: dec_int("39384817741350628573161184301225915800358770588933756071948264625804612259721"),
    order: dec_int("27278090819240297610677772592287387918930509574048068887630978293185521973243"),
    cofactor: 4,
    bits: 256,
    gx: dec_int("82549803222202399340024462032964942512025856818700414254726364205096731424315"),
    gy: dec_int("91549545637415734422658288799119041756378259523097147807813396915125932811445"),
});

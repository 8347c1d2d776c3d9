use bigint::U256;

use std::fmt::Debug;

pub trait Modulus: Clone + Copy + Debug + PartialEq + Eq + Send + Sync {
    const PRIME_MODULUS: U256;
}

/// Base field of Curve25519, `2^255 - 19`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve25519Base;

impl Modulus for Curve25519Base {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");
}

/// Montgomery coefficient of Curve25519 over [`Curve25519Base`].
pub const CURVE25519_A: u64 = 486662;

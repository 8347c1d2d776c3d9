use crate::Ring;

use num_bigint::BigInt;

/// The integers form a ring but not a field, so points over `BigInt`
/// support doubling and differential addition only.
impl Ring for BigInt {
    fn zero() -> Self {
        Self::from(0u8)
    }

    fn one() -> Self {
        Self::from(1u8)
    }

    fn from_u64(num: u64) -> Self {
        Self::from(num)
    }
}

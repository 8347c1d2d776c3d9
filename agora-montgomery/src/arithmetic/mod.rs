mod field;
mod modular;
mod modulus;

pub use field::FieldElement;
pub use modular::Modular;
pub use modulus::{Curve25519Base, Modulus, CURVE25519_A};

/// Elliptic curve cryptography on secp256r1 (NIST P-256).
///
/// Provides private keys, public keys, DER-encoded ECDSA signatures, and the
/// `Key` pair that dispatches on the private key type discriminant.

pub mod key;
pub mod private_key;
pub mod public_key;
pub mod signature;

pub use key::{Key, KeyFormat, CURVE_NAME, SECP256K1_PREFIX, SECP256R1_PREFIX};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;

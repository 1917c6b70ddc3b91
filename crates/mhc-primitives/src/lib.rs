/// MHC SDK - Cryptographic primitives and canonical encoding.
///
/// This crate provides the foundational building blocks for the MHC SDK:
/// - SHA-256 hashing of signing payloads
/// - Tagged variable-length integer encoding (varint) for canonical payloads
/// - secp256r1 (NIST P-256) keys, ECDSA signatures and DER encodings
/// - Private key type dispatch on the hex discriminant
/// - Account address handling

pub mod address;
pub mod ec;
pub mod hash;
pub mod util;

mod error;
pub use address::Address;
pub use ec::{Key, KeyFormat, PrivateKey, PublicKey, Signature};
pub use error::PrimitivesError;
pub use util::{encode_varint, Varint};

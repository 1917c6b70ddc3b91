//! secp256r1 private key with SEC1 DER serialization.
//!
//! Wraps a p256 secret key and adds OS-entropy generation with explicit
//! failure reporting, SEC1 `ECPrivateKey` import/export and randomized
//! ECDSA signing of precomputed digests.

use std::fmt;

use p256::ecdsa::signature::hazmat::RandomizedPrehashSigner;
use p256::ecdsa::SigningKey;
use p256::SecretKey;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a raw private scalar in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// A secp256r1 private key for signing.
#[derive(Clone)]
pub struct PrivateKey {
    /// The underlying p256 secret scalar, zeroized on drop.
    inner: SecretKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    ///
    /// # Returns
    /// A new `PrivateKey`, or `CryptoUnavailable` if the OS entropy source fails.
    pub fn generate() -> Result<Self, PrimitivesError> {
        let mut seed = Zeroizing::new([0u8; PRIVATE_KEY_BYTES_LEN]);
        loop {
            OsRng
                .try_fill_bytes(seed.as_mut())
                .map_err(|e| PrimitivesError::CryptoUnavailable(e.to_string()))?;
            // Zero or >= n is rejected; draw again.
            if let Ok(inner) = SecretKey::from_slice(seed.as_ref()) {
                return Ok(PrivateKey { inner });
            }
        }
    }

    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the scalar is in range, `MalformedKey` otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::MalformedKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let inner =
            SecretKey::from_slice(bytes).map_err(|e| PrimitivesError::MalformedKey(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    /// Parse a SEC1 DER `ECPrivateKey` structure on secp256r1.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or `MalformedKey` if the DER is invalid
    /// or names a different curve.
    pub fn from_der(der: &[u8]) -> Result<Self, PrimitivesError> {
        let inner = SecretKey::from_sec1_der(der)
            .map_err(|e| PrimitivesError::MalformedKey(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    /// Parse a hex-encoded SEC1 DER private key.
    ///
    /// No type dispatch happens here; see [`Key::from_private_hex`](crate::Key::from_private_hex).
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let der = Zeroizing::new(
            hex::decode(hex_str).map_err(|e| PrimitivesError::MalformedKey(e.to_string()))?,
        );
        Self::from_der(&der)
    }

    /// Serialize as SEC1 DER, including the curve OID and the public point.
    pub fn to_der(&self) -> Result<Zeroizing<Vec<u8>>, PrimitivesError> {
        self.inner
            .to_sec1_der()
            .map_err(|e| PrimitivesError::KeyEncoding(e.to_string()))
    }

    /// Serialize as hex-encoded SEC1 DER (`3077...` for this curve).
    pub fn to_hex(&self) -> Result<String, PrimitivesError> {
        Ok(hex::encode(self.to_der()?.as_slice()))
    }

    /// Serialize the raw scalar as 32 big-endian bytes.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_BYTES_LEN]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_BYTES_LEN]);
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_p256(self.inner.public_key())
    }

    /// Sign a precomputed digest with fresh per-signature randomness.
    ///
    /// # Arguments
    /// * `hash` - The message digest (32 bytes for SHA-256).
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or `SigningFailed` on entropy or curve failure.
    pub fn sign(&self, hash: &[u8]) -> Result<Signature, PrimitivesError> {
        let signing_key = SigningKey::from(&self.inner);
        let sig: p256::ecdsa::Signature = signing_key
            .sign_prehash_with_rng(&mut OsRng, hash)
            .map_err(|e| PrimitivesError::SigningFailed(e.to_string()))?;

        let (r_bytes, s_bytes) = sig.split_bytes();
        Ok(Signature::from_scalars(&r_bytes, &s_bytes))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        *self.to_bytes() == *other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;

    /// SEC1 DER key produced by an independent implementation.
    const PRIV_HEX: &str = "307702010104201f2e3d4c5b6a79880123456789abcdeffedcba98765432100a0b0c0d0e0f1011a00a06082a8648ce3d030107a144034200040fd8ce49cd2f5ad68affa36aec338d4975069fd80cddf727b333f982a30e8327f62becbec0ec9b0850b3d919437f5784289a1836f4d66540c726519109f2c00a";

    #[test]
    fn test_parse_known_key() {
        let key = PrivateKey::from_hex(PRIV_HEX).unwrap();
        assert_eq!(
            hex::encode(key.to_bytes().as_ref()),
            "1f2e3d4c5b6a79880123456789abcdeffedcba98765432100a0b0c0d0e0f1011"
        );
        // Re-encoding reproduces the original structure byte for byte.
        assert_eq!(key.to_hex().unwrap(), PRIV_HEX);
    }

    #[test]
    fn test_generated_key_serializes_with_r1_header() {
        let key = PrivateKey::generate().unwrap();
        let hex_str = key.to_hex().unwrap();
        assert!(hex_str.starts_with("3077"));
        assert_eq!(PrivateKey::from_hex(&hex_str).unwrap(), key);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let key = PrivateKey::generate().unwrap();
        let bytes = key.to_bytes();
        assert_eq!(PrivateKey::from_bytes(bytes.as_ref()).unwrap(), key);
    }

    #[test]
    fn test_invalid_scalars() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[0xffu8; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[1u8; 31]).is_err());
    }

    #[test]
    fn test_sign_verifies_with_pub_key() {
        let key = PrivateKey::generate().unwrap();
        let digest = sha256(b"payload");
        let sig = key.sign(&digest).unwrap();
        assert!(key.pub_key().verify(&digest, &sig));
    }

    #[test]
    fn test_signatures_are_randomized() {
        let key = PrivateKey::generate().unwrap();
        let digest = sha256(b"payload");
        let a = key.sign(&digest).unwrap();
        let b = key.sign(&digest).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_hides_scalar() {
        let key = PrivateKey::from_hex(PRIV_HEX).unwrap();
        let dbg = format!("{key:?}");
        assert!(!dbg.contains("1f2e3d4c"));
    }
}

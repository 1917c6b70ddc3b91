//! secp256r1 public key with SubjectPublicKeyInfo DER serialization.
//!
//! Supports SPKI import/export, SEC1 point encoding and ECDSA verification
//! of precomputed digests.

use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::VerifyingKey;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePublicKey, EncodePublicKey};

use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// A secp256r1 public key for verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// The underlying p256 curve point.
    inner: p256::PublicKey,
}

impl PublicKey {
    pub(crate) fn from_p256(inner: p256::PublicKey) -> Self {
        PublicKey { inner }
    }

    /// Parse a DER-encoded SubjectPublicKeyInfo.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or `MalformedKey` if the DER is invalid,
    /// names another algorithm or curve, or the point is not on the curve.
    pub fn from_der(der: &[u8]) -> Result<Self, PrimitivesError> {
        let inner = p256::PublicKey::from_public_key_der(der)
            .map_err(|e| PrimitivesError::MalformedKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// Parse a hex-encoded SubjectPublicKeyInfo.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let der = hex::decode(hex_str).map_err(|e| PrimitivesError::MalformedKey(e.to_string()))?;
        Self::from_der(&der)
    }

    /// Parse a SEC1-encoded point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let inner = p256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::MalformedKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// Serialize as DER SubjectPublicKeyInfo with an uncompressed point.
    pub fn to_der(&self) -> Result<Vec<u8>, PrimitivesError> {
        let doc = self
            .inner
            .to_public_key_der()
            .map_err(|e| PrimitivesError::KeyEncoding(e.to_string()))?;
        Ok(doc.as_bytes().to_vec())
    }

    /// Serialize as hex-encoded DER SubjectPublicKeyInfo.
    pub fn to_hex(&self) -> Result<String, PrimitivesError> {
        Ok(hex::encode(self.to_der()?))
    }

    /// Serialize the point in uncompressed SEC1 form (65 bytes).
    pub fn to_uncompressed(&self) -> Vec<u8> {
        self.inner.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Verify a signature against a precomputed digest.
    ///
    /// # Returns
    /// `true` if the signature is valid. Components that are zero, not below
    /// the curve order, or wider than 32 bytes make the signature invalid.
    pub fn verify(&self, hash: &[u8], sig: &Signature) -> bool {
        let Some((r, s)) = sig.to_field_bytes() else {
            return false;
        };
        let p256_sig = match p256::ecdsa::Signature::from_scalars(
            p256::FieldBytes::from(r),
            p256::FieldBytes::from(s),
        ) {
            Ok(sig) => sig,
            Err(_) => return false,
        };

        VerifyingKey::from(&self.inner)
            .verify_prehash(hash, &p256_sig)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;
    use num_bigint::BigUint;

    const PUB_HEX: &str = "3059301306072a8648ce3d020106082a8648ce3d030107034200040fd8ce49cd2f5ad68affa36aec338d4975069fd80cddf727b333f982a30e8327f62becbec0ec9b0850b3d919437f5784289a1836f4d66540c726519109f2c00a";

    /// Signature over SHA-256("metahash") by the key behind `PUB_HEX`.
    const SIG_HEX: &str = "3045022100cac55420e8093b176bb2de443795d51eaa7346ef5369c396627104b78c8e7572022043887c5cbce28db12241ffbc29d8f690fa7a4c17f8c6ff3adbf0f67ce040ae43";

    #[test]
    fn test_spki_roundtrip() {
        let key = PublicKey::from_hex(PUB_HEX).unwrap();
        assert_eq!(key.to_hex().unwrap(), PUB_HEX);
        assert_eq!(key.to_uncompressed().len(), 65);
        assert_eq!(
            PublicKey::from_sec1_bytes(&key.to_uncompressed()).unwrap(),
            key
        );
    }

    #[test]
    fn test_verify_external_signature() {
        let key = PublicKey::from_hex(PUB_HEX).unwrap();
        let sig = Signature::from_hex(SIG_HEX).unwrap();
        assert!(key.verify(&sha256(b"metahash"), &sig));
        assert!(!key.verify(&sha256(b"metahash!"), &sig));
    }

    #[test]
    fn test_out_of_range_components_do_not_verify() {
        let key = PublicKey::from_hex(PUB_HEX).unwrap();
        let digest = sha256(b"metahash");
        let zero = Signature::new(BigUint::from(0u8), BigUint::from(1u8));
        assert!(!key.verify(&digest, &zero));
        let wide = Signature::from_scalars(&[0x01; 33], &[0x01]);
        assert!(!key.verify(&digest, &wide));
        let max = Signature::from_scalars(&[0xff; 32], &[0xff; 32]);
        assert!(!key.verify(&digest, &max));
    }

    #[test]
    fn test_malformed_der() {
        assert!(matches!(
            PublicKey::from_hex("3059"),
            Err(PrimitivesError::MalformedKey(_))
        ));
        assert!(matches!(
            PublicKey::from_hex("not hex"),
            Err(PrimitivesError::MalformedKey(_))
        ));
    }
}

//! Wallet key material: a secp256r1 key pair plus its account address.
//!
//! Private keys travel as hex strings whose first four characters identify
//! the key type. For the supported curve these characters are the header of
//! the SEC1 DER structure itself, so the whole string is decoded.

use std::fmt;

use crate::address::Address;
use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::hash::sha256;
use crate::PrimitivesError;

/// Curve used for every key and signature.
pub const CURVE_NAME: &str = "secp256r1";

/// Hex prefix of a secp256r1 SEC1 DER private key.
pub const SECP256R1_PREFIX: &str = "3077";

/// Hex prefix of a secp256k1 private key.
pub const SECP256K1_PREFIX: &str = "3074";

/// Private key type, detected from the hex discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// secp256r1 key, SEC1 DER encoded.
    Secp256r1,
    /// secp256k1 key, recognised but not supported.
    Secp256k1,
    /// Anything else, including the empty string.
    Unknown,
}

impl KeyFormat {
    /// Classify a hex-encoded private key by its first four characters.
    pub fn detect(private_hex: &str) -> Self {
        if private_hex.starts_with(SECP256R1_PREFIX) {
            KeyFormat::Secp256r1
        } else if private_hex.starts_with(SECP256K1_PREFIX) {
            KeyFormat::Secp256k1
        } else {
            KeyFormat::Unknown
        }
    }
}

/// A secp256r1 key pair with an optional associated account address.
///
/// A key built from a public key alone can verify but not sign.
#[derive(Clone)]
pub struct Key {
    private: Option<PrivateKey>,
    public: PublicKey,
    address: Option<Address>,
}

impl Key {
    /// Generate a fresh key pair from the OS random source.
    ///
    /// # Returns
    /// The new key, or `CryptoUnavailable` if no entropy could be read.
    pub fn generate() -> Result<Self, PrimitivesError> {
        Ok(Self::from_private_key(PrivateKey::generate()?))
    }

    /// Build a signing key from a parsed private key.
    pub fn from_private_key(private: PrivateKey) -> Self {
        let public = private.pub_key();
        Key {
            private: Some(private),
            public,
            address: None,
        }
    }

    /// Build a verify-only key from a public key.
    pub fn from_public_key(public: PublicKey) -> Self {
        Key {
            private: None,
            public,
            address: None,
        }
    }

    /// Parse a tagged, hex-encoded private key.
    ///
    /// # Returns
    /// - `UnknownKeyFormat` for an empty string or an unrecognised prefix
    /// - `UnsupportedKeyType` for a secp256k1 key
    /// - `MalformedKey` when a secp256r1 key fails hex or DER decoding
    pub fn from_private_hex(private_hex: &str) -> Result<Self, PrimitivesError> {
        match KeyFormat::detect(private_hex) {
            KeyFormat::Secp256r1 => Ok(Self::from_private_key(PrivateKey::from_hex(private_hex)?)),
            KeyFormat::Secp256k1 => Err(PrimitivesError::UnsupportedKeyType("secp256k1")),
            KeyFormat::Unknown => Err(PrimitivesError::UnknownKeyFormat),
        }
    }

    /// Parse a hex-encoded SubjectPublicKeyInfo into a verify-only key.
    pub fn from_public_hex(public_hex: &str) -> Result<Self, PrimitivesError> {
        Ok(Self::from_public_key(PublicKey::from_hex(public_hex)?))
    }

    /// Attach an address, builder style.
    pub fn with_address(mut self, address: impl Into<Address>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// The private half, if loaded.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private.as_ref()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Whether a private scalar is loaded.
    pub fn can_sign(&self) -> bool {
        self.private.is_some()
    }

    /// Hex-encoded SEC1 DER private key; inverse of [`Key::from_private_hex`].
    pub fn private_hex(&self) -> Result<String, PrimitivesError> {
        self.private
            .as_ref()
            .ok_or(PrimitivesError::MissingPrivateKey)?
            .to_hex()
    }

    /// Hex-encoded DER SubjectPublicKeyInfo.
    pub fn public_hex(&self) -> Result<String, PrimitivesError> {
        self.public.to_hex()
    }

    /// Hash `message` with SHA-256 and sign the digest.
    ///
    /// # Returns
    /// The hex-encoded DER signature, `MissingPrivateKey` for a verify-only
    /// key, or `SigningFailed` on entropy or curve failure.
    pub fn sign(&self, message: &[u8]) -> Result<String, PrimitivesError> {
        let private = self
            .private
            .as_ref()
            .ok_or(PrimitivesError::MissingPrivateKey)?;
        let digest = sha256(message);
        Ok(private.sign(&digest)?.to_hex())
    }

    /// Hash `message` with SHA-256 and verify a hex-encoded DER signature.
    ///
    /// # Returns
    /// `Ok(true)` or `Ok(false)` for a well-formed signature, and
    /// `MalformedSignature` when the hex or DER layer cannot be decoded.
    pub fn verify(&self, message: &[u8], signature_hex: &str) -> Result<bool, PrimitivesError> {
        let sig = Signature::from_hex(signature_hex)?;
        let digest = sha256(message);
        Ok(self.public.verify(&digest, &sig))
    }

    /// The associated account address, if one was set.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Associate an account address with this key. No validation happens.
    pub fn set_address(&mut self, address: impl Into<Address>) {
        self.address = Some(address.into());
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("public", &self.public)
            .field("address", &self.address)
            .field("can_sign", &self.can_sign())
            .finish()
    }
}

//! ECDSA signature as a pair of unsigned integers with ASN.1 DER serialization.
//!
//! The wire form is `SEQUENCE { INTEGER r, INTEGER s }`, hex-encoded for
//! transport. Range checks against the curve order happen at verification
//! time, not while decoding.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::PrimitivesError;

/// ASN.1 SEQUENCE tag.
const TAG_SEQUENCE: u8 = 0x30;

/// ASN.1 INTEGER tag.
const TAG_INTEGER: u8 = 0x02;

/// An ECDSA signature with R and S components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The R component of the signature.
    r: BigUint,
    /// The S component of the signature.
    s: BigUint,
}

impl Signature {
    /// Create a signature from its R and S components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Create a signature from big-endian R and S byte strings.
    pub fn from_scalars(r: &[u8], s: &[u8]) -> Self {
        Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        }
    }

    /// Access the R component of the signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Access the S component of the signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Parse a DER-encoded ECDSA signature.
    ///
    /// Expected format: 0x30 <len> 0x02 <r_len> <r> 0x02 <s_len> <s>
    ///
    /// Integers must be minimally encoded and non-negative, and no bytes may
    /// follow the sequence.
    ///
    /// # Arguments
    /// * `bytes` - DER-encoded signature bytes.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or `MalformedSignature` if the encoding is invalid.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let mut reader = DerReader::new(bytes);

        let body = reader.read_tlv(TAG_SEQUENCE)?;
        if !reader.is_empty() {
            return Err(malformed("trailing data after sequence"));
        }

        let mut fields = DerReader::new(body);
        let r = read_integer(&mut fields)?;
        let s = read_integer(&mut fields)?;
        if !fields.is_empty() {
            return Err(malformed("unexpected data after S"));
        }

        Ok(Signature { r, s })
    }

    /// Parse a hex-encoded DER signature.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or `MalformedSignature` if either the hex
    /// or the DER layer is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str).map_err(|e| malformed(&e.to_string()))?;
        Self::from_der(&bytes)
    }

    /// Serialize the signature in DER format.
    ///
    /// # Returns
    /// A byte vector containing `SEQUENCE { INTEGER r, INTEGER s }`.
    pub fn to_der(&self) -> Vec<u8> {
        let rb = canonicalize_int(&self.r);
        let sb = canonicalize_int(&self.s);

        let mut content = Vec::with_capacity(rb.len() + sb.len() + 6);
        write_tlv(&mut content, TAG_INTEGER, &rb);
        write_tlv(&mut content, TAG_INTEGER, &sb);

        let mut out = Vec::with_capacity(content.len() + 4);
        write_tlv(&mut out, TAG_SEQUENCE, &content);
        out
    }

    /// Serialize the signature as a hex-encoded DER string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_der())
    }

    /// Return R and S as 32-byte big-endian field elements.
    ///
    /// # Returns
    /// `None` if either component does not fit in 32 bytes.
    pub(crate) fn to_field_bytes(&self) -> Option<([u8; 32], [u8; 32])> {
        Some((to_32_bytes(&self.r)?, to_32_bytes(&self.s)?))
    }
}

fn malformed(reason: &str) -> PrimitivesError {
    PrimitivesError::MalformedSignature(reason.to_string())
}

/// Minimal cursor over DER tag-length-value records.
struct DerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        DerReader { data, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn read_u8(&mut self) -> Result<u8, PrimitivesError> {
        let b = *self
            .data
            .get(self.pos)
            .ok_or_else(|| malformed("unexpected end of data"))?;
        self.pos += 1;
        Ok(b)
    }

    fn read_length(&mut self) -> Result<usize, PrimitivesError> {
        let first = self.read_u8()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        // Long form: at most two length bytes, minimally encoded.
        let count = (first & 0x7f) as usize;
        if count == 0 || count > 2 {
            return Err(malformed("unsupported length encoding"));
        }
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | self.read_u8()? as usize;
        }
        if len < 0x80 || (count == 2 && len < 0x100) {
            return Err(malformed("non-minimal length encoding"));
        }
        Ok(len)
    }

    fn read_tlv(&mut self, tag: u8) -> Result<&'a [u8], PrimitivesError> {
        if self.read_u8()? != tag {
            return Err(malformed(&format!("expected tag 0x{tag:02x}")));
        }
        let len = self.read_length()?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| malformed("bad length"))?;
        let value = &self.data[self.pos..end];
        self.pos = end;
        Ok(value)
    }
}

fn read_integer(reader: &mut DerReader<'_>) -> Result<BigUint, PrimitivesError> {
    let bytes = reader.read_tlv(TAG_INTEGER)?;
    match bytes {
        [] => Err(malformed("empty integer")),
        [first, ..] if first & 0x80 != 0 => Err(malformed("negative integer")),
        [0x00, second, ..] if second & 0x80 == 0 => {
            Err(malformed("integer not minimally encoded"))
        }
        _ => Ok(BigUint::from_bytes_be(bytes)),
    }
}

fn write_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    }
}

fn write_tlv(out: &mut Vec<u8>, tag: u8, value: &[u8]) {
    out.push(tag);
    write_length(out, value.len());
    out.extend_from_slice(value);
}

/// Big-endian bytes of `n` with a leading zero when the high bit is set,
/// so the DER integer stays positive.
fn canonicalize_int(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        return vec![0x00];
    }
    let mut bytes = n.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    bytes
}

fn to_32_bytes(n: &BigUint) -> Option<[u8; 32]> {
    let bytes = n.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A P-256 signature produced by an independent implementation.
    const SIG_HEX: &str = "3045022100cac55420e8093b176bb2de443795d51eaa7346ef5369c396627104b78c8e7572022043887c5cbce28db12241ffbc29d8f690fa7a4c17f8c6ff3adbf0f67ce040ae43";

    #[test]
    fn test_parse_and_reserialize() {
        let sig = Signature::from_hex(SIG_HEX).unwrap();
        assert_eq!(
            hex::encode(sig.r().to_bytes_be()),
            "cac55420e8093b176bb2de443795d51eaa7346ef5369c396627104b78c8e7572"
        );
        assert_eq!(
            hex::encode(sig.s().to_bytes_be()),
            "43887c5cbce28db12241ffbc29d8f690fa7a4c17f8c6ff3adbf0f67ce040ae43"
        );
        assert_eq!(sig.to_hex(), SIG_HEX);
    }

    #[test]
    fn test_small_integers() {
        let sig = Signature::new(BigUint::from(1u8), BigUint::from(0x80u8));
        assert_eq!(
            sig.to_der(),
            vec![0x30, 0x07, 0x02, 0x01, 0x01, 0x02, 0x02, 0x00, 0x80]
        );
        assert_eq!(Signature::from_der(&sig.to_der()).unwrap(), sig);
    }

    #[test]
    fn test_long_form_length() {
        // 100-byte integers push the sequence length past 127.
        let big = BigUint::from_bytes_be(&[0x11; 100]);
        let sig = Signature::new(big.clone(), big);
        let der = sig.to_der();
        assert_eq!(&der[..2], &[0x30, 0x81]);
        assert_eq!(Signature::from_der(&der).unwrap(), sig);
        assert!(sig.to_field_bytes().is_none());
    }

    #[test]
    fn test_field_bytes_left_padded() {
        let sig = Signature::from_scalars(&[0x01], &[0x02, 0x03]);
        let (r, s) = sig.to_field_bytes().unwrap();
        assert_eq!(r[31], 0x01);
        assert_eq!(&s[30..], &[0x02, 0x03]);
        assert!(r[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_malformed_inputs() {
        let cases: Vec<&[u8]> = vec![
            &[],
            &[0x31, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01],
            &[0x30, 0x07, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01],
            &[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x00],
            &[0x30, 0x03, 0x02, 0x01, 0x01],
            &[0x30, 0x05, 0x02, 0x00, 0x02, 0x01, 0x01],
            &[0x30, 0x06, 0x02, 0x01, 0x81, 0x02, 0x01, 0x01],
            &[0x30, 0x07, 0x02, 0x02, 0x00, 0x01, 0x02, 0x01, 0x01],
            &[0x30, 0x09, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01],
        ];
        for (i, case) in cases.iter().enumerate() {
            let err = Signature::from_der(case).unwrap_err();
            assert!(
                matches!(err, PrimitivesError::MalformedSignature(_)),
                "case #{i} should be malformed"
            );
        }
    }

    #[test]
    fn test_negative_integer_is_malformed() {
        // Well-formed DER whose R has the sign bit set.
        let der = [0x30, 0x06, 0x02, 0x01, 0xff, 0x02, 0x01, 0x01];
        assert!(matches!(
            Signature::from_der(&der),
            Err(PrimitivesError::MalformedSignature(reason)) if reason == "negative integer"
        ));
    }

    #[test]
    fn test_bad_hex_is_malformed_signature() {
        assert!(matches!(
            Signature::from_hex("30zz"),
            Err(PrimitivesError::MalformedSignature(_))
        ));
    }
}

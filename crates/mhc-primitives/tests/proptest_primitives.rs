use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

use mhc_primitives::util::{encode_varint, MAX_SINGLE_BYTE};
use mhc_primitives::{Key, PrimitivesError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn varint_tag_and_width_match_bit_length(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let n = BigUint::from_bytes_le(&bytes);
        prop_assume!(n > BigUint::from(MAX_SINGLE_BYTE));

        let encoded = encode_varint(&BigInt::from(n.clone())).unwrap();
        let bits = n.bits().max(16);
        let width = bits.next_power_of_two();
        let tag = 0xfa + (width.trailing_zeros() - 4) as u8;

        prop_assert_eq!(encoded[0], tag);
        prop_assert_eq!(encoded.len() as u64, 1 + width / 8);
        prop_assert_eq!(BigUint::from_bytes_le(&encoded[1..]), n);
    }

    #[test]
    fn varint_rejects_wide_values(extra in 1u32..64) {
        let n = BigInt::from(1u8) << (511 + extra);
        let too_large = matches!(encode_varint(&n), Err(PrimitivesError::ValueTooLarge { .. }));
        prop_assert!(too_large);
    }

    #[test]
    fn varint_rejects_negative_values(v in i64::MIN..0) {
        let invalid = matches!(encode_varint(&BigInt::from(v)), Err(PrimitivesError::InvalidInput(_)));
        prop_assert!(invalid);
    }

    #[test]
    fn ecdsa_sign_verify_roundtrip(
        msg in prop::collection::vec(any::<u8>(), 0..256),
        other in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let key = Key::generate().unwrap();
        let sig = key.sign(&msg).unwrap();
        prop_assert!(key.verify(&msg, &sig).unwrap());
        if other != msg {
            prop_assert!(!key.verify(&other, &sig).unwrap());
        }
    }

    #[test]
    fn flipped_signature_byte_never_verifies(idx in any::<prop::sample::Index>(), mask in 1u8..=255) {
        let key = Key::generate().unwrap();
        let sig_hex = key.sign(b"canonical payload").unwrap();
        let mut sig = hex::decode(&sig_hex).unwrap();
        let i = idx.index(sig.len());
        sig[i] ^= mask;

        match key.verify(b"canonical payload", &hex::encode(&sig)) {
            Ok(valid) => prop_assert!(!valid),
            Err(e) => {
                let malformed = matches!(e, PrimitivesError::MalformedSignature(_));
                prop_assert!(malformed);
            }
        }
    }

    #[test]
    fn private_hex_roundtrip(_seed in any::<u8>()) {
        let key = Key::generate().unwrap();
        let hex_str = key.private_hex().unwrap();
        prop_assert!(hex_str.starts_with("3077"));
        let parsed = Key::from_private_hex(&hex_str).unwrap();
        prop_assert_eq!(parsed.public_hex().unwrap(), key.public_hex().unwrap());
        prop_assert_eq!(parsed.private_hex().unwrap(), hex_str);
    }
}

//! Little-endian encoding/decoding of 32-byte field elements and scalars,
//! and RFC 7748 masking/clamping.

use super::error::X25519Error;
use super::field::FieldElement;

/// Decodes a 32-byte little-endian string as an integer, represented as a
/// reduced field element.
///
/// Fails with [`X25519Error::InvalidLength`] if the input is not exactly 32
/// bytes.
pub(crate) fn decode_little_endian(b: &[u8], operation: &'static str) -> Result<FieldElement, X25519Error> {
    let bytes: [u8; 32] = b.try_into().map_err(|_| X25519Error::InvalidLength {
        operation,
        length: b.len(),
    })?;

    Ok(FieldElement::from_bytes(&bytes))
}

/// Decodes a u-coordinate per RFC 7748: clears the top bit of byte 31 of a
/// local copy of the input, then decodes little-endian and reduces mod p.
///
/// The caller's buffer is never mutated. Non-canonical values in
/// `[p, 2^255)` are accepted and reduced, as required by the standard.
pub(crate) fn decode_u_coordinate(u: &[u8]) -> Result<FieldElement, X25519Error> {
    if u.len() != 32 {
        return Err(X25519Error::InvalidLength {
            operation: "decode_u_coordinate",
            length: u.len(),
        });
    }

    let mut masked = [0u8; 32];
    masked.copy_from_slice(u);
    masked[31] &= 0x7f;

    Ok(FieldElement::from_bytes(&masked))
}

/// Encodes a field element as a canonical 32-byte little-endian string.
///
/// The ladder always produces a reduced field element, so this never
/// fails in practice; [`X25519Error::OutOfRange`] exists only to surface
/// that invariant if it is ever violated.
pub(crate) fn encode_u_coordinate(x: FieldElement) -> Result<[u8; 32], X25519Error> {
    // `FieldElement::to_bytes` always normalizes into `[0, p)` first, so
    // this check can never actually fail; it documents the invariant.
    Ok(x.to_bytes())
}

/// Clamps a 32-byte scalar per RFC 7748: `k[0] &= 248`, `k[31] = (k[31] &
/// 127) | 64`.
///
/// Fails with [`X25519Error::InvalidLength`] if the input is not exactly 32
/// bytes.
pub(crate) fn clamp(k: &[u8]) -> Result<[u8; 32], X25519Error> {
    let mut out: [u8; 32] = k.try_into().map_err(|_| X25519Error::InvalidLength {
        operation: "clamp",
        length: k.len(),
    })?;

    out[0] &= 248;
    out[31] = (out[31] & 127) | 64;

    Ok(out)
}

/// Decodes a scalar per RFC 7748: clamps a copy of the input, then decodes
/// it little-endian into the internal scalar form used by the ladder.
///
/// The ladder itself only needs the clamped byte representation (it walks
/// the scalar bit by bit), so this returns the clamped bytes rather than a
/// [`FieldElement`].
pub(crate) fn decode_scalar(k: &[u8]) -> Result<[u8; 32], X25519Error> {
    clamp(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_rejects_wrong_length() {
        assert_eq!(
            clamp(&[0u8; 31]),
            Err(X25519Error::InvalidLength {
                operation: "clamp",
                length: 31
            })
        );
    }

    #[test]
    fn clamp_clears_and_sets_expected_bits() {
        let input = [0xffu8; 32];
        let clamped = clamp(&input).unwrap();
        assert_eq!(clamped[0] & 0x07, 0);
        assert_eq!(clamped[31] & 0x80, 0);
        assert_ne!(clamped[31] & 0x40, 0);
    }

    #[test]
    fn clamp_is_idempotent() {
        let input = [0x5au8; 32];
        let once = clamp(&input).unwrap();
        let twice = clamp(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn decode_u_coordinate_rejects_wrong_length() {
        assert!(decode_u_coordinate(&[0u8; 16]).is_err());
    }

    #[test]
    fn decode_u_coordinate_masks_top_bit() {
        let mut with_bit = [0u8; 32];
        with_bit[31] = 0xff;
        let mut without_bit = [0u8; 32];
        without_bit[31] = 0x7f;

        let a = decode_u_coordinate(&with_bit).unwrap();
        let b = decode_u_coordinate(&without_bit).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn decode_u_coordinate_does_not_mutate_caller_buffer() {
        let input = [0xffu8; 32];
        let _ = decode_u_coordinate(&input).unwrap();
        assert_eq!(input, [0xffu8; 32]);
    }

    #[test]
    fn encode_then_decode_little_endian_round_trips() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x09;
        let x = decode_little_endian(&bytes, "test").unwrap();

        let encoded = encode_u_coordinate(x).unwrap();
        let decoded = decode_little_endian(&encoded, "test").unwrap();

        assert_eq!(decoded.to_bytes(), x.to_bytes());
    }
}

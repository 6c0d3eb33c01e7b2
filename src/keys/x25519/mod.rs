//! X25519 key exchange (RFC 7748).
//!
//! This module provides the Curve25519 Diffie-Hellman key-agreement
//! primitive: generating a private scalar, deriving its matching public
//! value, and computing a shared secret from a private scalar and a peer's
//! public value.
//!
//! ## Structure
//!
//! - `field`
//!   Arithmetic in the prime field `2^255 - 19`, in a 10-limb representation.
//! - `codec`
//!   Little-endian encoding/decoding, RFC 7748 masking and clamping.
//! - `ladder`
//!   The x-only Montgomery ladder driving scalar multiplication.
//! - `error`
//!   The error type returned by this module's fallible operations.
//!
//! The separation mirrors the structure used in other cryptographic
//! modules of this crate, keeping algorithmic details isolated while
//! exposing a small, explicit interface at this level.

mod codec;
mod error;
mod field;
mod ladder;

pub use error::X25519Error;

use crate::rng::Csprng;
use codec::{clamp, decode_scalar, decode_u_coordinate, encode_u_coordinate};

/// The u-coordinate of the Curve25519 base point: `9` followed by 31 zero
/// bytes, little-endian.
const BASE_POINT: [u8; 32] = {
    let mut b = [0u8; 32];
    b[0] = 9;
    b
};

/// Computes the x-coordinate of `[k]·u` via the Montgomery ladder.
///
/// Both `k` and `u` must be exactly 32 bytes; this is checked as a real
/// runtime condition rather than enforced by the type system, so callers
/// and tests can exercise the invalid-length error path.
pub fn scalarmult(k: &[u8], u: &[u8]) -> Result<[u8; 32], X25519Error> {
    if k.len() != 32 {
        return Err(X25519Error::InvalidLength {
            operation: "scalarmult",
            length: k.len(),
        });
    }

    let scalar = decode_scalar(k)?;
    let u_coord = decode_u_coordinate(u)?;

    let result = ladder::scalarmult(&scalar, u_coord);
    encode_u_coordinate(result)
}

/// Computes `scalarmult(k, base_point)`, i.e. the public value matching the
/// private scalar `k`.
pub fn scalarmult_base(k: &[u8]) -> Result<[u8; 32], X25519Error> {
    scalarmult(k, &BASE_POINT)
}

/// Generates a fresh private key: 32 cryptographically secure random bytes,
/// clamped per RFC 7748.
///
/// Draws entropy from the operating system via [`Csprng::from_os`]; this is
/// the only place in this crate's public API that touches randomness.
pub fn generate_private_key() -> [u8; 32] {
    let mut bytes = [0u8; 32];
    Csprng::from_os().fill_bytes(&mut bytes);

    // `bytes` is always exactly 32 bytes, so clamping cannot fail here.
    clamp(&bytes).expect("clamp of a 32-byte buffer cannot fail")
}

/// Derives the public key matching a private key: `scalarmult_base(priv)`.
pub fn generate_public_key(private_key: &[u8]) -> Result<[u8; 32], X25519Error> {
    scalarmult_base(private_key)
}

/// Computes the shared secret between a private key and a peer's public
/// key: `scalarmult(priv, peer_pub)`.
pub fn compute_shared_secret(
    private_key: &[u8],
    peer_public_key: &[u8],
) -> Result<[u8; 32], X25519Error> {
    scalarmult(private_key, peer_public_key)
}

/// Returns `true` iff `k` is a 32-byte buffer that is already clamped per
/// RFC 7748.
///
/// This checks that `k` looks like the output of [`clamp`]; it does not
/// accept arbitrary 32-byte inputs the way [`is_valid_public_key`] does.
pub fn is_valid_private_key(k: &[u8]) -> bool {
    k.len() == 32 && (k[0] & 0x07) == 0 && (k[31] & 0x80) == 0 && (k[31] & 0x40) != 0
}

/// Returns `true` iff `k` is exactly 32 bytes.
///
/// RFC 7748 accepts any 32-byte value as a public key; rejecting
/// contributory all-zero outputs, if required, is the caller's
/// responsibility.
pub fn is_valid_public_key(k: &[u8]) -> bool {
    k.len() == 32
}

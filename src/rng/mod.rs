//! Random number generation module.
//!
//! This module provides the cryptographically secure randomness facility
//! used to generate fresh X25519 private keys.
//!
//! It is built around a ChaCha20-based deterministic random bit generator
//! (DRBG) and exposes a high-level CSPRNG interface suitable for
//! security-critical use such as key generation.

/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a secure seed
/// - Forward secrecy through periodic rekeying
/// - No heap allocation
/// - Minimal and explicit API surface
pub(crate) mod chacha20;
mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This is the primary entry point for generating secure randomness
/// within this crate; `keys::x25519::generate_private_key` is built on it.
pub use csprng::Csprng;

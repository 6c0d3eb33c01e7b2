//! A from-scratch implementation of X25519 (RFC 7748).
//!
//! This crate provides the Curve25519 Diffie-Hellman key-agreement
//! primitive: generating a private scalar, deriving the matching public
//! value, and computing a shared secret from a private scalar and a peer's
//! public value.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. It does not
//! provide signatures, higher-level key-exchange protocols, key derivation,
//! transport, or persistent storage.
//!
//! # Module overview
//!
//! - `keys::x25519`
//!   The X25519 key-agreement primitive itself: field arithmetic modulo
//!   `2^255 - 19`, RFC 7748 encoding/decoding and clamping, the Montgomery
//!   ladder, and the small public facade (`generate_private_key`,
//!   `generate_public_key`, `compute_shared_secret`, `scalarmult`,
//!   `scalarmult_base`) built on top of them.
//!
//! - `rng`
//!   A ChaCha20-based cryptographically secure pseudorandom number
//!   generator used to source fresh private keys. Relies on the `os`
//!   module for initial entropy.
//!
//! # Design goals
//!
//! - No heap allocations
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics matching RFC 7748
//! - Clear separation between curve arithmetic and supporting infrastructure
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries such as `curve25519-dalek`; it is a small,
//! self-contained, auditable primitive suitable for embedding directly.

mod os;

pub mod keys;
pub mod rng;

//! Asymmetric cryptographic key material.
//!
//! This module currently groups a single construction: X25519
//! Diffie–Hellman key agreement over Curve25519, as specified in RFC 7748.
//!
//! Implementations here are intentionally explicit and self-contained,
//! favoring clarity, auditability, and specification-level correctness
//! over abstraction.
//!
//! ## X25519
//!
//! The `x25519` module implements Curve25519 Diffie–Hellman key agreement
//! using the Montgomery ladder as specified in RFC 7748.
//!
//! It provides scalar multiplication on Montgomery coordinates and is
//! intended for shared-secret derivation and key exchange, not for
//! signatures.
pub mod x25519;

//! Curve25519 key material and conversions
//!
//! This module provides the arithmetic side of the bridge. The actual field
//! and curve math is done by the dalek crates; this layer pins down which
//! representation goes in, which comes out, and what counts as invalid.
//!
//! # Key Model
//!
//! ## Ed25519
//! An Ed25519 identity is a 32-byte seed (`Ed25519SecretKey`) and a compressed
//! Edwards point (`Ed25519PublicKey`). The 64-byte `seed || public` keypair
//! encoding is accepted as well.
//!
//! ## X25519
//! Key agreement runs on the Montgomery form of the same curve:
//! 1. The secret scalar is the first half of SHA-512(seed), clamped
//! 2. The public key is the u-coordinate `(1 + y) / (1 - y)` of the Edwards point
//! 3. The shared secret is X25519(secret, public)
//!
//! Because the Ed25519 public key is `a * B` for the same clamped scalar `a`,
//! converting either half of a keypair yields a matching X25519 keypair.
//!
//! ## Rejected Input
//! - Inputs of the wrong length
//! - Edwards points that fail to decompress, are non-canonically encoded,
//!   or have small order
//! - Agreements whose result is all zeros (low-order peer keys)

mod convert;
mod exchange;
mod keys;

pub use convert::{
    public_key_from_ed25519_public_key, secret_key_from_ed25519_secret_key,
    shared_secret_key_from_secret_key_and_public_key,
};
pub use exchange::{
    SharedSecret, X25519PublicKey, X25519SecretKey, SHARED_SECRET_SIZE, X25519_PUBLIC_KEY_SIZE,
    X25519_SECRET_KEY_SIZE,
};
pub use keys::{
    Ed25519PublicKey, Ed25519SecretKey, KeyError, ED25519_KEYPAIR_SIZE, ED25519_PUBLIC_KEY_SIZE,
    ED25519_SECRET_KEY_SIZE,
};

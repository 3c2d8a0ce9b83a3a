//! Byte-slice entry points for the three bridge operations
//!
//! These are what a curve engine calls after it has decoded its wire input.
//! Every length and point check happens here, so a caller handing over raw
//! buffers gets a typed error rather than a wrong key.

use super::exchange::{SharedSecret, X25519PublicKey, X25519SecretKey};
use super::keys::{Ed25519PublicKey, Ed25519SecretKey, KeyError};

/// Secret key from Ed25519 secret key
///
/// Accepts a 32-byte seed or a 64-byte `seed || public key` keypair.
pub fn secret_key_from_ed25519_secret_key(
    ed25519_secret_key: &[u8],
) -> Result<X25519SecretKey, KeyError> {
    Ok(Ed25519SecretKey::from_slice(ed25519_secret_key)?.to_x25519())
}

/// Public key from Ed25519 public key
pub fn public_key_from_ed25519_public_key(
    ed25519_public_key: &[u8],
) -> Result<X25519PublicKey, KeyError> {
    Ed25519PublicKey::try_from(ed25519_public_key)?.to_x25519()
}

/// Shared secret key from secret key and public key
pub fn shared_secret_key_from_secret_key_and_public_key(
    secret_key: &[u8],
    public_key: &[u8],
) -> Result<SharedSecret, KeyError> {
    let secret_key = X25519SecretKey::try_from(secret_key)?;
    let public_key = X25519PublicKey::try_from(public_key)?;
    secret_key.diffie_hellman(&public_key)
}

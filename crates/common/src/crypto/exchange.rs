//! X25519 key agreement
//!
//! Thin typed layer over `x25519-dalek`. Secret keys are stored as given and
//! clamped by the scalar multiplication itself, so an unclamped 32-byte input
//! agrees to the same value as its clamped form.

use std::fmt;

use curve25519_dalek::scalar::clamp_integer;
use x25519_dalek::{PublicKey, StaticSecret};

use super::keys::{fixed_size, fixed_size_from_hex, KeyError};

/// Size of an X25519 secret key in bytes
pub const X25519_SECRET_KEY_SIZE: usize = 32;
/// Size of an X25519 public key in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;
/// Size of an X25519 shared secret in bytes
pub const SHARED_SECRET_SIZE: usize = 32;

/// X25519 secret key (a Curve25519 scalar)
#[derive(Clone, PartialEq, Eq)]
pub struct X25519SecretKey([u8; X25519_SECRET_KEY_SIZE]);

impl fmt::Debug for X25519SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("X25519SecretKey(<redacted>)")
    }
}

impl From<[u8; X25519_SECRET_KEY_SIZE]> for X25519SecretKey {
    fn from(bytes: [u8; X25519_SECRET_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for X25519SecretKey {
    type Error = KeyError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(fixed_size(bytes)?))
    }
}

impl X25519SecretKey {
    /// Parse a secret key from a hexadecimal string
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        Ok(Self(fixed_size_from_hex(hex)?))
    }

    /// Generate a new random, clamped secret key using the system RNG
    pub fn generate() -> Result<Self, KeyError> {
        let mut bytes = [0u8; X25519_SECRET_KEY_SIZE];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| anyhow::anyhow!("failed to generate random bytes: {}", e))?;
        Ok(Self(clamp_integer(bytes)))
    }

    /// Convert secret key to raw bytes
    pub fn to_bytes(&self) -> [u8; X25519_SECRET_KEY_SIZE] {
        self.0
    }

    /// Convert secret key to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Whether the stored bytes already carry the X25519 clamping
    pub fn is_clamped(&self) -> bool {
        clamp_integer(self.0) == self.0
    }

    /// Derive the public key, X25519(secret, 9)
    pub fn public(&self) -> X25519PublicKey {
        let secret = StaticSecret::from(self.0);
        X25519PublicKey(PublicKey::from(&secret).to_bytes())
    }

    /// Compute the Diffie-Hellman shared secret with a peer's public key
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NonContributory` if the result is all zeros, which
    /// happens exactly when the peer key is a low-order point.
    pub fn diffie_hellman(&self, public_key: &X25519PublicKey) -> Result<SharedSecret, KeyError> {
        let secret = StaticSecret::from(self.0);
        let shared = secret.diffie_hellman(&PublicKey::from(public_key.0));
        if !shared.was_contributory() {
            return Err(KeyError::NonContributory);
        }
        Ok(SharedSecret(shared.to_bytes()))
    }
}

/// X25519 public key (a Montgomery u-coordinate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct X25519PublicKey([u8; X25519_PUBLIC_KEY_SIZE]);

impl From<[u8; X25519_PUBLIC_KEY_SIZE]> for X25519PublicKey {
    fn from(bytes: [u8; X25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for X25519PublicKey {
    type Error = KeyError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(fixed_size(bytes)?))
    }
}

impl X25519PublicKey {
    /// Parse a public key from a hexadecimal string
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        Ok(Self(fixed_size_from_hex(hex)?))
    }

    /// Convert public key to raw bytes
    pub fn to_bytes(&self) -> [u8; X25519_PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Convert public key to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Output of an X25519 key agreement
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret([u8; SHARED_SECRET_SIZE]);

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

impl SharedSecret {
    /// Convert shared secret to raw bytes
    pub fn to_bytes(&self) -> [u8; SHARED_SECRET_SIZE] {
        self.0
    }

    /// Convert shared secret to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

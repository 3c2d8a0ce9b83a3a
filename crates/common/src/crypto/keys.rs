use std::fmt;

use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::scalar::clamp_integer;
use ed25519_dalek::SigningKey;

use super::exchange::{X25519PublicKey, X25519SecretKey};

/// Size of an Ed25519 secret key (seed) in bytes
pub const ED25519_SECRET_KEY_SIZE: usize = 32;
/// Size of an Ed25519 keypair encoding (`seed || public key`) in bytes
pub const ED25519_KEYPAIR_SIZE: usize = 64;
/// Size of an Ed25519 public key in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Errors that can occur during key operations
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("key error: {0}")]
    Default(#[from] anyhow::Error),
    #[error("invalid key size, expected {expected}, got {got}")]
    InvalidSize { expected: usize, got: usize },
    #[error("invalid edwards point")]
    InvalidPoint,
    #[error("non-canonical edwards point encoding")]
    NonCanonicalPoint,
    #[error("edwards point has small order")]
    SmallOrder,
    #[error("keypair public half does not match its seed")]
    KeypairMismatch,
    #[error("key agreement produced a non-contributory shared secret")]
    NonContributory,
}

/// Copy a slice into a fixed-size array, failing on any length mismatch
pub(crate) fn fixed_size<const N: usize>(bytes: &[u8]) -> Result<[u8; N], KeyError> {
    bytes.try_into().map_err(|_| KeyError::InvalidSize {
        expected: N,
        got: bytes.len(),
    })
}

/// Decode a hex string into a fixed-size array
///
/// Accepts both plain hex and "0x"-prefixed hex strings.
pub(crate) fn fixed_size_from_hex<const N: usize>(hex: &str) -> Result<[u8; N], KeyError> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    let mut buff = [0; N];
    hex::decode_to_slice(hex, &mut buff).map_err(|e| anyhow::anyhow!("hex decode error: {}", e))?;
    Ok(buff)
}

/// Ed25519 secret key
///
/// Wraps the 32-byte seed of an Ed25519 keypair. The seed is the input to the
/// Ed25519 to X25519 secret-key mapping: SHA-512 the seed, keep the first
/// half, clamp it.
///
/// # Examples
///
/// ```ignore
/// let secret_key = Ed25519SecretKey::from_hex(
///     "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
/// )?;
/// let x25519_secret = secret_key.to_x25519();
/// assert!(x25519_secret.is_clamped());
/// ```
#[derive(Clone)]
pub struct Ed25519SecretKey(SigningKey);

impl fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ed25519SecretKey(<redacted>)")
    }
}

impl From<[u8; ED25519_SECRET_KEY_SIZE]> for Ed25519SecretKey {
    fn from(seed: [u8; ED25519_SECRET_KEY_SIZE]) -> Self {
        Self(SigningKey::from_bytes(&seed))
    }
}

impl TryFrom<&[u8]> for Ed25519SecretKey {
    type Error = KeyError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl Ed25519SecretKey {
    /// Create a secret key from either a 32-byte seed or a 64-byte
    /// `seed || public key` keypair
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slice is neither `ED25519_SECRET_KEY_SIZE` nor `ED25519_KEYPAIR_SIZE` bytes
    /// - The public half of a keypair does not belong to its seed
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        match bytes.len() {
            ED25519_SECRET_KEY_SIZE => Ok(Self::from(fixed_size(bytes)?)),
            ED25519_KEYPAIR_SIZE => {
                let (seed, public) = bytes.split_at(ED25519_SECRET_KEY_SIZE);
                let key = Self::from(fixed_size(seed)?);
                if key.public().to_bytes() != public {
                    return Err(KeyError::KeypairMismatch);
                }
                Ok(key)
            }
            got => Err(KeyError::InvalidSize {
                expected: ED25519_SECRET_KEY_SIZE,
                got,
            }),
        }
    }

    /// Parse a secret key seed from a hexadecimal string
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        Ok(Self::from(fixed_size_from_hex(hex)?))
    }

    /// Generate a new random secret key using the system RNG
    pub fn generate() -> Result<Self, KeyError> {
        let mut seed = [0u8; ED25519_SECRET_KEY_SIZE];
        getrandom::getrandom(&mut seed)
            .map_err(|e| anyhow::anyhow!("failed to generate random bytes: {}", e))?;
        Ok(Self::from(seed))
    }

    /// Derive the public key from this secret key
    pub fn public(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.0.verifying_key().to_bytes())
    }

    /// The 32-byte seed
    pub fn to_bytes(&self) -> [u8; ED25519_SECRET_KEY_SIZE] {
        self.0.to_bytes()
    }

    /// The 64-byte `seed || public key` encoding
    pub fn to_keypair_bytes(&self) -> [u8; ED25519_KEYPAIR_SIZE] {
        self.0.to_keypair_bytes()
    }

    /// Convert secret key seed to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Convert Ed25519 secret key to X25519 (Montgomery curve) for ECDH
    ///
    /// `to_scalar_bytes` is the unclamped first half of SHA-512(seed); the
    /// returned X25519 key is that value clamped.
    pub fn to_x25519(&self) -> X25519SecretKey {
        X25519SecretKey::from(clamp_integer(self.0.to_scalar_bytes()))
    }
}

/// Ed25519 public key
///
/// A compressed Edwards point: the y-coordinate with the sign of x in the top bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ed25519PublicKey([u8; ED25519_PUBLIC_KEY_SIZE]);

impl From<[u8; ED25519_PUBLIC_KEY_SIZE]> for Ed25519PublicKey {
    fn from(bytes: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Ed25519PublicKey {
    type Error = KeyError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(fixed_size(bytes)?))
    }
}

impl Ed25519PublicKey {
    /// Parse a public key from a hexadecimal string
    ///
    /// Accepts both plain hex and "0x"-prefixed hex strings.
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        Ok(Self(fixed_size_from_hex(hex)?))
    }

    /// Convert public key to raw bytes
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Convert public key to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Convert Ed25519 public key to X25519 (Montgomery curve) for ECDH
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The bytes do not decompress to a curve point
    /// - The encoding is not the canonical one for that point
    /// - The point has small order
    pub fn to_x25519(&self) -> Result<X25519PublicKey, KeyError> {
        let compressed = CompressedEdwardsY(self.0);
        let edwards_point = compressed.decompress().ok_or(KeyError::InvalidPoint)?;

        // decompress reduces y mod p and ignores the sign of a zero x
        if edwards_point.compress() != compressed {
            return Err(KeyError::NonCanonicalPoint);
        }
        if edwards_point.is_small_order() {
            return Err(KeyError::SmallOrder);
        }

        let montgomery_point = edwards_point.to_montgomery();
        Ok(X25519PublicKey::from(montgomery_point.to_bytes()))
    }
}

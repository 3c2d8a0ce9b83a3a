/**
 * Cryptographic types and operations.
 *  - Ed25519 secret and public keys
 *  - Their X25519 (Montgomery) counterparts
 *  - X25519 key agreement
 */
pub mod crypto;
/**
 * Hex text codec for bytes crossing the
 *  boundary between the bridge and a
 *  curve engine.
 */
pub mod wire;

pub mod prelude {
    pub use crate::crypto::{
        Ed25519PublicKey, Ed25519SecretKey, KeyError, SharedSecret, X25519PublicKey,
        X25519SecretKey,
    };
    pub use crate::wire::WireError;
}

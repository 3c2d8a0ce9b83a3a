//! The curve engine boundary
//!
//! A `CurveEngine` is the native capability the bridge delegates to. Inputs
//! and outputs cross this boundary as lowercase hex text; failures come back
//! as `EngineError`, whose detail the bridge logs and then discards.

use async_trait::async_trait;
use common::crypto::KeyError;
use common::wire::WireError;

mod native;

pub use native::NativeCurveEngine;

/// Errors a curve engine can report
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine error: {0}")]
    Default(#[from] anyhow::Error),
    #[error("wire error: {0}")]
    Wire(#[from] WireError),
    #[error("key error: {0}")]
    Key(#[from] KeyError),
    #[error("engine task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait CurveEngine: Send + Sync + std::fmt::Debug + 'static {
    /// Convert an Ed25519 secret key to a clamped X25519 secret key
    ///
    /// # Arguments
    /// * `ed25519_secret_key` - hex of a 32-byte seed or 64-byte keypair
    ///
    /// # Returns
    /// * `Ok(String)` - hex of the 32-byte X25519 secret key
    /// * `Err(EngineError)` - the input was invalid or the engine faulted
    async fn secret_key_from_ed25519_secret_key(
        &self,
        ed25519_secret_key: &str,
    ) -> Result<String, EngineError>;

    /// Convert an Ed25519 public key to an X25519 public key
    ///
    /// # Arguments
    /// * `ed25519_public_key` - hex of a 32-byte compressed Edwards point
    ///
    /// # Returns
    /// * `Ok(String)` - hex of the 32-byte Montgomery u-coordinate
    /// * `Err(EngineError)` - the point was invalid or the engine faulted
    async fn public_key_from_ed25519_public_key(
        &self,
        ed25519_public_key: &str,
    ) -> Result<String, EngineError>;

    /// Compute the X25519 shared secret
    ///
    /// # Arguments
    /// * `secret_key` - hex of a 32-byte X25519 secret key
    /// * `public_key` - hex of a 32-byte X25519 public key
    ///
    /// # Returns
    /// * `Ok(String)` - hex of the 32-byte shared secret
    /// * `Err(EngineError)` - invalid input, a non-contributory result, or an engine fault
    async fn shared_secret_key_from_secret_key_and_public_key(
        &self,
        secret_key: &str,
        public_key: &str,
    ) -> Result<String, EngineError>;
}

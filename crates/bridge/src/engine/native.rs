use async_trait::async_trait;
use common::crypto;
use common::wire;

use super::{CurveEngine, EngineError};

/// Curve engine backed by the dalek curve implementation
///
/// Decodes the wire text on the calling task, then runs the curve operation
/// on the Tokio blocking pool when a runtime is present. Under any other
/// executor the operation runs inline on the polling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCurveEngine;

impl NativeCurveEngine {
    async fn dispatch<F>(operation: &'static str, f: F) -> Result<String, EngineError>
    where
        F: FnOnce() -> Result<String, EngineError> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                tracing::trace!(operation, "dispatching to blocking pool");
                handle.spawn_blocking(f).await?
            }
            Err(_) => {
                tracing::trace!(operation, "no tokio runtime, running inline");
                f()
            }
        }
    }
}

#[async_trait]
impl CurveEngine for NativeCurveEngine {
    async fn secret_key_from_ed25519_secret_key(
        &self,
        ed25519_secret_key: &str,
    ) -> Result<String, EngineError> {
        let ed25519_secret_key = wire::decode(ed25519_secret_key)?;
        Self::dispatch("secret_key_from_ed25519_secret_key", move || {
            let secret_key = crypto::secret_key_from_ed25519_secret_key(&ed25519_secret_key)?;
            Ok(wire::encode(secret_key.to_bytes()))
        })
        .await
    }

    async fn public_key_from_ed25519_public_key(
        &self,
        ed25519_public_key: &str,
    ) -> Result<String, EngineError> {
        let ed25519_public_key = wire::decode(ed25519_public_key)?;
        Self::dispatch("public_key_from_ed25519_public_key", move || {
            let public_key = crypto::public_key_from_ed25519_public_key(&ed25519_public_key)?;
            Ok(wire::encode(public_key.to_bytes()))
        })
        .await
    }

    async fn shared_secret_key_from_secret_key_and_public_key(
        &self,
        secret_key: &str,
        public_key: &str,
    ) -> Result<String, EngineError> {
        let secret_key = wire::decode(secret_key)?;
        let public_key = wire::decode(public_key)?;
        Self::dispatch(
            "shared_secret_key_from_secret_key_and_public_key",
            move || {
                let shared_secret = crypto::shared_secret_key_from_secret_key_and_public_key(
                    &secret_key,
                    &public_key,
                )?;
                Ok(wire::encode(shared_secret.to_bytes()))
            },
        )
        .await
    }
}

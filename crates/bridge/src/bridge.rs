use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use common::crypto::{
    ED25519_KEYPAIR_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE,
    X25519_PUBLIC_KEY_SIZE, X25519_SECRET_KEY_SIZE,
};
use common::wire;
use futures::FutureExt;

use crate::config::BridgeConfig;
use crate::engine::{CurveEngine, EngineError, NativeCurveEngine};
use crate::outcome::{Outcome, KEY_SIZE, OPERATION_FAILED};
use crate::registry::{LinkError, ModuleRegistry};

/// Async façade over a curve engine
///
/// Each operation hex-encodes its input, awaits the engine, decodes the
/// 32-byte result and folds every failure into [`OPERATION_FAILED`]. The
/// bridge holds no per-call state: clones share only the engine handle, and
/// concurrent calls never observe each other.
///
/// # Examples
///
/// ```ignore
/// let bridge = KeyBridge::link(&ModuleRegistry::with_native(), &BridgeConfig::default())?;
///
/// let secret = bridge.secret_key_from_ed25519_secret_key(&ed25519_secret).await;
/// if secret == OPERATION_FAILED {
///     // handle failure
/// }
/// ```
#[derive(Clone, Debug)]
pub struct KeyBridge {
    engine: Arc<dyn CurveEngine>,
    validate_lengths: bool,
}

impl KeyBridge {
    /// Wrap an engine with the default configuration
    pub fn new(engine: Arc<dyn CurveEngine>) -> Self {
        Self::with_config(engine, &BridgeConfig::default())
    }

    pub fn with_config(engine: Arc<dyn CurveEngine>, config: &BridgeConfig) -> Self {
        Self {
            engine,
            validate_lengths: config.validate_lengths,
        }
    }

    /// A bridge over `NativeCurveEngine`
    pub fn native() -> Self {
        Self::new(Arc::new(NativeCurveEngine))
    }

    /// Resolve the configured engine from the registry
    ///
    /// This is the only availability check. A missing engine is a
    /// misconfiguration of the host, so it is reported here rather than as
    /// a per-call failure.
    pub fn link(registry: &ModuleRegistry, config: &BridgeConfig) -> Result<Self, LinkError> {
        match registry.get(&config.module_name) {
            Some(engine) => {
                tracing::info!(module = %config.module_name, "linked curve engine");
                Ok(Self::with_config(engine, config))
            }
            None => {
                let err = LinkError::NotLinked {
                    module: config.module_name.clone(),
                    platform: config.platform,
                };
                tracing::error!(module = %config.module_name, "{}", err);
                Err(err)
            }
        }
    }

    /// Secret key from Ed25519 secret key
    ///
    /// Returns the clamped X25519 secret key for a 32-byte Ed25519 seed (or
    /// a 64-byte `seed || public key` keypair).
    pub async fn secret_key_from_ed25519_secret_key(&self, ed25519_secret_key: &[u8]) -> Outcome {
        const OPERATION: &str = "secret_key_from_ed25519_secret_key";

        if self.validate_lengths
            && !matches!(
                ed25519_secret_key.len(),
                ED25519_SECRET_KEY_SIZE | ED25519_KEYPAIR_SIZE
            )
        {
            return rejected(OPERATION, ed25519_secret_key.len());
        }

        let ed25519_secret_key = wire::encode(ed25519_secret_key);
        settle(OPERATION, async {
            self.engine
                .secret_key_from_ed25519_secret_key(&ed25519_secret_key)
                .await
        })
        .await
    }

    /// Public key from Ed25519 public key
    ///
    /// Returns the X25519 u-coordinate of the Ed25519 point.
    pub async fn public_key_from_ed25519_public_key(&self, ed25519_public_key: &[u8]) -> Outcome {
        const OPERATION: &str = "public_key_from_ed25519_public_key";

        if self.validate_lengths && ed25519_public_key.len() != ED25519_PUBLIC_KEY_SIZE {
            return rejected(OPERATION, ed25519_public_key.len());
        }

        let ed25519_public_key = wire::encode(ed25519_public_key);
        settle(OPERATION, async {
            self.engine
                .public_key_from_ed25519_public_key(&ed25519_public_key)
                .await
        })
        .await
    }

    /// Shared secret key from secret key and public key
    ///
    /// Returns X25519(secret_key, public_key).
    pub async fn shared_secret_key_from_secret_key_and_public_key(
        &self,
        secret_key: &[u8],
        public_key: &[u8],
    ) -> Outcome {
        const OPERATION: &str = "shared_secret_key_from_secret_key_and_public_key";

        if self.validate_lengths {
            if secret_key.len() != X25519_SECRET_KEY_SIZE {
                return rejected(OPERATION, secret_key.len());
            }
            if public_key.len() != X25519_PUBLIC_KEY_SIZE {
                return rejected(OPERATION, public_key.len());
            }
        }

        let secret_key = wire::encode(secret_key);
        let public_key = wire::encode(public_key);
        settle(OPERATION, async {
            self.engine
                .shared_secret_key_from_secret_key_and_public_key(&secret_key, &public_key)
                .await
        })
        .await
    }
}

fn rejected(operation: &'static str, len: usize) -> Outcome {
    tracing::debug!(operation, len, "rejected input length");
    OPERATION_FAILED
}

/// Await an engine call and fold every way it can go wrong into `Failure`
async fn settle<F>(operation: &'static str, call: F) -> Outcome
where
    F: Future<Output = Result<String, EngineError>>,
{
    let output = match AssertUnwindSafe(call).catch_unwind().await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            tracing::debug!(operation, error = %e, "curve engine failed");
            return OPERATION_FAILED;
        }
        Err(_) => {
            tracing::debug!(operation, "curve engine panicked");
            return OPERATION_FAILED;
        }
    };

    match wire::decode_array::<KEY_SIZE>(&output) {
        Ok(bytes) => Outcome::Success(bytes),
        Err(e) => {
            tracing::debug!(operation, error = %e, "malformed curve engine output");
            OPERATION_FAILED
        }
    }
}

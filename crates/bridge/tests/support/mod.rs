//! Shared test utilities for bridge integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use bridge::{CurveEngine, EngineError, KeyBridge};
use sha2::{Digest, Sha512};

/// RFC 8032 section 7.1, test 1
pub const RFC8032_SECRET_1: &str =
    "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
/// RFC 8032 section 7.1, test 2
pub const RFC8032_SECRET_2: &str =
    "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb";

static TRACING: Once = Once::new();

/// Install a test subscriber once per test binary; RUST_LOG controls output
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn seed(hex: &str) -> [u8; 32] {
    let mut seed = [0u8; 32];
    hex::decode_to_slice(hex, &mut seed).unwrap();
    seed
}

pub fn random_seed() -> [u8; 32] {
    common::crypto::Ed25519SecretKey::generate()
        .unwrap()
        .to_bytes()
}

/// Ed25519 public key for a seed, derived independently of the bridge
pub fn ed25519_public(seed: &[u8; 32]) -> [u8; 32] {
    ed25519_dalek::SigningKey::from_bytes(seed)
        .verifying_key()
        .to_bytes()
}

/// Reference secret-key mapping: SHA-512(seed)[..32], clamped
pub fn reference_x25519_secret(seed: &[u8; 32]) -> [u8; 32] {
    let hash = Sha512::digest(seed);
    let mut scalar = [0u8; 32];
    scalar.copy_from_slice(&hash[..32]);
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

/// Reference public-key mapping via ed25519-dalek's birational map
pub fn reference_x25519_public(ed25519_public: &[u8; 32]) -> [u8; 32] {
    ed25519_dalek::VerifyingKey::from_bytes(ed25519_public)
        .unwrap()
        .to_montgomery()
        .to_bytes()
}

/// Reference X25519 function
pub fn reference_shared_secret(secret: [u8; 32], public: [u8; 32]) -> [u8; 32] {
    x25519_dalek::x25519(secret, public)
}

/// How a `ScriptedEngine` answers every call
#[derive(Debug, Clone)]
pub enum Script {
    /// Return this text verbatim
    Reply(String),
    /// Return an engine error
    Fail,
    /// Panic while being polled
    Panic,
}

/// Engine double that answers every call the same way and
///  records the wire text it was handed
#[derive(Debug)]
pub struct ScriptedEngine {
    script: Script,
    calls: AtomicUsize,
    inputs: Mutex<Vec<String>>,
}

impl ScriptedEngine {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }

    fn answer(&self, inputs: &[&str]) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs
            .lock()
            .unwrap()
            .extend(inputs.iter().map(|s| s.to_string()));
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail => Err(anyhow::anyhow!("scripted failure").into()),
            Script::Panic => panic!("scripted panic"),
        }
    }
}

#[async_trait]
impl CurveEngine for ScriptedEngine {
    async fn secret_key_from_ed25519_secret_key(
        &self,
        ed25519_secret_key: &str,
    ) -> Result<String, EngineError> {
        self.answer(&[ed25519_secret_key])
    }

    async fn public_key_from_ed25519_public_key(
        &self,
        ed25519_public_key: &str,
    ) -> Result<String, EngineError> {
        self.answer(&[ed25519_public_key])
    }

    async fn shared_secret_key_from_secret_key_and_public_key(
        &self,
        secret_key: &str,
        public_key: &str,
    ) -> Result<String, EngineError> {
        self.answer(&[secret_key, public_key])
    }
}

/// Run all three operations against `bridge` with well-sized inputs
pub async fn run_all(bridge: &KeyBridge) -> [bridge::Outcome; 3] {
    let key = [0x42u8; 32];
    [
        bridge.secret_key_from_ed25519_secret_key(&key).await,
        bridge.public_key_from_ed25519_public_key(&key).await,
        bridge
            .shared_secret_key_from_secret_key_and_public_key(&key, &key)
            .await,
    ]
}

//! Async bridge to a native X25519 curve engine
//!
//! This crate exposes three operations to a host application:
//!
//! - **secret_key_from_ed25519_secret_key**: Ed25519 seed → clamped X25519 secret key
//! - **public_key_from_ed25519_public_key**: Edwards point → Montgomery u-coordinate
//! - **shared_secret_key_from_secret_key_and_public_key**: X25519 Diffie-Hellman
//!
//! Each returns an [`Outcome`]. Whatever goes wrong inside the engine (bad
//! length, invalid point, low-order peer key, engine fault or panic) the
//! caller sees [`OPERATION_FAILED`] and nothing else.
//!
//! # Linking
//!
//! The bridge resolves its [`CurveEngine`] from a [`ModuleRegistry`] once, at
//! load time. A missing engine is a [`LinkError`] that tells the integrator
//! how to fix their build; it is never a per-call failure.
//!
//! ```rust,no_run
//! use bridge::{BridgeConfig, KeyBridge, ModuleRegistry, OPERATION_FAILED};
//!
//! # async fn example(ed25519_secret_key: &[u8]) -> Result<(), bridge::LinkError> {
//! let bridge = KeyBridge::link(&ModuleRegistry::with_native(), &BridgeConfig::default())?;
//!
//! let secret_key = bridge
//!     .secret_key_from_ed25519_secret_key(ed25519_secret_key)
//!     .await;
//! if secret_key == OPERATION_FAILED {
//!     // the cause is deliberately not exposed
//! }
//! # Ok(())
//! # }
//! ```

mod bridge;
/**
 * Bridge configuration, loadable from TOML.
 */
pub mod config;
/**
 * The curve engine trait and the native
 *  dalek-backed implementation.
 */
pub mod engine;
mod outcome;
mod registry;

pub use bridge::KeyBridge;
pub use config::{BridgeConfig, ConfigError, HostPlatform};
pub use engine::{CurveEngine, EngineError, NativeCurveEngine};
pub use outcome::{OperationFailed, Outcome, KEY_SIZE, OPERATION_FAILED};
pub use registry::{LinkError, ModuleRegistry, DEFAULT_MODULE_NAME};

pub mod prelude {
    pub use crate::bridge::KeyBridge;
    pub use crate::config::BridgeConfig;
    pub use crate::engine::CurveEngine;
    pub use crate::outcome::{Outcome, OPERATION_FAILED};
    pub use crate::registry::ModuleRegistry;
}

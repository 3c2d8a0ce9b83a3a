use std::collections::HashMap;
use std::sync::Arc;

use crate::config::HostPlatform;
use crate::engine::{CurveEngine, NativeCurveEngine};

/// Name the native curve engine registers under by default
pub const DEFAULT_MODULE_NAME: &str = "X25519Bridge";

/// Raised at load time when the configured curve engine is not registered
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("{}", not_linked_message(.module, .platform))]
    NotLinked {
        module: String,
        platform: HostPlatform,
    },
}

fn not_linked_message(module: &str, platform: &HostPlatform) -> String {
    let mut steps = String::new();
    if *platform == HostPlatform::Ios {
        steps.push_str("- You have run 'pod install'\n");
    }
    steps.push_str("- You rebuilt the app after installing the package\n");
    steps.push_str("- You are not using Expo managed workflow\n");
    format!(
        "The curve engine module '{}' doesn't seem to be linked. Make sure: \n\n{}",
        module, steps
    )
}

/// The host's table of linked native capabilities
///
/// Engines are registered once at startup; `KeyBridge::link` resolves its
/// engine from here and never consults the registry again.
#[derive(Debug, Default, Clone)]
pub struct ModuleRegistry {
    modules: HashMap<String, Arc<dyn CurveEngine>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with `NativeCurveEngine` under `DEFAULT_MODULE_NAME`
    pub fn with_native() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_MODULE_NAME, Arc::new(NativeCurveEngine));
        registry
    }

    /// Register an engine, returning any engine previously
    ///  registered under the same name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        engine: Arc<dyn CurveEngine>,
    ) -> Option<Arc<dyn CurveEngine>> {
        self.modules.insert(name.into(), engine)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CurveEngine>> {
        self.modules.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }
}

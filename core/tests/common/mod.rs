// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use serde_json::Value;
use stagehand::{
  ActionBuilder, ActionProvider, IdentityContext, ParamMap, PipelineAssembler, ProviderDefaults, ProviderRegistry,
  StageComposer,
};
use std::sync::Arc;
use tracing::Level;

pub const TEST_REGION: &str = "eu-central-1";
pub const TEST_ACCOUNT: &str = "123456789012";

pub fn test_context() -> IdentityContext {
  IdentityContext::new(TEST_REGION, TEST_ACCOUNT)
}

/// Builds a `ParamMap` from `(key, value)` pairs.
pub fn params<const N: usize>(pairs: [(&str, Value); N]) -> ParamMap {
  pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

pub fn s3_params() -> ParamMap {
  params([("bucket", "b".into()), ("object_key", "k".into())])
}

pub fn jenkins_params() -> ParamMap {
  params([("project_name", "p".into()), ("server_url", "u".into())])
}

// --- A provider registered only by tests ---

/// Deploys by invoking a function; requires `function_name`, owner `Custom`,
/// and contributes a default `payload`.
pub struct InvokeFunctionProvider;

impl ActionProvider for InvokeFunctionProvider {
  fn tag(&self) -> &str {
    "InvokeFunction"
  }

  fn required_keys(&self) -> &[&str] {
    &["function_name"]
  }

  fn defaults(&self) -> ProviderDefaults {
    let mut defaults = ProviderDefaults::with_owner("Custom");
    defaults.config.insert("payload".to_string(), Value::from("{}"));
    defaults
  }
}

pub fn builtin_registry() -> Arc<ProviderRegistry> {
  Arc::new(ProviderRegistry::with_builtin_providers())
}

pub fn extended_registry() -> Arc<ProviderRegistry> {
  let registry = ProviderRegistry::with_builtin_providers();
  registry.register(InvokeFunctionProvider);
  Arc::new(registry)
}

pub fn builder() -> ActionBuilder {
  ActionBuilder::new(extended_registry())
}

pub fn composer() -> StageComposer {
  StageComposer::new(builder())
}

pub fn assembler() -> PipelineAssembler {
  PipelineAssembler::new(composer())
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// stagehand/src/pipeline/store.rs

//! Defines the `ParameterStore` trait and its implementations for sourcing
//! the resolved parameter map of a stage.

use crate::action::ParamMap;
use crate::error::{ComposerError, ComposerResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::marker::PhantomData;

/// Supplies already-parsed parameters for a stage, keyed by a stage key.
///
/// The composer makes no schema assumptions about the returned map beyond
/// each provider's required keys.
#[async_trait]
pub trait ParameterStore: Send + Sync {
  async fn resolve(&self, stage_key: &str) -> ComposerResult<ParamMap>;
}

// --- Static Parameter Store ---

/// Serves parameters from an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct StaticParameterStore {
  entries: HashMap<String, ParamMap>,
}

impl StaticParameterStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert<S: Into<String>>(&mut self, stage_key: S, params: ParamMap) -> &mut Self {
    self.entries.insert(stage_key.into(), params);
    self
  }

  pub fn with<S: Into<String>>(mut self, stage_key: S, params: ParamMap) -> Self {
    self.insert(stage_key, params);
    self
  }
}

#[async_trait]
impl ParameterStore for StaticParameterStore {
  async fn resolve(&self, stage_key: &str) -> ComposerResult<ParamMap> {
    self
      .entries
      .get(stage_key)
      .cloned()
      .ok_or_else(|| ComposerError::ParameterStoreFailure {
        stage_key: stage_key.to_string(),
        source: anyhow::anyhow!("no parameters stored under '{}'", stage_key),
      })
  }
}

// --- Functional Parameter Store ---

/// Resolves parameters by invoking a user-supplied asynchronous function,
/// e.g. one that reads a remote parameter service.
///
/// The function's `anyhow::Error` is wrapped in
/// [`ComposerError::ParameterStoreFailure`] along with the stage key.
pub struct FunctionalParameterStore<F, Fut>
where
  F: Fn(String) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<ParamMap>> + Send + 'static,
{
  resolver: F,
  _phantom_fut: PhantomData<fn() -> Fut>,
}

impl<F, Fut> FunctionalParameterStore<F, Fut>
where
  F: Fn(String) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<ParamMap>> + Send + 'static,
{
  pub fn new(resolver: F) -> Self {
    Self {
      resolver,
      _phantom_fut: PhantomData,
    }
  }
}

#[async_trait]
impl<F, Fut> ParameterStore for FunctionalParameterStore<F, Fut>
where
  F: Fn(String) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<ParamMap>> + Send + 'static,
{
  async fn resolve(&self, stage_key: &str) -> ComposerResult<ParamMap> {
    (self.resolver)(stage_key.to_string())
      .await
      .map_err(|source| ComposerError::ParameterStoreFailure {
        stage_key: stage_key.to_string(),
        source,
      })
  }
}

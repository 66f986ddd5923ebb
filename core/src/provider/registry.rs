// stagehand/src/provider/registry.rs

//! Defines `ProviderRegistry`, a tag-keyed registry of provider contracts.

use super::builtin::{JenkinsProvider, S3Provider};
use super::contract::ActionProvider;
use crate::error::{ComposerError, ComposerResult};

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{event, Level};

/// Open registry of [`ActionProvider`]s keyed by their tag.
///
/// Registration takes `&self`, so a registry can be shared behind an `Arc`
/// and extended at startup. Lookups only take a read lock.
pub struct ProviderRegistry {
  providers: RwLock<HashMap<String, Arc<dyn ActionProvider>>>,
}

impl ProviderRegistry {
  /// Creates a new, empty registry.
  pub fn new() -> Self {
    Self {
      providers: RwLock::new(HashMap::new()),
    }
  }

  /// Creates a registry holding the `S3` and `Jenkins` providers.
  pub fn with_builtin_providers() -> Self {
    let registry = Self::new();
    registry.register(S3Provider);
    registry.register(JenkinsProvider);
    registry
  }

  /// Registers `provider` under its tag, replacing any provider already
  /// registered under that tag.
  pub fn register<P: ActionProvider>(&self, provider: P) {
    self.register_arc(Arc::new(provider));
  }

  pub fn register_arc(&self, provider: Arc<dyn ActionProvider>) {
    let tag = provider.tag().to_string();
    event!(Level::DEBUG, provider = %tag, required_keys = ?provider.required_keys(), "Registering provider.");
    if self.providers.write().insert(tag.clone(), provider).is_some() {
      event!(Level::WARN, provider = %tag, "Replaced previously registered provider.");
    }
  }

  /// Looks up the provider registered under `tag`.
  pub fn get(&self, tag: &str) -> ComposerResult<Arc<dyn ActionProvider>> {
    self.providers.read().get(tag).cloned().ok_or_else(|| {
      event!(Level::ERROR, provider = tag, "No provider registered for tag.");
      ComposerError::UnknownProvider {
        provider: tag.to_string(),
      }
    })
  }

  pub fn contains(&self, tag: &str) -> bool {
    self.providers.read().contains_key(tag)
  }

  /// Registered tags, sorted.
  pub fn tags(&self) -> Vec<String> {
    let mut tags: Vec<String> = self.providers.read().keys().cloned().collect();
    tags.sort();
    tags
  }
}

impl Default for ProviderRegistry {
  fn default() -> Self {
    Self::with_builtin_providers()
  }
}

impl std::fmt::Debug for ProviderRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProviderRegistry").field("tags", &self.tags()).finish()
  }
}

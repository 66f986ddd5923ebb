// stagehand/src/action/builder.rs

//! Contains `ActionRequest` and the `ActionBuilder` that turns a request into
//! a validated [`ActionDescriptor`].

use super::{ActionDescriptor, Category, ParamMap};
use crate::context::IdentityContext;
use crate::error::{ComposerError, ComposerResult};
use crate::provider::ProviderRegistry;

use serde_json::Value;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Config key the deployment region is recorded under.
pub const REGION_KEY: &str = "region";
/// Config key the deployment account id is recorded under.
pub const ACCOUNT_ID_KEY: &str = "account_id";

/// A fully specified logical action, as consumed by [`ActionBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
  pub name: String,
  pub provider: String,
  pub category: Category,
  pub run_order: u32,
  pub params: ParamMap,
  pub owner: Option<String>,
}

impl ActionRequest {
  /// A request with run order 1, no params and no explicit owner.
  pub fn new<N: Into<String>, P: Into<String>>(name: N, provider: P, category: Category) -> Self {
    Self {
      name: name.into(),
      provider: provider.into(),
      category,
      run_order: 1,
      params: ParamMap::new(),
      owner: None,
    }
  }

  pub fn run_order(mut self, run_order: u32) -> Self {
    self.run_order = run_order;
    self
  }

  pub fn owner<S: Into<String>>(mut self, owner: S) -> Self {
    self.owner = Some(owner.into());
    self
  }

  pub fn param<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
    self.params.insert(key.into(), value.into());
    self
  }

  pub fn params(mut self, params: ParamMap) -> Self {
    self.params.extend(params);
    self
  }
}

/// Builds action descriptors by dispatching to the provider registered for
/// each request's provider tag.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
  registry: Arc<ProviderRegistry>,
}

impl ActionBuilder {
  pub fn new(registry: Arc<ProviderRegistry>) -> Self {
    Self { registry }
  }

  pub fn registry(&self) -> &Arc<ProviderRegistry> {
    &self.registry
  }

  /// Validates `request` against its provider's contract and produces a descriptor.
  ///
  /// The configuration is layered as provider defaults, then `request.params`,
  /// then `region`/`account_id` from `context` when the params do not set them.
  #[instrument(
    name = "ActionBuilder::build",
    skip_all,
    fields(action = %request.name, provider = %request.provider, category = %request.category),
    err(Display)
  )]
  pub fn build(&self, context: &IdentityContext, request: ActionRequest) -> ComposerResult<ActionDescriptor> {
    let provider = self.registry.get(&request.provider)?;

    if request.run_order == 0 {
      return Err(ComposerError::InvalidRunOrder {
        action_name: request.name,
      });
    }

    let defaults = provider.defaults();
    let mut config = defaults.config;
    config.extend(request.params);

    let region = resolve_identity(&mut config, REGION_KEY, context.region())?;
    let account_id = resolve_identity(&mut config, ACCOUNT_ID_KEY, context.account_id())?;

    provider.validate(&config)?;

    let owner = request.owner.or(defaults.owner);
    event!(
      Level::DEBUG,
      owner = ?owner,
      run_order = request.run_order,
      %region,
      %account_id,
      config_keys = config.len(),
      "Action descriptor built."
    );

    Ok(ActionDescriptor::new(
      request.name,
      request.provider,
      request.category,
      owner,
      request.run_order,
      config,
      region,
      account_id,
    ))
  }
}

/// Returns the explicit string under `key`, or records and returns `fallback`.
fn resolve_identity(config: &mut ParamMap, key: &str, fallback: &str) -> ComposerResult<String> {
  match config.get(key) {
    Some(Value::String(explicit)) => {
      event!(Level::TRACE, key, value = %explicit, "Using explicit identity override.");
      Ok(explicit.clone())
    }
    None | Some(Value::Null) => {
      config.insert(key.to_string(), Value::String(fallback.to_string()));
      Ok(fallback.to_string())
    }
    Some(other) => Err(ComposerError::InvalidParameter {
      key: key.to_string(),
      message: format!("expected a string, found {}", other),
    }),
  }
}

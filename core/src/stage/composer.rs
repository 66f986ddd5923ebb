// stagehand/src/stage/composer.rs

//! Contains `StageComposer`, which applies category defaults to a
//! [`StageSpec`] and delegates each action to the [`ActionBuilder`].

use super::{Stage, StageSpec, DEFAULT_BUILD_TIMEOUT, DEFAULT_RUN_ORDER, TIMEOUT_KEY};
use crate::action::{ActionBuilder, ActionRequest, Category};
use crate::context::IdentityContext;
use crate::error::{ComposerError, ComposerResult};
use crate::provider::ProviderRegistry;
use crate::stage::spec::ActionSpec;

use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[derive(Debug, Clone)]
pub struct StageComposer {
  builder: ActionBuilder,
}

impl StageComposer {
  pub fn new(builder: ActionBuilder) -> Self {
    Self { builder }
  }

  /// A composer over a fresh registry of the built-in providers.
  pub fn with_builtin_providers() -> Self {
    Self::new(ActionBuilder::new(Arc::new(ProviderRegistry::with_builtin_providers())))
  }

  pub fn builder(&self) -> &ActionBuilder {
    &self.builder
  }

  /// Composes `spec` into an immutable [`Stage`].
  ///
  /// Errors from the builder are returned as-is; the first failing action
  /// stops composition.
  #[instrument(
    name = "StageComposer::compose",
    skip_all,
    fields(stage = %spec.name, category = %spec.category, num_actions = spec.actions.len()),
    err(Display)
  )]
  pub fn compose(&self, context: &IdentityContext, spec: StageSpec) -> ComposerResult<Stage> {
    if spec.actions.is_empty() {
      return Err(ComposerError::EmptyStage { stage_name: spec.name });
    }

    let mut seen = HashSet::new();
    for action in &spec.actions {
      if !seen.insert(action.name.as_str()) {
        return Err(ComposerError::StageInvariant {
          stage_name: spec.name.clone(),
          message: format!("action name '{}' is declared more than once", action.name),
        });
      }
    }

    let mut actions = Vec::with_capacity(spec.actions.len());
    for action_spec in spec.actions {
      let provider_timeout = self.provider_default_is_set(&action_spec.provider, TIMEOUT_KEY);
      let request = apply_defaults(spec.category, action_spec, provider_timeout);
      actions.push(self.builder.build(context, request)?);
    }

    // Stable, so equal run orders keep declaration order.
    actions.sort_by_key(|a| a.run_order());

    if spec.category == Category::Source && !actions.iter().any(|a| a.run_order() == DEFAULT_RUN_ORDER) {
      return Err(ComposerError::StageInvariant {
        stage_name: spec.name,
        message: format!("a Source stage needs an action with run order {}", DEFAULT_RUN_ORDER),
      });
    }

    event!(Level::DEBUG, "Stage composed.");
    Ok(Stage::new(spec.name, spec.category, actions))
  }

  /// Whether the provider registered under `provider` contributes a non-null
  /// default for `key`. Unknown providers contribute nothing; the builder
  /// reports them.
  fn provider_default_is_set(&self, provider: &str, key: &str) -> bool {
    self
      .builder
      .registry()
      .get(provider)
      .map_or(false, |p| p.defaults().config.get(key).map_or(false, |v| !v.is_null()))
  }
}

/// `provider_timeout` is set when the provider's own defaults carry a
/// timeout; that default then wins over the category default.
fn apply_defaults(stage_category: Category, spec: ActionSpec, provider_timeout: bool) -> ActionRequest {
  let category = spec.category.unwrap_or(stage_category);
  let mut params = spec.params;

  if category == Category::Build && !provider_timeout {
    let unset = params.get(TIMEOUT_KEY).map_or(true, Value::is_null);
    if unset {
      event!(Level::TRACE, action = %spec.name, timeout = DEFAULT_BUILD_TIMEOUT, "Applying default build timeout.");
      params.insert(TIMEOUT_KEY.to_string(), Value::from(DEFAULT_BUILD_TIMEOUT));
    }
  }

  ActionRequest {
    name: spec.name,
    provider: spec.provider,
    category,
    run_order: spec.run_order.unwrap_or(DEFAULT_RUN_ORDER),
    params,
    owner: spec.owner,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn build_actions_get_default_timeout() {
    let request = apply_defaults(Category::Build, ActionSpec::new("b", "Jenkins"), false);
    assert_eq!(request.category, Category::Build);
    assert_eq!(request.params[TIMEOUT_KEY], json!(DEFAULT_BUILD_TIMEOUT));
    assert_eq!(request.run_order, DEFAULT_RUN_ORDER);
  }

  #[test]
  fn explicit_timeout_is_kept() {
    let spec = ActionSpec::new("b", "Jenkins").param(TIMEOUT_KEY, 45);
    let request = apply_defaults(Category::Build, spec, false);
    assert_eq!(request.params[TIMEOUT_KEY], json!(45));
  }

  #[test]
  fn non_build_actions_get_no_timeout() {
    let spec = ActionSpec::new("approve", "Manual").category(Category::Approval);
    let request = apply_defaults(Category::Build, spec, false);
    assert_eq!(request.category, Category::Approval);
    assert!(!request.params.contains_key(TIMEOUT_KEY));
  }

  #[test]
  fn provider_timeout_suppresses_category_default() {
    let request = apply_defaults(Category::Build, ActionSpec::new("b", "LongBuild"), true);
    assert!(!request.params.contains_key(TIMEOUT_KEY));
  }
}

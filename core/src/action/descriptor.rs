// stagehand/src/action/descriptor.rs

//! Defines `ActionDescriptor`, one validated executable unit inside a stage.

use super::{Category, ParamMap};
use serde::Serialize;

/// A provider-conformant action, ready to hand to the orchestration engine.
///
/// Only [`ActionBuilder`](super::ActionBuilder) constructs descriptors and
/// every field is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDescriptor {
  name: String,
  provider: String,
  category: Category,
  #[serde(skip_serializing_if = "Option::is_none")]
  owner: Option<String>,
  run_order: u32,
  config: ParamMap,
  region: String,
  account_id: String,
}

impl ActionDescriptor {
  #[allow(clippy::too_many_arguments)]
  pub(crate) fn new(
    name: String,
    provider: String,
    category: Category,
    owner: Option<String>,
    run_order: u32,
    config: ParamMap,
    region: String,
    account_id: String,
  ) -> Self {
    Self {
      name,
      provider,
      category,
      owner,
      run_order,
      config,
      region,
      account_id,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn provider(&self) -> &str {
    &self.provider
  }

  pub fn category(&self) -> Category {
    self.category
  }

  pub fn owner(&self) -> Option<&str> {
    self.owner.as_deref()
  }

  pub fn run_order(&self) -> u32 {
    self.run_order
  }

  /// The merged configuration: provider defaults, then params, then the
  /// identity context for `region`/`account_id` when params left them out.
  pub fn config(&self) -> &ParamMap {
    &self.config
  }

  pub fn region(&self) -> &str {
    &self.region
  }

  pub fn account_id(&self) -> &str {
    &self.account_id
  }
}

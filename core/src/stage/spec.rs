// stagehand/src/stage/spec.rs

//! Inputs to the [`StageComposer`](super::StageComposer): loosely specified
//! actions grouped under a stage name, before any defaults are applied.

use crate::action::{Category, ParamMap};
use serde_json::Value;

/// An action as declared in configuration. Category and run order may be
/// left out; the composer fills them in.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
  pub name: String,
  pub provider: String,
  /// Falls back to the stage's category.
  pub category: Option<Category>,
  /// Falls back to [`DEFAULT_RUN_ORDER`](super::DEFAULT_RUN_ORDER).
  pub run_order: Option<u32>,
  pub owner: Option<String>,
  pub params: ParamMap,
}

impl ActionSpec {
  pub fn new<N: Into<String>, P: Into<String>>(name: N, provider: P) -> Self {
    Self {
      name: name.into(),
      provider: provider.into(),
      category: None,
      run_order: None,
      owner: None,
      params: ParamMap::new(),
    }
  }

  pub fn category(mut self, category: Category) -> Self {
    self.category = Some(category);
    self
  }

  pub fn run_order(mut self, run_order: u32) -> Self {
    self.run_order = Some(run_order);
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

/// A stage as declared in configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSpec {
  pub name: String,
  pub category: Category,
  pub actions: Vec<ActionSpec>,
  /// Key to resolve shared params for every action from a
  /// [`ParameterStore`](crate::pipeline::ParameterStore).
  pub parameter_key: Option<String>,
}

impl StageSpec {
  pub fn new<N: Into<String>>(name: N, category: Category) -> Self {
    Self {
      name: name.into(),
      category,
      actions: Vec::new(),
      parameter_key: None,
    }
  }

  pub fn action(mut self, action: ActionSpec) -> Self {
    self.actions.push(action);
    self
  }

  pub fn parameter_key<S: Into<String>>(mut self, key: S) -> Self {
    self.parameter_key = Some(key.into());
    self
  }

  /// Layers `shared` beneath every action's own params; keys an action
  /// already sets are left untouched.
  pub(crate) fn merge_shared_params(&mut self, shared: &ParamMap) {
    for action in &mut self.actions {
      for (key, value) in shared {
        action.params.entry(key.clone()).or_insert_with(|| value.clone());
      }
    }
  }
}

// stagehand/src/stage/definition.rs

use crate::action::{ActionDescriptor, Category};
use serde::Serialize;

/// A named, ordered group of actions sharing a pipeline position.
///
/// Actions are sorted by run order; actions with equal run order keep the
/// order they were declared in and run concurrently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
  name: String,
  category: Category,
  actions: Vec<ActionDescriptor>,
}

impl Stage {
  pub(crate) fn new(name: String, category: Category, actions: Vec<ActionDescriptor>) -> Self {
    Self { name, category, actions }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn category(&self) -> Category {
    self.category
  }

  pub fn actions(&self) -> &[ActionDescriptor] {
    &self.actions
  }

  pub fn action(&self, name: &str) -> Option<&ActionDescriptor> {
    self.actions.iter().find(|a| a.name() == name)
  }

  /// Actions bucketed by run order, ascending. Each bucket executes concurrently.
  pub fn run_order_groups(&self) -> Vec<(u32, Vec<&ActionDescriptor>)> {
    let mut groups: Vec<(u32, Vec<&ActionDescriptor>)> = Vec::new();
    for action in &self.actions {
      match groups.last_mut() {
        Some((run_order, members)) if *run_order == action.run_order() => members.push(action),
        _ => groups.push((action.run_order(), vec![action])),
      }
    }
    groups
  }
}

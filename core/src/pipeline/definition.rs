// stagehand/src/pipeline/definition.rs

//! Contains the `PipelineDefinition` produced by the
//! [`PipelineAssembler`](super::PipelineAssembler).

use crate::stage::Stage;
use serde::Serialize;

/// A named pipeline: its stages in declaration order, stage names unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineDefinition {
  name: String,
  stages: Vec<Stage>,
}

impl PipelineDefinition {
  pub(crate) fn new(name: String, stages: Vec<Stage>) -> Self {
    Self { name, stages }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn stages(&self) -> &[Stage] {
    &self.stages
  }

  pub fn stage(&self, name: &str) -> Option<&Stage> {
    self.stages.iter().find(|s| s.name() == name)
  }

  pub fn stage_names(&self) -> Vec<&str> {
    self.stages.iter().map(Stage::name).collect()
  }

  pub fn num_actions(&self) -> usize {
    self.stages.iter().map(|s| s.actions().len()).sum()
  }
}

// stagehand/src/pipeline/render.rs

//! The boundary to the orchestration engine: renders a
//! [`PipelineDefinition`] into the engine's template format.

use super::PipelineDefinition;
use crate::action::ActionDescriptor;
use crate::error::{ComposerError, ComposerResult};
use crate::stage::Stage;

use serde_json::{json, Map, Value};
use tracing::{event, Level};

/// Action type version stamped on every rendered action.
pub const ACTION_TYPE_VERSION: &str = "1";

/// Renders a pipeline definition for a particular orchestration engine.
pub trait PipelineRenderer {
  type Output;

  fn render(&self, definition: &PipelineDefinition) -> ComposerResult<Self::Output>;
}

/// Renders a CodePipeline-style stage/action declaration as JSON.
///
/// ```text
/// { "Name": ..., "Stages": [ { "Name": ..., "Actions": [ {
///     "Name", "ActionTypeId": { "Category", "Owner", "Provider", "Version" },
///     "RunOrder", "Configuration", "Region", "AccountId" } ] } ] }
/// ```
/// `Owner` is left out for actions without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTemplateRenderer {
  pub pretty: bool,
}

impl JsonTemplateRenderer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn pretty() -> Self {
    Self { pretty: true }
  }

  /// Renders straight to a JSON string.
  pub fn render_string(&self, definition: &PipelineDefinition) -> ComposerResult<String> {
    let value = self.render(definition)?;
    let rendered = if self.pretty {
      serde_json::to_string_pretty(&value)
    } else {
      serde_json::to_string(&value)
    };
    rendered.map_err(|e| ComposerError::Render(e.to_string()))
  }
}

impl PipelineRenderer for JsonTemplateRenderer {
  type Output = Value;

  fn render(&self, definition: &PipelineDefinition) -> ComposerResult<Value> {
    event!(
      Level::DEBUG,
      pipeline = definition.name(),
      num_stages = definition.stages().len(),
      "Rendering pipeline template."
    );
    let stages: Vec<Value> = definition.stages().iter().map(render_stage).collect();
    Ok(json!({
      "Name": definition.name(),
      "Stages": stages,
    }))
  }
}

fn render_stage(stage: &Stage) -> Value {
  let actions: Vec<Value> = stage.actions().iter().map(render_action).collect();
  json!({
    "Name": stage.name(),
    "Actions": actions,
  })
}

fn render_action(action: &ActionDescriptor) -> Value {
  let mut type_id = Map::new();
  type_id.insert("Category".into(), Value::from(action.category().as_str()));
  if let Some(owner) = action.owner() {
    type_id.insert("Owner".into(), Value::from(owner));
  }
  type_id.insert("Provider".into(), Value::from(action.provider()));
  type_id.insert("Version".into(), Value::from(ACTION_TYPE_VERSION));

  let configuration: Map<String, Value> = action
    .config()
    .iter()
    .map(|(k, v)| (k.clone(), v.clone()))
    .collect();

  json!({
    "Name": action.name(),
    "ActionTypeId": type_id,
    "RunOrder": action.run_order(),
    "Configuration": configuration,
    "Region": action.region(),
    "AccountId": action.account_id(),
  })
}

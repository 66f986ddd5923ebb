// stagehand/examples/custom_provider.rs

use stagehand::{
  ActionBuilder, ActionProvider, ActionSpec, Category, ComposerError, ComposerResult, IdentityContext, ProviderDefaults,
  ProviderRegistry, StageComposer, StageSpec, StaticParameterStore, PipelineAssembler, ParamMap,
};
use std::sync::Arc;
use tracing::{error, info};

// A provider the built-in registry doesn't know about.
struct ManualApproval;

impl ActionProvider for ManualApproval {
  fn tag(&self) -> &str {
    "Manual"
  }

  fn required_keys(&self) -> &[&str] {
    &["notification_topic"]
  }

  fn defaults(&self) -> ProviderDefaults {
    ProviderDefaults::with_owner("AWS")
  }
}

#[tokio::main]
async fn main() -> ComposerResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Custom Provider Example ---");

  let registry = Arc::new(ProviderRegistry::with_builtin_providers());
  registry.register(ManualApproval);
  let assembler = PipelineAssembler::new(StageComposer::new(ActionBuilder::new(registry)));
  let ctx = IdentityContext::new("us-east-1", "222222222222");

  let mut approval_params = ParamMap::new();
  approval_params.insert("notification_topic".into(), "arn:aws:sns:us-east-1:222222222222:approvals".into());
  let store = StaticParameterStore::new().with("approval", approval_params);

  let specs = vec![
    StageSpec::new("Approve", Category::Approval)
      .parameter_key("approval")
      .action(ActionSpec::new("approve", "Manual")),
    // Missing its notification topic on purpose.
    StageSpec::new("ApproveAgain", Category::Approval).action(ActionSpec::new("approve", "Manual")),
  ];

  match assembler.assemble_with_store(&ctx, &store, "approvals", specs).await {
    Ok(pipeline) => info!("Assembled {} stages.", pipeline.stages().len()),
    Err(ComposerError::Assembly { failures, .. }) => {
      for failure in &failures {
        error!("{}", failure);
      }
    }
    Err(other) => return Err(other),
  }

  Ok(())
}

// stagehand/examples/basic_pipeline.rs

use stagehand::{constructs, ComposerResult, IdentityContext, JsonTemplateRenderer, ParamMap, PipelineAssembler};
use tracing::info;

#[tokio::main]
async fn main() -> ComposerResult<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Pipeline Example ---");

  // 1. Resolve the deployment identity. A real tool would use
  //    IdentityContext::from_env() and abort on error.
  let ctx = IdentityContext::new("eu-west-1", "111111111111");

  // 2. Parameters as they would come out of the parameter store.
  let mut source_params = ParamMap::new();
  source_params.insert("bucket".into(), "my-artifacts".into());
  source_params.insert("object_key".into(), "app/source.zip".into());

  let mut build_params = ParamMap::new();
  build_params.insert("project_name".into(), "my-app".into());
  build_params.insert("server_url".into(), "https://jenkins.example.com".into());

  // 3. Assemble the built-in S3 source and Jenkins build stages.
  let assembler = PipelineAssembler::default();
  let pipeline = assembler.assemble(
    &ctx,
    "my-app-pipeline",
    vec![constructs::s3_source(source_params), constructs::jenkins_build(build_params)],
  )?;

  for stage in pipeline.stages() {
    for action in stage.actions() {
      info!(
        "Stage '{}': action '{}' ({}/{}) run order {}",
        stage.name(),
        action.name(),
        action.category(),
        action.provider(),
        action.run_order()
      );
    }
  }

  // 4. Render the template for the orchestration engine.
  let template = JsonTemplateRenderer::pretty().render_string(&pipeline)?;
  println!("{}", template);

  Ok(())
}

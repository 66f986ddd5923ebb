// stagehand/benches/composer_benchmarks.rs

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use stagehand::{
  constructs,
  ActionBuilder,
  ActionRequest,
  ActionSpec,
  Category,
  IdentityContext,
  JsonTemplateRenderer,
  ParamMap,
  PipelineAssembler,
  PipelineRenderer,
  ProviderRegistry,
  StageComposer,
  StageSpec,
};
use std::sync::Arc;

// --- Common Fixtures ---
fn bench_context() -> IdentityContext {
  IdentityContext::new("us-east-1", "123456789012")
}

fn s3_params() -> ParamMap {
  let mut params = ParamMap::new();
  params.insert("bucket".to_string(), json!("artifacts"));
  params.insert("object_key".to_string(), json!("app/source.zip"));
  params
}

fn jenkins_params() -> ParamMap {
  let mut params = ParamMap::new();
  params.insert("project_name".to_string(), json!("app"));
  params.insert("server_url".to_string(), json!("https://jenkins.example.com"));
  params
}

fn assembler() -> PipelineAssembler {
  let registry = Arc::new(ProviderRegistry::with_builtin_providers());
  PipelineAssembler::new(StageComposer::new(ActionBuilder::new(registry)))
}

// Source stage followed by `num_build_stages` build stages of `actions_per_stage` actions each.
fn pipeline_specs(num_build_stages: usize, actions_per_stage: usize) -> Vec<StageSpec> {
  let mut specs = vec![constructs::s3_source(s3_params())];
  for s in 0..num_build_stages {
    let mut stage = StageSpec::new(format!("Build-{}", s), Category::Build);
    for a in 0..actions_per_stage {
      stage = stage.action(
        ActionSpec::new(format!("build-{}", a), "Jenkins")
          .run_order((a % 3) as u32 + 1)
          .params(jenkins_params()),
      );
    }
    specs.push(stage);
  }
  specs
}

// --- Benchmark Functions ---

fn bench_action_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("ActionBuild");
  let builder = ActionBuilder::new(Arc::new(ProviderRegistry::with_builtin_providers()));
  let ctx = bench_context();

  group.bench_function("s3_source", |b| {
    b.iter_batched(
      || ActionRequest::new("source", "S3", Category::Source).params(s3_params()),
      |request| builder.build(&ctx, request).unwrap(),
      criterion::BatchSize::SmallInput,
    );
  });
  group.finish();
}

fn bench_pipeline_assembly(c: &mut Criterion) {
  let mut group = c.benchmark_group("PipelineAssembly");
  let assembler = assembler();
  let ctx = bench_context();

  for num_stages in [1usize, 5, 20].iter() {
    for actions_per_stage in [1usize, 4, 16].iter() {
      group.throughput(Throughput::Elements((*num_stages * *actions_per_stage) as u64));
      group.bench_with_input(
        BenchmarkId::new(format!("{}stages_{}actions", num_stages, actions_per_stage), num_stages * actions_per_stage),
        &(*num_stages, *actions_per_stage),
        |b, &(stages, actions)| {
          b.iter_batched(
            || pipeline_specs(stages, actions),
            |specs| assembler.assemble(&ctx, "bench", specs).unwrap(),
            criterion::BatchSize::SmallInput,
          );
        },
      );
    }
  }
  group.finish();
}

fn bench_render(c: &mut Criterion) {
  let mut group = c.benchmark_group("Render");
  let pipeline = assembler().assemble(&bench_context(), "bench", pipeline_specs(10, 4)).unwrap();
  let renderer = JsonTemplateRenderer::new();

  group.bench_function("json_template_10x4", |b| {
    b.iter(|| renderer.render(&pipeline).unwrap());
  });
  group.finish();
}

criterion_group!(benches, bench_action_build, bench_pipeline_assembly, bench_render);
criterion_main!(benches);

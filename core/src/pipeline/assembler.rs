// stagehand/src/pipeline/assembler.rs

//! Contains `PipelineAssembler`, which composes every stage of a pipeline
//! and reports all failures at once.

use super::{ParameterStore, PipelineDefinition};
use crate::context::IdentityContext;
use crate::error::{ComposerError, ComposerResult, StageFailure};
use crate::stage::{StageComposer, StageSpec};

use std::collections::HashSet;
use tracing::{event, instrument, Level};

#[derive(Debug, Clone)]
pub struct PipelineAssembler {
  composer: StageComposer,
}

impl PipelineAssembler {
  pub fn new(composer: StageComposer) -> Self {
    Self { composer }
  }

  pub fn composer(&self) -> &StageComposer {
    &self.composer
  }

  /// Composes every spec in order.
  ///
  /// Composition does not stop at the first bad stage: every stage is tried
  /// and all failures come back together in [`ComposerError::Assembly`], so
  /// no partial pipeline is ever returned.
  #[instrument(
    name = "PipelineAssembler::assemble",
    skip_all,
    fields(pipeline = %pipeline_name, num_stages = specs.len()),
    err(Display)
  )]
  pub fn assemble(
    &self,
    context: &IdentityContext,
    pipeline_name: &str,
    specs: Vec<StageSpec>,
  ) -> ComposerResult<PipelineDefinition> {
    self.assemble_resolved(context, pipeline_name, specs.into_iter().map(Ok).collect())
  }

  /// Like [`PipelineAssembler::assemble`], but first resolves each spec's
  /// `parameter_key` from `store`.
  ///
  /// Resolved params sit beneath each action's inline params: a key set
  /// inline wins. Store failures are reported alongside composition failures.
  #[instrument(
    name = "PipelineAssembler::assemble_with_store",
    skip_all,
    fields(pipeline = %pipeline_name, num_stages = specs.len()),
    err(Display)
  )]
  pub async fn assemble_with_store<S>(
    &self,
    context: &IdentityContext,
    store: &S,
    pipeline_name: &str,
    specs: Vec<StageSpec>,
  ) -> ComposerResult<PipelineDefinition>
  where
    S: ParameterStore + ?Sized,
  {
    let mut resolved = Vec::with_capacity(specs.len());
    for mut spec in specs {
      let Some(stage_key) = spec.parameter_key.clone() else {
        resolved.push(Ok(spec));
        continue;
      };
      event!(Level::DEBUG, stage = %spec.name, %stage_key, "Resolving stage parameters.");
      match store.resolve(&stage_key).await {
        Ok(shared) => {
          spec.merge_shared_params(&shared);
          resolved.push(Ok(spec));
        }
        Err(error) => resolved.push(Err(StageFailure {
          stage_name: spec.name,
          error,
        })),
      }
    }
    self.assemble_resolved(context, pipeline_name, resolved)
  }

  fn assemble_resolved(
    &self,
    context: &IdentityContext,
    pipeline_name: &str,
    specs: Vec<Result<StageSpec, StageFailure>>,
  ) -> ComposerResult<PipelineDefinition> {
    if specs.is_empty() {
      return Err(ComposerError::EmptyPipeline {
        pipeline_name: pipeline_name.to_string(),
      });
    }

    let mut seen = HashSet::new();
    let mut stages = Vec::with_capacity(specs.len());
    let mut failures = Vec::new();

    for spec in specs {
      let spec = match spec {
        Ok(spec) => spec,
        Err(failure) => {
          seen.insert(failure.stage_name.clone());
          failures.push(failure);
          continue;
        }
      };

      if !seen.insert(spec.name.clone()) {
        failures.push(StageFailure {
          error: ComposerError::StageInvariant {
            stage_name: spec.name.clone(),
            message: "stage name is declared more than once in the pipeline".to_string(),
          },
          stage_name: spec.name,
        });
        continue;
      }

      let stage_name = spec.name.clone();
      match self.composer.compose(context, spec) {
        Ok(stage) => stages.push(stage),
        Err(error) => failures.push(StageFailure { stage_name, error }),
      }
    }

    if !failures.is_empty() {
      event!(Level::ERROR, num_failures = failures.len(), "Pipeline assembly failed.");
      return Err(ComposerError::Assembly {
        pipeline_name: pipeline_name.to_string(),
        failures,
      });
    }

    event!(Level::INFO, num_stages = stages.len(), "Pipeline assembled.");
    Ok(PipelineDefinition::new(pipeline_name.to_string(), stages))
  }
}

impl Default for PipelineAssembler {
  fn default() -> Self {
    Self::new(StageComposer::with_builtin_providers())
  }
}

// stagehand/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Every way composing a pipeline can fail.
///
/// None of these are transient: composition performs no I/O apart from the
/// parameter store, so the composer never retries.
#[derive(Debug, Error)]
pub enum ComposerError {
  #[error("Provider '{provider}' requires configuration key '{key}'")]
  Validation { provider: String, key: String },

  #[error("Unknown provider: {provider}")]
  UnknownProvider { provider: String },

  #[error("Stage '{stage_name}' has no actions")]
  EmptyStage { stage_name: String },

  #[error("Pipeline '{pipeline_name}' has no stages")]
  EmptyPipeline { pipeline_name: String },

  #[error("Action '{action_name}' has run order 0; run orders start at 1")]
  InvalidRunOrder { action_name: String },

  #[error("Invalid value for parameter '{key}': {message}")]
  InvalidParameter { key: String, message: String },

  #[error("Stage '{stage_name}' is invalid: {message}")]
  StageInvariant { stage_name: String, message: String },

  #[error("Required environment variable '{variable}' is not set")]
  MissingEnvironment { variable: String },

  #[error("Parameter store failed to resolve '{stage_key}'. Source: {source}")]
  ParameterStoreFailure {
    stage_key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Pipeline '{pipeline_name}' failed to assemble {}", summarize(.failures))]
  Assembly {
    pipeline_name: String,
    failures: Vec<StageFailure>,
  },

  #[error("Failed to render pipeline definition: {0}")]
  Render(String),
}

/// One stage's contribution to an aggregated [`ComposerError::Assembly`].
#[derive(Debug)]
pub struct StageFailure {
  pub stage_name: String,
  pub error: ComposerError,
}

impl std::fmt::Display for StageFailure {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}] {}", self.stage_name, self.error)
  }
}

fn summarize(failures: &[StageFailure]) -> String {
  let joined = failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
  format!("({} stage error(s)): {}", failures.len(), joined)
}

impl ComposerError {
  /// Name of the missing key, when this is a [`ComposerError::Validation`].
  pub fn missing_key(&self) -> Option<&str> {
    match self {
      ComposerError::Validation { key, .. } => Some(key),
      _ => None,
    }
  }
}

pub type ComposerResult<T, E = ComposerError> = std::result::Result<T, E>;

// src/lib.rs

//! Stagehand: composes validated, immutable stage and action descriptors for
//! cross-account delivery pipelines.
//!
//! The crate turns a logical intent ("Source from S3", "Build with Jenkins")
//! plus a provider-specific parameter bag into stage definitions ready for a
//! pipeline orchestration engine:
//!  - An open registry of provider contracts (required keys, default owner).
//!  - An action builder that merges params with the deployment identity and
//!    validates them against the provider's contract.
//!  - A stage composer applying category defaults (build timeout, run order).
//!  - A pipeline assembler that aggregates every stage failure into one report.
//!  - A renderer producing the engine's declarative template.

pub mod action;
pub mod constructs;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod stage;

// --- Re-exports for the Public API ---

pub use crate::action::{ActionBuilder, ActionDescriptor, ActionRequest, Category, ParamMap};
pub use crate::context::IdentityContext;
pub use crate::error::{ComposerError, ComposerResult, StageFailure};
pub use crate::pipeline::{
  FunctionalParameterStore,
  JsonTemplateRenderer,
  ParameterStore,
  PipelineAssembler,
  PipelineDefinition,
  PipelineRenderer,
  StaticParameterStore,
};
pub use crate::provider::{ActionProvider, ProviderDefaults, ProviderRegistry};
pub use crate::stage::{ActionSpec, Stage, StageComposer, StageSpec};

/*
    Typical flow:
    1. Resolve an `IdentityContext` once at startup (`IdentityContext::from_env()`),
       aborting if it fails.
    2. Build a `ProviderRegistry` (built-ins plus any custom `ActionProvider`s)
       and wrap it in an `Arc`.
    3. Create `ActionBuilder` -> `StageComposer` -> `PipelineAssembler`.
    4. Describe stages as `StageSpec`s (or use `constructs::s3_source` etc.).
    5. `assembler.assemble(&ctx, "name", specs)` or `assemble_with_store(...)`.
    6. Hand the `PipelineDefinition` to a `PipelineRenderer`.
*/

// stagehand/src/pipeline/mod.rs

//! Assembles composed stages into a `PipelineDefinition`, resolves stage
//! parameters from a store, and renders the result for the orchestration engine.

pub mod assembler;
pub mod definition;
pub mod render;
pub mod store;

pub use assembler::PipelineAssembler;
pub use definition::PipelineDefinition;
pub use render::{JsonTemplateRenderer, PipelineRenderer};
pub use store::{FunctionalParameterStore, ParameterStore, StaticParameterStore};

// stagehand/src/provider/mod.rs

//! Provider contracts and the registry the builder dispatches through.

pub mod builtin;
pub mod contract;
pub mod registry;

pub use builtin::{JenkinsProvider, S3Provider, JENKINS_PROVIDER, S3_PROVIDER};
pub use contract::{ActionProvider, ProviderDefaults};
pub use registry::ProviderRegistry;

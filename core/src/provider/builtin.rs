// stagehand/src/provider/builtin.rs

//! Providers registered by [`ProviderRegistry::with_builtin_providers`](super::ProviderRegistry::with_builtin_providers).

use super::contract::{ActionProvider, ProviderDefaults};

pub const S3_PROVIDER: &str = "S3";
pub const JENKINS_PROVIDER: &str = "Jenkins";

/// Object-storage source: pulls an artifact from a bucket/key.
#[derive(Debug, Clone, Copy, Default)]
pub struct S3Provider;

impl ActionProvider for S3Provider {
  fn tag(&self) -> &str {
    S3_PROVIDER
  }

  fn required_keys(&self) -> &[&str] {
    &["bucket", "object_key"]
  }

  fn defaults(&self) -> ProviderDefaults {
    ProviderDefaults::with_owner("AWS")
  }
}

/// Build server invocation. Has no default owner; the owner is whatever the
/// action request supplies, or absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JenkinsProvider;

impl ActionProvider for JenkinsProvider {
  fn tag(&self) -> &str {
    JENKINS_PROVIDER
  }

  fn required_keys(&self) -> &[&str] {
    &["project_name", "server_url"]
  }
}
